//! Static page content.
//!
//! Everything the page says lives here as typed data; the view layer only
//! decides how to lay it out.

/// In-page navigation targets, in navbar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::Home,
        Anchor::About,
        Anchor::Skills,
        Anchor::Projects,
        Anchor::Contact,
    ];

    /// Element id of the section
    pub fn id(&self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Skills => "skills",
            Anchor::Projects => "projects",
            Anchor::Contact => "contact",
        }
    }

    /// Navbar label
    pub fn label(&self) -> &'static str {
        match self {
            Anchor::Home => "Home",
            Anchor::About => "About",
            Anchor::Skills => "Skills",
            Anchor::Projects => "Projects",
            Anchor::Contact => "Contact",
        }
    }

    /// Fragment link scrolling to the section
    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

/// Icons the page draws. Rendering lives in the UI crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Github,
    Linkedin,
    Mail,
    ExternalLink,
    MapPin,
    Code,
    Server,
    Globe,
    ShieldCheck,
    Terminal,
    Cpu,
    ArrowUpRight,
    Lock,
}

/// A run of body text, optionally emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Plain(&'static str),
    Strong(&'static str),
}

impl Span {
    pub fn text(&self) -> &'static str {
        match self {
            Span::Plain(text) | Span::Strong(text) => text,
        }
    }
}

/// Flatten spans into plain text.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::text).collect()
}

/// Label and heading shown above a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionIntro {
    pub label: &'static str,
    pub heading: &'static str,
}

/// A link leaving the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutboundLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: IconKind,
    /// Open in a new browsing context
    pub new_context: bool,
}

impl OutboundLink {
    pub fn target(&self) -> Option<&'static str> {
        self.new_context.then_some("_blank")
    }

    pub fn rel(&self) -> Option<&'static str> {
        self.new_context.then_some("noopener noreferrer")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    /// Navbar logo; the trailing dot is drawn in the accent color
    pub initials: &'static str,
    pub portrait_url: &'static str,
    pub title_lead: &'static str,
    pub title_accent: &'static str,
    pub subtitle: [&'static str; 2],
    pub about: &'static [Span],
    pub interests: &'static [&'static str],
    pub location: &'static str,
    pub copyright: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub icon: IconKind,
    pub items: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub icon: IconKind,
    pub description: &'static [Span],
    pub tech: &'static [&'static str],
    /// Badge next to the title, e.g. "Ongoing"
    pub status: Option<&'static str>,
    pub repo_url: &'static str,
    pub live_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub headline_lead: &'static str,
    pub headline_accent: &'static str,
    pub blurb: &'static str,
    pub email: OutboundLink,
    pub socials: [OutboundLink; 2],
}

pub const PROFILE: Profile = Profile {
    name: "Sathwik Gampa",
    initials: "SG",
    portrait_url: "https://i.postimg.cc/TwBy55gh/Whats-App-Image-2026-01-07-at-3-35-06-PM.jpg",
    title_lead: "Building Logic",
    title_accent: "That Scales.",
    subtitle: [
        "Architecting decentralized systems and real-time infrastructure.",
        "I solve complex problems with clean, production-ready code.",
    ],
    about: &[
        Span::Plain("I don't just write code; I engineer solutions. As a B.Tech IT student at VNRVJIET, I've moved past academic theory to build resilient systems. My focus is on "),
        Span::Strong("Blockchain Security"),
        Span::Plain(", "),
        Span::Strong("Real-time Logistics"),
        Span::Plain(", and "),
        Span::Strong("Cloud Architecture"),
        Span::Plain(". I build with a startup mindset: shipping features that matter, optimizing for latency, and ensuring security isn't an afterthought."),
    ],
    interests: &["Blockchain", "Cybersecurity", "Cloud Native", "AI/ML"],
    location: "Hyderabad, India",
    copyright: "\u{00A9} 2026 Sathwik Gampa",
};

pub const ABOUT_INTRO: SectionIntro = SectionIntro {
    label: "About Me",
    heading: "Beyond Syntax",
};

pub const SKILLS_INTRO: SectionIntro = SectionIntro {
    label: "Arsenal",
    heading: "Technical Stack",
};

pub const PROJECTS_INTRO: SectionIntro = SectionIntro {
    label: "Case Studies",
    heading: "Selected Works",
};

pub const SKILLS: [SkillGroup; 4] = [
    SkillGroup {
        title: "Languages",
        icon: IconKind::Code,
        items: "Java, Python, C, Solidity, JavaScript",
    },
    SkillGroup {
        title: "Web & Backend",
        icon: IconKind::Globe,
        items: "React, Node.js, Firebase, Socket.io, PHP",
    },
    SkillGroup {
        title: "Blockchain & Cloud",
        icon: IconKind::Server,
        items: "Ethereum, IPFS, Oracle Cloud, AWS",
    },
    SkillGroup {
        title: "Tools",
        icon: IconKind::Terminal,
        items: "Git, Docker, Linux, VS Code",
    },
];

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Bus Tracker App",
        icon: IconKind::MapPin,
        description: &[
            Span::Plain("Mission-critical logistics system. Engineered sub-second latency GPS tracking using "),
            Span::Strong("Socket.io"),
            Span::Plain(" and "),
            Span::Strong("Firebase"),
            Span::Plain(". Features dual-interfaces for drivers and students to optimize campus routing."),
        ],
        tech: &["React", "Node.js", "Real-time"],
        status: None,
        repo_url: "#",
        live_url: "#",
    },
    Project {
        title: "TrustLink Verifier",
        icon: IconKind::ShieldCheck,
        description: &[
            Span::Plain("Defensive platform against employment fraud. Implements custom "),
            Span::Strong("fraud-pattern recognition logic"),
            Span::Plain(" to identify fake internships. Responsive UI designed for maximum accessibility."),
        ],
        tech: &["Security Logic", "PHP", "Analytics"],
        status: None,
        repo_url: "#",
        live_url: "#",
    },
    Project {
        title: "Decentralized Certs",
        icon: IconKind::Cpu,
        description: &[
            Span::Plain("Trustless academic infrastructure. Uses "),
            Span::Strong("Ethereum Smart Contracts"),
            Span::Plain(" to hash credentials and "),
            Span::Strong("IPFS"),
            Span::Plain(" for storage. Eliminates administrative bottlenecks with one-click verification."),
        ],
        tech: &["Solidity", "Web3.js", "IPFS"],
        status: None,
        repo_url: "#",
        live_url: "#",
    },
    Project {
        title: "Smart Contracts",
        icon: IconKind::Lock,
        description: &[
            Span::Plain("Decentralized freelance payment system. Solves trust issues by "),
            Span::Strong("locking funds in escrow"),
            Span::Plain(" until work is confirmed. Ensures fair transactions between clients and freelancers."),
        ],
        tech: &["Ethereum", "Smart Contracts", "Escrow"],
        status: Some("Ongoing"),
        repo_url: "#",
        live_url: "#",
    },
];

pub const CONTACT: Contact = Contact {
    headline_lead: "Let's Build Something",
    headline_accent: "Impossible.",
    blurb: "Open for full-stack and blockchain engineering roles.",
    email: OutboundLink {
        label: "Get in Touch",
        href: "mailto:email@example.com",
        icon: IconKind::Mail,
        new_context: false,
    },
    socials: [
        OutboundLink {
            label: "GitHub",
            href: "https://github.com/sathwikgampa",
            icon: IconKind::Github,
            new_context: true,
        },
        OutboundLink {
            label: "LinkedIn",
            href: "https://www.linkedin.com/in/sathwik-gampa-370645326",
            icon: IconKind::Linkedin,
            new_context: true,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn anchors_in_navbar_order() {
        let ids: Vec<_> = Anchor::ALL.iter().map(Anchor::id).collect();
        assert_eq!(ids, ["home", "about", "skills", "projects", "contact"]);
        assert_eq!(Anchor::Projects.href(), "#projects");
        assert_eq!(Anchor::Skills.label(), "Skills");
    }

    #[test]
    fn anchor_ids_unique() {
        let ids: HashSet<_> = Anchor::ALL.iter().map(Anchor::id).collect();
        assert_eq!(ids.len(), Anchor::ALL.len());
    }

    #[test]
    fn external_profiles_open_new_context() {
        for link in CONTACT.socials {
            assert!(link.href.starts_with("https://"));
            assert_eq!(link.target(), Some("_blank"));
            assert_eq!(link.rel(), Some("noopener noreferrer"));
        }
        assert!(CONTACT.email.href.starts_with("mailto:"));
        assert_eq!(CONTACT.email.target(), None);
    }

    #[test]
    fn only_last_project_is_ongoing() {
        let statuses: Vec<_> = PROJECTS.iter().map(|p| p.status).collect();
        assert_eq!(statuses, [None, None, None, Some("Ongoing")]);
    }

    #[test]
    fn plain_text_joins_spans() {
        let text = plain_text(PROJECTS[0].description);
        assert!(text.contains("using Socket.io and Firebase."));
    }
}
