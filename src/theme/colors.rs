//! Color constants for the dark glass palette.
//!
//! Exposed to the stylesheet as CSS custom properties by
//! [`root_variables`].

// === VOID (Backgrounds) ===
pub const VOID: &str = "#050507";
pub const VOID_RAISED: &str = "#0c0c12";

// === GLASS (Cards) ===
pub const GLASS: &str = "rgba(255, 255, 255, 0.03)";
pub const GLASS_BORDER: &str = "rgba(255, 255, 255, 0.08)";

// === ACCENTS ===
pub const ACCENT_BLUE: &str = "#00d2ff";
pub const ACCENT_BLUE_SOFT: &str = "rgba(0, 210, 255, 0.1)";
pub const ACCENT_VIOLET: &str = "#7b2ff7";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f5f5f7";
pub const TEXT_SECONDARY: &str = "rgba(245, 245, 247, 0.65)";
pub const TEXT_MUTED: &str = "rgba(245, 245, 247, 0.4)";

const PALETTE: [(&str, &str); 10] = [
    ("void", VOID),
    ("void-raised", VOID_RAISED),
    ("glass", GLASS),
    ("glass-border", GLASS_BORDER),
    ("accent-blue", ACCENT_BLUE),
    ("accent-blue-soft", ACCENT_BLUE_SOFT),
    ("accent-violet", ACCENT_VIOLET),
    ("text-primary", TEXT_PRIMARY),
    ("text-secondary", TEXT_SECONDARY),
    ("text-muted", TEXT_MUTED),
];

/// `:root` block declaring one `--name` custom property per palette color.
pub fn root_variables() -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in PALETTE {
        css.push_str(&format!("  --{}: {};\n", name, value));
    }
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_variables_declare_palette() {
        let css = root_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("  --accent-blue: #00d2ff;\n"));
        assert!(css.contains("  --void: #050507;\n"));
        assert_eq!(css.matches("--").count(), PALETTE.len());
    }
}
