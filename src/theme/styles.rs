//! Global CSS styles for the portfolio.
//!
//! Dark glass aesthetic. Palette variables come from `colors.rs`; entrance
//! and hover motion is applied inline from `portfolio-core`, so nothing
//! here animates sections on its own.

pub const GLOBAL_STYLES: &str = r#"
/* === Typography & Motion Tokens === */
:root {
  --font-display: 'Space Grotesk', 'Inter', system-ui, sans-serif;
  --font-body: 'Inter', system-ui, -apple-system, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --radius-card: 20px;
  --radius-pill: 999px;
  --nav-height: 72px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-body);
  background: var(--void);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
  overflow-x: hidden;
}

a {
  color: inherit;
  text-decoration: none;
}

section[id] {
  scroll-margin-top: var(--nav-height);
}

.container {
  width: min(1120px, 100% - 3rem);
  margin: 0 auto;
}

.app-container {
  position: relative;
  min-height: 100vh;
}

/* === Preloader === */
.preloader {
  position: fixed;
  inset: 0;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--void);
}

.loader-circle {
  width: 56px;
  height: 56px;
  border-radius: 50%;
  border: 3px solid var(--glass-border);
  border-top-color: var(--accent-blue);
  animation: loader-spin 1s linear infinite;
}

@keyframes loader-spin {
  from { transform: rotate(0deg); }
  to { transform: rotate(360deg); }
}

/* === Noise Overlay === */
.noise-overlay {
  position: fixed;
  inset: 0;
  z-index: 1;
  pointer-events: none;
  opacity: 0.035;
  background-image: repeating-radial-gradient(circle at 0 0, #fff 0, transparent 1px, transparent 3px);
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  height: var(--nav-height);
  display: flex;
  align-items: center;
  background: transparent;
  border-bottom: 1px solid transparent;
  transition: background var(--transition-normal), height var(--transition-normal),
    border-color var(--transition-normal), backdrop-filter var(--transition-normal);
}

.navbar.scrolled {
  height: 60px;
  background: rgba(5, 5, 7, 0.72);
  backdrop-filter: blur(14px);
  -webkit-backdrop-filter: blur(14px);
  border-bottom-color: var(--glass-border);
}

@keyframes nav-enter {
  from { transform: translateY(-100px); }
  to { transform: translateY(0); }
}

.nav-content {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.logo {
  font-family: var(--font-display);
  font-size: 1.5rem;
  font-weight: 700;
  letter-spacing: -0.02em;
}

.logo span {
  color: var(--accent-blue);
}

.nav-links {
  display: flex;
  gap: 2rem;
}

.nav-item {
  font-size: 0.9rem;
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.nav-item:hover {
  color: var(--text-primary);
}

/* === Hero === */
.hero-section {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  overflow: hidden;
  padding-top: var(--nav-height);
}

.hero-section.centered .hero-content {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
  gap: 1.5rem;
  position: relative;
  z-index: 2;
}

.profile-orbit-wrapper {
  position: relative;
  width: 180px;
  height: 180px;
  display: flex;
  align-items: center;
  justify-content: center;
}

.orbit-c {
  position: absolute;
  inset: -12px;
  border-radius: 50%;
  border: 1px dashed rgba(0, 210, 255, 0.35);
  animation: loader-spin 24s linear infinite;
}

.profile-img-c {
  width: 100%;
  height: 100%;
  border-radius: 50%;
  overflow: hidden;
  border: 2px solid var(--glass-border);
}

.profile-img-c img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.hero-title {
  font-family: var(--font-display);
  font-size: clamp(2.5rem, 6vw, 4.5rem);
  line-height: 1.05;
  letter-spacing: -0.03em;
}

.gradient-text {
  background: linear-gradient(90deg, var(--accent-blue), var(--accent-violet));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-subtitle {
  max-width: 560px;
  color: var(--text-secondary);
  font-size: 1.1rem;
}

.hero-cta {
  display: flex;
  gap: 1rem;
  justify-content: center;
}

.bg-glow {
  position: absolute;
  width: 520px;
  height: 520px;
  border-radius: 50%;
  filter: blur(120px);
  opacity: 0.25;
  pointer-events: none;
}

.top-glow {
  top: -180px;
  right: -120px;
  background: var(--accent-violet);
}

.bottom-glow {
  bottom: -220px;
  left: -160px;
  background: var(--accent-blue);
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.8rem 1.6rem;
  border-radius: var(--radius-pill);
  font-weight: 600;
  font-size: 0.95rem;
  transition: transform var(--transition-fast), box-shadow var(--transition-normal),
    border-color var(--transition-normal);
}

.btn-primary {
  background: linear-gradient(90deg, var(--accent-blue), var(--accent-violet));
  color: #fff;
}

.btn-primary:hover {
  box-shadow: 0 10px 30px rgba(0, 210, 255, 0.25);
  transform: translateY(-2px);
}

.btn-ghost {
  border: 1px solid var(--glass-border);
  color: var(--text-primary);
}

.btn-ghost:hover {
  border-color: var(--accent-blue);
}

/* === Sections === */
.section {
  position: relative;
  z-index: 2;
}

.py-large {
  padding: 7rem 0;
}

.section-header {
  margin-bottom: 3rem;
}

.section-label {
  display: inline-block;
  font-family: var(--font-mono);
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 0.2em;
  color: var(--accent-blue);
  margin-bottom: 0.5rem;
}

.section-header h2 {
  font-family: var(--font-display);
  font-size: clamp(2rem, 4vw, 3rem);
  letter-spacing: -0.02em;
}

.glass-card {
  background: var(--glass);
  border: 1px solid var(--glass-border);
  border-radius: var(--radius-card);
  backdrop-filter: blur(10px);
}

/* === About === */
.about-wrapper {
  padding: 2.5rem;
}

.about-text {
  font-size: 1.1rem;
  color: var(--text-secondary);
}

.about-text strong {
  color: var(--text-primary);
}

.interests-grid {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-top: 2rem;
}

.interest-pill {
  padding: 0.4rem 1rem;
  border-radius: var(--radius-pill);
  border: 1px solid var(--glass-border);
  font-size: 0.85rem;
  color: var(--text-secondary);
}

/* === Skills === */
.skills-grid-bento {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 1.5rem;
}

.bento-card {
  padding: 2rem;
  background: var(--glass);
  border: 1px solid var(--glass-border);
  border-radius: var(--radius-card);
}

.bento-card:hover {
  border-color: rgba(0, 210, 255, 0.3);
}

.icon-box {
  width: 48px;
  height: 48px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 12px;
  background: var(--accent-blue-soft);
  color: var(--accent-blue);
  margin-bottom: 1.25rem;
}

.bento-card h3 {
  font-family: var(--font-display);
  margin-bottom: 0.5rem;
}

.bento-card p {
  color: var(--text-secondary);
  font-size: 0.95rem;
}

/* === Projects === */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 1.5rem;
}

.project-card {
  height: 100%;
  padding: 2rem;
  background: var(--void-raised);
  border: 1px solid var(--glass-border);
  border-radius: var(--radius-card);
  display: flex;
  flex-direction: column;
}

.project-top {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1.5rem;
}

.folder-icon {
  color: var(--accent-blue);
}

.links {
  display: flex;
  gap: 0.75rem;
  color: var(--text-secondary);
}

.links a:hover {
  color: var(--accent-blue);
}

.project-card h3 {
  font-family: var(--font-display);
  font-size: 1.35rem;
  margin-bottom: 1rem;
}

.project-title-row {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1rem;
}

.project-title-row h3 {
  margin-bottom: 0;
}

.status-badge {
  font-size: 0.75rem;
  padding: 4px 10px;
  border-radius: 12px;
  background: var(--accent-blue-soft);
  color: var(--accent-blue);
  border: 1px solid rgba(0, 210, 255, 0.2);
}

.project-desc {
  flex: 1;
  color: var(--text-secondary);
  font-size: 0.95rem;
}

.project-desc strong {
  color: var(--text-primary);
}

.project-tech {
  list-style: none;
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  margin-top: 1.5rem;
  font-family: var(--font-mono);
  font-size: 0.8rem;
  color: var(--text-muted);
}

/* === Contact === */
.contact-wrapper {
  text-align: center;
  display: flex;
  flex-direction: column;
  align-items: center;
}

.contact-wrapper h2 {
  font-family: var(--font-display);
  font-size: clamp(2.25rem, 5vw, 4rem);
  line-height: 1.1;
  letter-spacing: -0.03em;
}

.text-accent {
  color: var(--accent-blue);
}

.contact-sub {
  margin-top: 1.25rem;
  color: var(--text-secondary);
}

.contact-cta-box {
  margin-top: 2.5rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
}

.email-link {
  display: inline-flex;
  align-items: center;
  gap: 0.6rem;
  font-size: 1.25rem;
  font-weight: 600;
  padding: 1rem 2rem;
  border-radius: var(--radius-pill);
  border: 1px solid var(--glass-border);
  transition: border-color var(--transition-normal), box-shadow var(--transition-normal);
}

.email-link:hover {
  border-color: var(--accent-blue);
  box-shadow: 0 0 30px rgba(0, 210, 255, 0.15);
}

.inline-icon {
  width: 22px;
  height: 22px;
}

.social-row {
  display: flex;
  gap: 1.5rem;
  color: var(--text-secondary);
}

.social-row a:hover {
  color: var(--accent-blue);
}

.footer-loc {
  margin-top: 5rem;
  font-size: 0.85rem;
  color: var(--text-muted);
}

.footer-loc .copy {
  margin-top: 0.25rem;
}

/* === Small Screens === */
@media (max-width: 720px) {
  .nav-links {
    gap: 1rem;
  }

  .nav-item {
    font-size: 0.8rem;
  }

  .py-large {
    padding: 5rem 0;
  }
}
"#;
