//! Global CSS styles for the Driftline site.
//!
//! Injected once at the application root. The reveal keyframes are not
//! here; they are generated from the motion variant table.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* INK (Backgrounds) */
  --ink: #10141a;
  --ink-soft: #161b23;
  --ink-border: #242b36;

  /* ACCENT (Links, highlights, call-to-action) */
  --accent: #2ec4b6;
  --accent-soft: #8fe3dc;
  --accent-glow: rgba(46, 196, 182, 0.25);

  /* TEXT */
  --text-primary: #e8ecf1;
  --text-secondary: rgba(232, 236, 241, 0.72);
  --text-muted: rgba(232, 236, 241, 0.5);

  /* SEMANTIC */
  --warm: #ffb86b;
  --rose: #ff6b8a;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', 'Helvetica Neue', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 1.75rem;
  --text-2xl: 2.5rem;
  --text-3xl: 3.25rem;

  /* Transitions */
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
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--ink);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

a {
  color: var(--accent);
  text-decoration: none;
}

/* === Layout Shell === */
.layout {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.site-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  border-bottom: 1px solid var(--ink-border);
  background: var(--ink-soft);
}

.site-brand {
  font-size: var(--text-lg);
  font-weight: 700;
  color: var(--text-primary);
  letter-spacing: 0.02em;
}

.site-nav {
  display: flex;
  gap: 1.5rem;
}

.site-nav-link {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  transition: color var(--transition-fast);
}

.site-nav-link:hover {
  color: var(--accent);
}

.site-main {
  flex: 1;
}

.site-footer {
  padding: 1.5rem 2rem;
  border-top: 1px solid var(--ink-border);
  text-align: center;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.site-footer-fine {
  margin-top: 0.25rem;
}

/* === Hero === */
.hero {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 2rem;
  max-width: 72rem;
  margin: 0 auto;
  padding: 4rem 2rem;
  min-height: calc(100vh - 10rem);
}

.hero-intro {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  max-width: 34rem;
}

/* Glow that follows the pointer; position fed via --x / --y */
.hero-text {
  position: relative;
  font-size: var(--text-3xl);
  font-weight: 700;
  line-height: 1.2;
}

.hero-text::before {
  content: '';
  position: fixed;
  inset: 0;
  pointer-events: none;
  background: radial-gradient(
    500px circle at var(--x, 50%) var(--y, 50%),
    var(--accent-glow),
    transparent 40%
  );
}

/* Gradient name; highlight anchored at the element origin via
   --mouse-x / --mouse-y */
.hero-name {
  background-image: linear-gradient(120deg, var(--accent) 20%, var(--accent-soft) 80%);
  background-size: 200% 200%;
  background-position:
    calc(var(--mouse-x, 0px) / -10)
    calc(var(--mouse-y, 0px) / -10);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-wave {
  margin-left: 0.25rem;
}

.hero-description {
  color: var(--text-secondary);
  font-size: var(--text-lg);
}

.hero-button-row {
  display: flex;
}

/* === Hero Background === */
.hero-background {
  position: relative;
  flex-shrink: 0;
  width: 24rem;
  height: 24rem;
}

.hero-ray {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
}

.hero-circle {
  position: absolute;
  right: 10%;
  bottom: 15%;
  width: 10rem;
  height: 10rem;
  border-radius: 50%;
  background: var(--accent);
  opacity: 0.18;
  filter: blur(60px);
}

/* === Reveal Regions === */
/* Pose and playback come from the generated keyframes plus each region's
   inline animation shorthand. */
.reveal {
  will-change: opacity, transform;
}

/* === Social Links === */
.social-links {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.social-link {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  border: 1px solid var(--ink-border);
  color: var(--text-secondary);
  transition: color var(--transition-fast),
              border-color var(--transition-fast),
              background var(--transition-fast);
}

.social-link:hover {
  color: var(--text-primary);
  border-color: var(--accent);
  background: var(--accent);
}

/* === Moving Button === */
.moving-button {
  position: relative;
  overflow: hidden;
  padding: 1px;
  background: var(--ink-soft);
  border: 1px solid var(--ink-border);
}

.moving-button-spot {
  position: absolute;
  width: 5rem;
  height: 5rem;
  border-radius: 50%;
  background: radial-gradient(circle, var(--accent) 0%, transparent 70%);
  animation: border-orbit 4s linear infinite;
  offset-path: rect(0% auto 100% auto);
}

@keyframes border-orbit {
  from { offset-distance: 0%; }
  to { offset-distance: 100%; }
}

.moving-button-inner {
  position: relative;
  border-radius: inherit;
  background: var(--ink);
}

.hero-button-link {
  display: inline-block;
  padding: 0.75rem 1.75rem;
  color: var(--text-primary);
  font-weight: 600;
  transition: color var(--transition-fast);
}

.hero-button-link:hover {
  color: var(--accent);
}

/* === Docs Page === */
.docs-page {
  max-width: 46rem;
  margin: 0 auto;
  padding: 3rem 2rem;
}

.docs-markdown h1 {
  font-size: var(--text-2xl);
  margin-bottom: 1.5rem;
}

.docs-markdown h2 {
  font-size: var(--text-xl);
  margin: 2rem 0 0.75rem;
}

.docs-markdown p {
  margin-bottom: 1rem;
  color: var(--text-secondary);
}

.docs-markdown ul {
  margin: 0 0 1rem 1.5rem;
  color: var(--text-secondary);
}

.docs-markdown li {
  margin-bottom: 0.35rem;
}

.docs-markdown blockquote {
  border-left: 3px solid var(--accent);
  padding-left: 1rem;
  color: var(--text-muted);
  font-style: italic;
}

.docs-markdown table {
  border-collapse: collapse;
  margin-bottom: 1rem;
}

.docs-markdown th,
.docs-markdown td {
  border: 1px solid var(--ink-border);
  padding: 0.4rem 0.75rem;
}

/* === Responsive === */
@media (max-width: 900px) {
  .hero {
    flex-direction: column;
    text-align: center;
    padding: 2.5rem 1rem;
  }

  .hero-intro {
    align-items: center;
  }

  .hero-background {
    width: 16rem;
    height: 16rem;
  }

  .hero-text {
    font-size: var(--text-2xl);
  }
}
"#;
