//! Global CSS styles for Folio.
//!
//! Dark palette by default; `[data-theme="light"]` on the page container
//! swaps the custom properties. Skeleton shimmer lives here too.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
.page {
  /* Surfaces */
  --bg: #0b0d12;
  --bg-raised: #12151c;
  --border: #1f2430;

  /* Accent */
  --accent: #6c8cff;
  --accent-glow: rgba(108, 140, 255, 0.3);

  /* Text */
  --text-primary: #eef0f5;
  --text-secondary: rgba(238, 240, 245, 0.72);
  --text-muted: rgba(238, 240, 245, 0.5);

  /* Semantic */
  --danger: #ff5c7a;
  --success: #4fd18b;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-3xl: 2.75rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-reveal: 600ms cubic-bezier(0.4, 0, 0.2, 1);
}

.page[data-theme="light"] {
  --bg: #f7f8fb;
  --bg-raised: #ffffff;
  --border: #e2e5ee;
  --accent: #3552d9;
  --accent-glow: rgba(53, 82, 217, 0.2);
  --text-primary: #161a23;
  --text-secondary: rgba(22, 26, 35, 0.72);
  --text-muted: rgba(22, 26, 35, 0.5);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

/* The page container is the scroll root */
.page {
  height: 100vh;
  overflow-y: auto;
  scroll-behavior: smooth;
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.6;
  transition: background var(--transition-normal), color var(--transition-normal);
}

a {
  color: var(--accent);
  text-decoration: none;
}

main > section {
  max-width: 1100px;
  margin: 0 auto;
  padding: 5rem 1.5rem;
}

.section-title {
  font-size: var(--text-xl);
  margin-bottom: 1.5rem;
}

/* === Scroll Progress === */
.progress {
  position: sticky;
  top: 0;
  height: 3px;
  z-index: 50;
  background: transparent;
}

.progress .bar {
  height: 100%;
  width: 0;
  background: var(--accent);
  box-shadow: 0 0 8px var(--accent-glow);
}

/* === Header === */
.site-header {
  position: sticky;
  top: 3px;
  z-index: 40;
  background: color-mix(in srgb, var(--bg) 85%, transparent);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--border);
}

.nav {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0.75rem 1.5rem;
  display: flex;
  align-items: center;
  gap: 1.5rem;
}

.brand {
  font-weight: 700;
  font-size: var(--text-lg);
  color: var(--text-primary);
}

.nav-links {
  display: flex;
  gap: 1.25rem;
  list-style: none;
  margin-left: auto;
}

.nav-links a {
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.nav-links a:hover {
  color: var(--text-primary);
}

.nav-actions {
  display: flex;
  gap: 0.5rem;
}

.icon-btn {
  width: 36px;
  height: 36px;
  border-radius: 10px;
  border: 1px solid var(--border);
  background: var(--bg-raised);
  color: var(--text-primary);
  cursor: pointer;
  font-size: var(--text-base);
}

.nav-toggle {
  display: none;
}

@media (max-width: 768px) {
  .nav-toggle {
    display: inline-block;
  }

  .nav-links {
    display: none;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    flex-direction: column;
    padding: 1rem 1.5rem;
    background: var(--bg-raised);
    border-bottom: 1px solid var(--border);
  }

  .nav-links.open {
    display: flex;
  }
}

/* === Hero & Parallax === */
.hero {
  position: relative;
  overflow: hidden;
  min-height: 70vh;
  display: flex;
  align-items: center;
}

.parallax {
  position: absolute;
  inset: -20px;
  background:
    radial-gradient(circle at 20% 30%, var(--accent-glow), transparent 40%),
    radial-gradient(circle at 80% 70%, var(--accent-glow), transparent 45%);
  transition: transform 80ms linear;
  pointer-events: none;
}

.hero-content {
  position: relative;
  max-width: 640px;
}

.hero-content h1 {
  font-size: var(--text-3xl);
  line-height: 1.15;
  margin: 0.5rem 0 1rem;
}

.eyebrow {
  color: var(--accent);
  font-size: var(--text-sm);
  text-transform: uppercase;
  letter-spacing: 0.12em;
}

.lead {
  color: var(--text-secondary);
  font-size: var(--text-lg);
}

.hero-actions {
  display: flex;
  gap: 0.75rem;
  margin-top: 1.5rem;
}

.skills {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  list-style: none;
  margin-top: 1rem;
}

.skills li {
  padding: 0.25rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: 999px;
  font-size: var(--text-sm);
}

/* === Buttons === */
.btn, .btn-ghost {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.55rem 1.1rem;
  border-radius: 10px;
  font-size: var(--text-sm);
  font-weight: 600;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.btn {
  background: var(--accent);
  color: #fff;
  border: 1px solid var(--accent);
}

.btn:hover {
  box-shadow: 0 0 16px var(--accent-glow);
}

.btn:disabled {
  opacity: 0.6;
  cursor: progress;
}

.btn-ghost {
  background: transparent;
  color: var(--text-primary);
  border: 1px solid var(--border);
}

.btn-ghost:hover {
  border-color: var(--accent);
}

/* === Filters === */
.toolbar {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1.5rem;
}

.filters {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.chip {
  padding: 0.35rem 0.9rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: var(--bg-raised);
  color: var(--text-secondary);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.chip.active {
  background: var(--accent);
  border-color: var(--accent);
  color: #fff;
}

.search input {
  min-width: 240px;
  padding: 0.5rem 0.9rem;
  border-radius: 10px;
  border: 1px solid var(--border);
  background: var(--bg-raised);
  color: var(--text-primary);
}

/* === Project Grid === */
.grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.25rem;
}

.card {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 16px;
  overflow: hidden;
}

.card .thumb {
  display: block;
  width: 100%;
  aspect-ratio: 16 / 10;
  object-fit: cover;
  background: var(--border);
}

.card .pad {
  padding: 1rem 1.1rem 1.2rem;
}

.card h3 {
  font-size: var(--text-lg);
  margin-bottom: 0.35rem;
}

.card p {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.35rem;
  margin: 0.75rem 0;
}

.tags span {
  font-size: 0.75rem;
  padding: 0.15rem 0.55rem;
  border-radius: 6px;
  background: var(--accent-glow);
  color: var(--text-primary);
}

.actions {
  display: flex;
  gap: 0.5rem;
}

/* === Reveal === */
.reveal {
  opacity: 0;
  transform: translateY(16px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.reveal.show {
  opacity: 1;
  transform: none;
}

/* === Skeleton === */
.skeleton {
  background: linear-gradient(90deg, #ffffff0a, #ffffff15, #ffffff0a);
  background-size: 200% 100%;
  animation: shimmer 1.2s infinite;
}

.skeleton.line {
  height: 16px;
  margin: 8px 0;
  border-radius: 8px;
}

.skeleton.line.short {
  width: 60%;
}

@keyframes shimmer {
  0% { background-position: 0 0; }
  100% { background-position: 200% 0; }
}

/* === Modal === */
.modal {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
  background: rgba(0, 0, 0, 0.6);
  animation: fade-in var(--transition-fast);
}

.modal-content {
  position: relative;
  width: min(720px, 100%);
  max-height: 90vh;
  overflow-y: auto;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 18px;
  padding: 1.25rem;
}

.modal-cover {
  width: 100%;
  border-radius: 12px;
  margin-bottom: 1rem;
}

.modal .close {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

/* === Contact === */
.contact-form {
  display: grid;
  gap: 1rem;
  max-width: 560px;
}

.field {
  display: grid;
  gap: 0.35rem;
}

.field label {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.field input, .field textarea {
  padding: 0.6rem 0.8rem;
  border-radius: 10px;
  border: 1px solid var(--border);
  background: var(--bg-raised);
  color: var(--text-primary);
  font: inherit;
}

.check {
  display: flex;
  gap: 0.5rem;
  align-items: center;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.form-status {
  min-height: 1.5em;
  font-size: var(--text-sm);
}

/* === Footer === */
.site-footer {
  padding: 2rem 1.5rem;
  text-align: center;
  color: var(--text-muted);
  border-top: 1px solid var(--border);
}
"#;
