//! Global CSS styles for Overture.
//!
//! Dark, minimal aesthetic; all sequence-critical motion (particle fade,
//! skip-button fade-in, reveal cascade) lives here so the components only
//! toggle classes and set per-element delays.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --void-black: #0a0a0a;
  --void-deep: #101018;
  --void-border: #1a1a1a;

  /* Accents */
  --gold: #d4af37;
  --gold-glow: rgba(212, 175, 55, 0.3);
  --cyan: #00d4aa;
  --cyan-glow: rgba(0, 212, 170, 0.3);

  /* Text */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Motion */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --reveal: 0.8s ease-out;
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
}

body {
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

/* === Intro Overlay === */
.intro-section {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: radial-gradient(ellipse at center, var(--void-deep) 0%, var(--void-black) 70%);
  outline: none;
  opacity: 1;
  /* Duration arrives as an inline custom property from the overlay */
  transition: opacity var(--fade-out, 1000ms) ease-out;
}

.intro-section.fading {
  opacity: 0;
  pointer-events: none;
}

.intro-container {
  position: relative;
  text-align: center;
  opacity: 0;
}

.intro-active .intro-container {
  animation: introEnter 1.2s ease-out forwards;
}

@keyframes introEnter {
  from {
    opacity: 0;
    transform: scale(0.92) translateY(16px);
  }
  to {
    opacity: 1;
    transform: scale(1) translateY(0);
  }
}

.intro-title {
  font-family: var(--font-serif);
  font-size: 3.5rem;
  font-weight: 400;
  letter-spacing: 0.15em;
  color: var(--gold);
  text-shadow: 0 0 30px var(--gold-glow);
}

.loading-text {
  margin-top: 1.5rem;
  font-size: 0.95rem;
  color: var(--text-secondary);
  letter-spacing: 0.05em;
  min-height: 1.7em;
}

.loading-bar {
  margin: 1.5rem auto 0;
  width: 220px;
  height: 2px;
  background: var(--void-border);
  border-radius: 1px;
  overflow: hidden;
}

.loading-bar-fill {
  height: 100%;
  width: 0;
  background: linear-gradient(90deg, var(--cyan), var(--gold));
  box-shadow: 0 0 8px var(--cyan-glow);
}

.intro-active .loading-bar-fill {
  /* Fills over the full configured intro duration */
  animation: loadingFill var(--intro-duration, 7000ms) linear forwards;
}

@keyframes loadingFill {
  from { width: 0; }
  to { width: 100%; }
}

/* === Particles === */
.particle-field {
  position: absolute;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
  z-index: 10;
}

.particle {
  position: absolute;
  width: 4px;
  height: 4px;
  border-radius: 50%;
  pointer-events: none;
  animation: particleFade var(--particle-life, 2000ms) ease-out forwards;
}

@keyframes particleFade {
  0% {
    opacity: 0;
    transform: scale(0) translateY(0);
  }
  50% {
    opacity: 1;
    transform: scale(1) translateY(-50px);
  }
  100% {
    opacity: 0;
    transform: scale(0) translateY(-100px);
  }
}

/* === Skip Button === */
.skip-button {
  position: absolute;
  top: 2rem;
  right: 2rem;
  z-index: 100;
  border: 1px solid;
  color: var(--text-primary);
  font-family: var(--font-mono);
  font-size: 0.9rem;
  padding: 0.5rem 1rem;
  border-radius: 25px;
  cursor: pointer;
  backdrop-filter: blur(10px);
  transition: transform var(--transition-normal), filter var(--transition-normal);
  opacity: 0;
  animation: skipFadeIn 1s ease-out 2s forwards;
}

.skip-button:hover {
  transform: scale(1.05);
  filter: brightness(1.6);
}

@keyframes skipFadeIn {
  from { opacity: 0; }
  to { opacity: 1; }
}

/* === Main Content === */
.main-content {
  max-width: 960px;
  margin: 0 auto;
  padding: 4rem 2rem;
}

.content-section {
  margin-bottom: 4rem;
}

.content-section h2 {
  font-family: var(--font-serif);
  font-size: 2rem;
  font-weight: 400;
  color: var(--gold);
  margin-bottom: 1rem;
}

.content-section p {
  color: var(--text-secondary);
  max-width: 42rem;
}

/* Reveal cascade: hidden until the sequence advances, then each element
   transitions in after its own --reveal-delay */
.main-content .reveal {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--reveal), transform var(--reveal);
  transition-delay: var(--reveal-delay, 0ms);
}

.main-content.advanced .reveal {
  opacity: 1;
  transform: translateY(0);
}

.feature-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 1.5rem;
  margin-top: 2rem;
}

.feature-card {
  background: var(--void-deep);
  border: 1px solid var(--void-border);
  border-radius: 8px;
  padding: 1.5rem;
  transition: border-color var(--transition-fast);
}

.feature-card:hover {
  border-color: var(--gold-glow);
}

.feature-title {
  font-size: 1.1rem;
  font-weight: 500;
  color: var(--cyan);
  margin-bottom: 0.5rem;
}

.feature-body {
  font-size: 0.9rem;
  color: var(--text-muted);
}

/* === Footer === */
.content-footer {
  border-top: 1px solid var(--void-border);
  padding-top: 2rem;
}

.footer-nav {
  display: flex;
  gap: 2rem;
  justify-content: center;
}

.anchor-link {
  color: var(--cyan);
  text-decoration: none;
  font-size: 0.9rem;
  transition: color var(--transition-fast);
}

.anchor-link:hover {
  color: var(--gold);
}
"#;
