//! Global CSS styles for the Jazz Portal.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NIGHT (Backgrounds) */
  --night: #0d1321;
  --night-lighter: #1d2d44;
  --night-border: #2b3a55;

  /* BRASS (Calls to action, highlights) */
  --brass: #e0a458;
  --brass-glow: rgba(224, 164, 88, 0.35);

  /* TEAL (Interactive, links, focus) */
  --teal: #3ab0a8;
  --teal-glow: rgba(58, 176, 168, 0.3);

  /* TEXT */
  --text-primary: #f0ebd8;
  --text-secondary: rgba(240, 235, 216, 0.75);
  --text-muted: rgba(240, 235, 216, 0.5);

  --danger: #e5484d;

  /* Typography */
  --font-display: 'Playfair Display', Georgia, serif;
  --font-body: 'Inter', 'Segoe UI', sans-serif;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
}

* { box-sizing: border-box; }

html, body {
  margin: 0;
  height: 100%;
  background: var(--night);
  color: var(--text-primary);
  font-family: var(--font-body);
}

/* === Buttons === */
.btn-primary, .btn-ghost, .btn-hero {
  font-family: var(--font-body);
  cursor: pointer;
  transition: all 0.25s ease;
  border-radius: 4px;
}

.btn-primary {
  padding: 0.75rem 1.5rem;
  background: var(--teal);
  border: 1px solid var(--teal);
  color: var(--night);
}

.btn-primary:hover { box-shadow: 0 0 20px var(--teal-glow); }

.btn-ghost {
  padding: 0.5rem 1rem;
  background: transparent;
  border: 1px solid var(--night-border);
  color: var(--text-secondary);
}

.btn-hero {
  margin-top: 2rem;
  padding: 1rem 3rem;
  background: var(--brass);
  border: none;
  color: var(--night);
  font-size: var(--text-lg);
  letter-spacing: 0.08em;
}

.btn-hero:hover {
  box-shadow: 0 0 30px var(--brass-glow);
  transform: translateY(-1px);
}

.btn-arrow {
  flex: none;
  width: 2.75rem;
  height: 2.75rem;
  border-radius: 50%;
  border: 1px solid var(--night-border);
  background: var(--night-lighter);
  color: var(--text-primary);
  font-size: 1.5rem;
  cursor: pointer;
}

.btn-arrow--disabled { visibility: hidden; }

.icon-btn {
  background: transparent;
  border: none;
  color: var(--text-secondary);
  font-size: 1.5rem;
  cursor: pointer;
}

/* === Inputs === */
.form-field { margin-bottom: 1.25rem; }

.input-label {
  display: block;
  margin-bottom: 0.5rem;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.input-field {
  width: 100%;
  padding: 0.75rem 1rem;
  background: transparent;
  border: 1px solid var(--night-border);
  border-radius: 4px;
  color: var(--text-primary);
  font-size: var(--text-base);
}

.input-field:focus {
  outline: none;
  border-color: var(--teal);
  box-shadow: 0 0 0 1px var(--teal), 0 0 20px var(--teal-glow);
}

/* === Landing === */
.landing {
  height: 100vh;
  overflow-y: auto;
  position: relative;
}

.parallax-wrapper {
  position: relative;
  min-height: 70vh;
  overflow: hidden;
}

.parallax-1, .parallax-2 {
  position: absolute;
  inset: 0;
  background-size: cover;
  background-position: center;
}

.parallax-1 {
  background: linear-gradient(160deg, var(--night) 0%, var(--night-lighter) 100%);
}

.parallax-2 { transition: background 1.5s ease-in-out; opacity: 0.6; }
.parallax-2#bg1 { background: radial-gradient(circle at 20% 30%, var(--brass-glow), transparent 60%); }
.parallax-2#bg2 { background: radial-gradient(circle at 75% 25%, var(--teal-glow), transparent 60%); }
.parallax-2#bg3 { background: radial-gradient(circle at 50% 80%, var(--brass-glow), transparent 55%); }

.parallax-content { position: relative; z-index: 1; }

.landing-hero {
  max-width: 820px;
  margin: 0 auto;
  padding: 8rem 2rem 4rem;
  text-align: center;
  transition: padding 0.4s ease;
}

.landing-hero.no-padding { padding-top: 4rem; }

.landing-title {
  font-family: var(--font-display);
  font-size: 3.25rem;
  margin: 0;
}

.landing-subtitle {
  margin-top: 1rem;
  color: var(--text-secondary);
  font-size: var(--text-lg);
}

.landing-section {
  padding: 4rem 2rem;
}

.section-header {
  text-align: center;
  font-family: var(--font-display);
  font-weight: 400;
}

/* === Carousel === */
.carousel {
  display: flex;
  align-items: center;
  gap: 1rem;
  max-width: 1100px;
  margin: 2rem auto 0;
}

.carousel__window {
  flex: 1;
  overflow: hidden;
}

.carousel__track {
  display: flex;
  gap: 3px;
  transition: transform 0.4s ease;
}

.feature-card {
  flex: none;
  width: calc((100% - 9px) / 4);
  min-height: 14rem;
  padding: 1.5rem;
  background: var(--night-lighter);
  border: 1px solid var(--night-border);
}

@media (max-width: 840px) {
  .feature-card { width: 100%; }
}

.feature-card--active:hover { border-color: var(--brass); }

.feature-card__icon { font-size: 2rem; color: var(--brass); }
.feature-card__title { font-family: var(--font-display); margin: 1rem 0 0.5rem; }
.feature-card__description { color: var(--text-secondary); font-size: var(--text-sm); }

/* === Sign-in Panel === */
.login-backdrop {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.5);
  z-index: 10;
}

.login-panel {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  width: min(380px, 100%);
  padding: 2rem;
  background: var(--night);
  border-left: 1px solid var(--night-border);
  z-index: 11;
}

.login-panel__header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 2rem;
}

.login-panel__error { color: var(--danger); font-size: var(--text-sm); }

/* === Services === */
.services-page { padding: 3rem 2rem; }

.services-header {
  display: flex;
  align-items: center;
  gap: 1.5rem;
  flex-wrap: wrap;
  margin-bottom: 2rem;
}

.page-title { font-family: var(--font-display); margin: 0; }
.services-user { color: var(--text-muted); margin: 0; }

.services-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1rem;
}

.services-grid .feature-card { width: auto; }
"#;
