//! Global CSS styles for the PA$TY site.
//!
//! Black-stage storefront look for the landing view, newsprint look for
//! the press kit, plus the print stylesheet the "Download Bio" flow uses.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --stage-black: #000000;
  --stage-panel: #111827;
  --stage-border: #1f2937;

  --acid: #22c55e;
  --acid-bright: #4ade80;
  --acid-glow: rgba(34, 197, 94, 0.3);

  --text-primary: #ffffff;
  --text-secondary: #9ca3af;
  --text-muted: #4b5563;

  --danger: #ef4444;

  --font-sans: 'Helvetica Neue', Arial, sans-serif;
  --font-mono: 'SF Mono', 'Consolas', monospace;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  background: var(--stage-black);
  color: var(--text-primary);
  font-family: var(--font-sans);
  overflow-x: hidden;
  cursor: none;
}

a { color: inherit; text-decoration: none; }
button { font: inherit; border: none; background: none; color: inherit; cursor: none; }
img { display: block; max-width: 100%; }
::selection { background: var(--acid); color: #000; }

/* === Custom Cursor === */
.custom-cursor {
  position: fixed;
  top: 0;
  left: 0;
  z-index: 100;
  pointer-events: none;
}
.cursor-glyph {
  display: block;
  color: var(--acid);
  font-size: 2.5rem;
  font-style: italic;
  font-weight: 900;
  text-shadow: 2px 2px 0 #000;
  transition: transform 300ms ease;
}
.custom-cursor.hovering .cursor-glyph { transform: scale(1.5) rotate(-12deg); }

/* === Navigation === */
.site-nav {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  z-index: 50;
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1.5rem;
  mix-blend-mode: difference;
}
.site-nav .wordmark {
  font-size: 1.25rem;
  font-weight: 700;
  letter-spacing: -0.05em;
  text-transform: uppercase;
}
.site-nav .nav-links {
  display: flex;
  align-items: center;
  gap: 1.5rem;
}
.glitch-link {
  text-transform: uppercase;
  font-family: var(--font-mono);
  font-size: 0.875rem;
  letter-spacing: 0.2em;
  transition: color 150ms ease;
}
.glitch-link:hover { color: var(--acid-bright); }

.cart-button { position: relative; transition: color 150ms ease; }
.cart-button:hover { color: var(--acid-bright); }
.menu-button { transition: color 150ms ease; }
.menu-button:hover { color: var(--acid-bright); }
.cart-badge {
  position: absolute;
  top: -0.5rem;
  right: -0.5rem;
  width: 1.25rem;
  height: 1.25rem;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--acid);
  color: #000;
  font-size: 0.75rem;
  font-weight: 700;
  border-radius: 9999px;
}

/* === Hero === */
.hero-section {
  position: relative;
  height: 120vh;
  width: 100%;
  overflow: hidden;
}
.hero-backdrop {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: none;
}
.hero-backdrop img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  object-position: center;
}
.hero-backdrop::after {
  /* film-grain texture over the artist photo */
  content: "";
  position: absolute;
  inset: 0;
  z-index: 1;
  mix-blend-mode: overlay;
  opacity: 0.12;
  background-image:
    repeating-radial-gradient(circle at 17% 32%, #fff 0, transparent 1px, transparent 3px),
    repeating-radial-gradient(circle at 73% 64%, #fff 0, transparent 1px, transparent 2px);
  background-size: 5px 5px, 3px 3px;
}
.lightning-overlay {
  position: absolute;
  inset: 0;
  z-index: 5;
  background: #fff;
  mix-blend-mode: overlay;
  pointer-events: none;
  transition: opacity 100ms ease-out;
}
.darken-overlay {
  position: fixed;
  inset: 0;
  z-index: 10;
  pointer-events: none;
}
.hero-foreground {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 100vh;
  z-index: 20;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  padding: 1rem;
}
.hero-logo { width: 100%; max-width: 42rem; }
.scroll-hint {
  position: absolute;
  bottom: 2.5rem;
  width: 1px;
  height: 4rem;
  background: linear-gradient(to bottom, var(--acid), transparent);
  animation: bounce 1.5s infinite;
}
@keyframes bounce {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-25%); }
}

/* === Content sheet over the fixed hero === */
.content-sheet {
  position: relative;
  z-index: 30;
  margin-top: -20vh;
  background: var(--stage-black);
  border-top: 1px solid var(--stage-border);
  border-radius: 3rem 3rem 0 0;
  box-shadow: 0 -20px 50px rgba(0, 0, 0, 1);
  overflow: hidden;
}

/* === Marquee === */
.marquee {
  background: var(--acid);
  color: #000;
  overflow: hidden;
  padding: 0.75rem 0;
  border-top: 1px solid #000;
  border-bottom: 1px solid #000;
  user-select: none;
}
.marquee-track {
  display: flex;
  white-space: nowrap;
  width: max-content;
  animation: marquee-scroll 5s linear infinite;
}
.marquee-track span {
  margin: 0 0.5rem;
  font-size: 1.5rem;
  font-style: italic;
  font-weight: 900;
}
@keyframes marquee-scroll {
  from { transform: translateX(0); }
  to { transform: translateX(-50%); }
}

/* === Sections === */
.section { padding: 6rem 3rem; max-width: 80rem; margin: 0 auto; }
.section-header {
  margin-bottom: 4rem;
  padding-bottom: 2rem;
  border-bottom: 1px solid var(--stage-border);
  display: flex;
  justify-content: space-between;
  align-items: flex-end;
}
.section-title {
  font-size: 3.5rem;
  font-weight: 900;
  text-transform: uppercase;
  letter-spacing: -0.05em;
}
.section-sub { color: var(--text-secondary); margin-top: 0.5rem; }
.eyebrow {
  color: var(--acid);
  text-transform: uppercase;
  letter-spacing: 0.2em;
  font-size: 0.875rem;
  font-weight: 700;
}

/* === Music === */
.music-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; }
.video-frame {
  position: relative;
  aspect-ratio: 16 / 9;
  background: var(--stage-panel);
  border: 1px solid var(--stage-border);
  border-radius: 0.75rem;
  overflow: hidden;
}
.video-frame iframe {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  border: 0;
}
.track-list { display: flex; flex-direction: column; justify-content: center; gap: 1rem; }
.track-row {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1rem;
  background: rgba(17, 24, 39, 0.5);
  border: 1px solid var(--stage-border);
  border-radius: 0.5rem;
  transition: border-color 200ms ease, background 200ms ease;
}
.track-row:hover { border-color: var(--acid); background: var(--stage-panel); }
.track-row:hover .track-title { color: var(--acid-bright); }
.track-index { color: var(--text-muted); font-family: var(--font-mono); font-size: 0.875rem; }
.track-title { font-weight: 700; }
.track-platform { font-size: 0.75rem; color: var(--text-secondary); }
.track-length { font-size: 0.875rem; color: var(--text-muted); }
.listen-cta {
  margin-top: 1rem;
  padding: 1rem;
  text-align: center;
  border: 1px solid var(--acid);
  border-radius: 0.25rem;
  color: var(--acid);
  text-transform: uppercase;
  font-weight: 700;
  letter-spacing: 0.2em;
  transition: background 200ms ease, color 200ms ease;
}
.listen-cta:hover { background: var(--acid); color: #000; }

/* === Store === */
.store-band { background: rgba(17, 24, 39, 0.3); }
.product-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
.product-media {
  position: relative;
  aspect-ratio: 4 / 5;
  background: var(--stage-panel);
  border-radius: 1rem;
  overflow: hidden;
  margin-bottom: 1rem;
}
.product-media img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 500ms ease;
}
.product-card:hover .product-media img { transform: scale(1.05); }
.product-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  padding: 1.5rem;
  background: linear-gradient(to top, rgba(0,0,0,0.8), transparent);
  opacity: 0;
  transition: opacity 300ms ease;
}
.product-card:hover .product-overlay { opacity: 1; }
.add-to-cart {
  width: 100%;
  padding: 0.75rem 0;
  background: #fff;
  color: #000;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  transition: background 200ms ease;
}
.add-to-cart:hover { background: var(--acid); }
.product-meta { display: flex; justify-content: space-between; align-items: flex-start; }
.product-name { font-size: 1.125rem; font-weight: 700; text-transform: uppercase; }
.product-desc { color: var(--text-secondary); font-size: 0.875rem; margin-top: 0.25rem; }
.product-price { font-family: var(--font-mono); font-size: 1.125rem; color: var(--acid-bright); }

/* === Signup === */
.signup-band {
  position: relative;
  padding: 6rem 1.5rem;
  border-top: 1px solid var(--stage-border);
  background: var(--stage-black);
  overflow: hidden;
}
.signup-band::before {
  content: "";
  position: absolute;
  inset: 0;
  background: rgba(34, 197, 94, 0.05);
}
.signup-inner { position: relative; max-width: 36rem; margin: 0 auto; text-align: center; }
.signup-title {
  font-size: 3rem;
  font-weight: 900;
  text-transform: uppercase;
  letter-spacing: -0.05em;
  margin-bottom: 0.5rem;
}
.signup-row { display: flex; gap: 1rem; margin-top: 2rem; }
.signup-input {
  flex: 1;
  padding: 1rem;
  background: var(--stage-black);
  border: 1px solid var(--stage-border);
  color: var(--text-primary);
  font-family: var(--font-mono);
  text-transform: uppercase;
  letter-spacing: 0.2em;
}
.signup-input::placeholder { color: var(--text-muted); }
.signup-input:focus { outline: none; border-color: var(--acid); }
.join-button {
  padding: 1rem 2rem;
  background: var(--acid);
  color: #000;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.2em;
  transition: background 200ms ease;
}
.join-button:hover { background: var(--acid-bright); }
.signup-smallprint { font-size: 0.75rem; color: var(--text-muted); margin-top: 1rem; }

/* === Footer === */
.site-footer {
  padding: 3rem 0;
  border-top: 1px solid var(--stage-border);
  text-align: center;
}
.footer-wordmark {
  font-size: 1.875rem;
  font-weight: 900;
  text-transform: uppercase;
  letter-spacing: -0.05em;
  color: var(--stage-border);
}
.footer-links {
  display: flex;
  justify-content: center;
  gap: 1.5rem;
  margin-top: 1.5rem;
  color: var(--text-muted);
}
.footer-links a:hover { color: var(--text-primary); }
.footer-copyright { font-size: 0.75rem; color: var(--text-muted); margin-top: 2rem; }

/* === Overlay menu === */
.menu-overlay {
  position: fixed;
  inset: 0;
  z-index: 60;
  background: var(--stage-black);
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  gap: 2rem;
}
.menu-overlay .close-button { position: absolute; top: 1.5rem; right: 1.5rem; font-size: 2rem; }
.menu-overlay .close-button:hover { color: var(--acid); }
.menu-entry {
  font-size: 1.875rem;
  font-weight: 900;
  text-transform: uppercase;
  letter-spacing: -0.05em;
}
.menu-entry:hover { color: var(--acid); }

/* === Cart panel === */
.cart-scrim {
  position: fixed;
  inset: 0;
  z-index: 50;
  background: rgba(0, 0, 0, 0.6);
  backdrop-filter: blur(4px);
}
.cart-panel {
  position: fixed;
  top: 0;
  right: 0;
  height: 100%;
  width: 400px;
  z-index: 50;
  background: var(--stage-panel);
  border-left: 1px solid var(--stage-border);
  display: flex;
  flex-direction: column;
  animation: slide-in 200ms ease-out;
}
@keyframes slide-in {
  from { transform: translateX(100%); }
  to { transform: translateX(0); }
}
.cart-header {
  padding: 1.5rem;
  border-bottom: 1px solid var(--stage-border);
  display: flex;
  justify-content: space-between;
  align-items: center;
}
.cart-header h2 { font-size: 1.25rem; text-transform: uppercase; }
.cart-header button:hover { color: var(--danger); }
.cart-items { flex: 1; overflow-y: auto; padding: 1.5rem; display: flex; flex-direction: column; gap: 1.5rem; }
.cart-empty { text-align: center; color: var(--text-muted); margin-top: 2.5rem; }
.cart-empty button { margin-top: 1rem; color: var(--acid); text-decoration: underline; }
.cart-row {
  display: flex;
  gap: 1rem;
  align-items: center;
  padding: 0.75rem;
  background: rgba(0, 0, 0, 0.4);
  border-radius: 0.5rem;
}
.cart-row img { width: 4rem; height: 4rem; object-fit: cover; border-radius: 0.25rem; }
.cart-row-info { flex: 1; }
.cart-row-name { font-size: 0.875rem; font-weight: 700; }
.cart-row-price { font-family: var(--font-mono); font-size: 0.875rem; color: var(--acid-bright); }
.cart-row-remove { color: var(--text-muted); }
.cart-row-remove:hover { color: var(--danger); }
.cart-footer { padding: 1.5rem; border-top: 1px solid var(--stage-border); background: var(--stage-black); }
.cart-total { display: flex; justify-content: space-between; font-size: 1.125rem; font-weight: 700; margin-bottom: 1rem; }
.checkout-button {
  width: 100%;
  padding: 1rem 0;
  background: var(--acid);
  color: #000;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.2em;
  border-radius: 0.25rem;
  transition: background 200ms ease;
}
.checkout-button:hover { background: var(--acid-bright); }

/* === Notification toast === */
.notification-toast {
  position: fixed;
  bottom: 1.5rem;
  left: 1.5rem;
  z-index: 70;
  background: var(--acid);
  color: #000;
  padding: 0.75rem 1.5rem;
  border-radius: 9999px;
  font-weight: 700;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.6);
}

/* === Press kit === */
.epk-page {
  background: #fff;
  color: #000;
  min-height: 100vh;
}
.epk-page ::selection { background: #000; color: #fff; }
.epk-header {
  padding: 3rem;
  border-bottom: 1px solid #000;
  display: flex;
  justify-content: space-between;
  align-items: flex-end;
}
.epk-title {
  font-size: 6rem;
  font-weight: 900;
  text-transform: uppercase;
  letter-spacing: -0.05em;
  line-height: 1;
  margin-bottom: 1rem;
}
.epk-tag {
  display: inline-block;
  background: #000;
  color: #fff;
  padding: 0.25rem 0.75rem;
  font-family: var(--font-mono);
  text-transform: uppercase;
  font-size: 0.875rem;
}
.epk-contact { text-align: right; }
.epk-contact a:hover { text-decoration: underline; }
.epk-body { max-width: 80rem; margin: 0 auto; padding: 3rem 1.5rem; }
.epk-bio-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; margin-bottom: 6rem; }
.epk-photo { aspect-ratio: 3 / 4; background: #e5e7eb; }
.epk-photo img { width: 100%; height: 100%; object-fit: cover; filter: grayscale(1) contrast(1.25); }
.epk-bio { display: flex; flex-direction: column; justify-content: center; }
.epk-bio h2 { font-size: 2.25rem; text-transform: uppercase; margin-bottom: 1.5rem; }
.epk-bio p { font-size: 1.125rem; line-height: 1.7; margin-bottom: 1.5rem; }
.epk-pull-quote { color: #4b5563; font-weight: 700; }
.epk-actions { display: flex; gap: 1rem; }
.epk-button {
  padding: 0.75rem 1.5rem;
  border: 2px solid #000;
  font-weight: 700;
  text-transform: uppercase;
  transition: background 200ms ease, color 200ms ease;
}
.epk-button:hover { background: #000; color: #fff; }
.epk-button.filled { background: #000; color: #fff; }
.epk-button.filled:hover { background: #374151; }
.epk-stats {
  border-top: 2px solid #000;
  border-bottom: 2px solid #000;
  padding: 3rem 0;
  margin-bottom: 6rem;
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 2rem;
  text-align: center;
}
.epk-stat-value { font-size: 3rem; font-weight: 900; margin-bottom: 0.5rem; }
.epk-stat-label { font-family: var(--font-mono); text-transform: uppercase; font-size: 0.875rem; }
.epk-media-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; margin-bottom: 6rem; }
.epk-media-grid h3 {
  font-size: 1.5rem;
  text-transform: uppercase;
  border-bottom: 1px solid #000;
  padding-bottom: 0.5rem;
  margin-bottom: 1.5rem;
}
.epk-track-row {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1rem;
  border: 1px solid #e5e7eb;
  margin-bottom: 1rem;
  transition: border-color 200ms ease;
}
.epk-track-row:hover { border-color: #000; }
.epk-video { aspect-ratio: 16 / 9; background: #000; }
.epk-video iframe { width: 100%; height: 100%; border: 0; }
.epk-footer-links {
  display: flex;
  justify-content: center;
  gap: 2rem;
  font-size: 1.25rem;
}
.epk-footer-links a:hover { color: var(--acid); }

/* === Print === */
@media print {
  @page { margin: 0.5cm; }
  body {
    background: #fff !important;
    print-color-adjust: exact;
    -webkit-print-color-adjust: exact;
    cursor: auto;
  }
  button, .custom-cursor, .epk-actions, .epk-media-grid, .epk-footer-links {
    display: none !important;
  }
  .epk-pull-quote { color: #000; }
  .epk-bio-grid { gap: 1.5rem; margin-bottom: 3rem; }
  .epk-stats { padding: 1.5rem 0; margin-bottom: 3rem; }
}
"#;
