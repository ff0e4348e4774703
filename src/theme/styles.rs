//! Global CSS styles for Signature Studio.
//!
//! Dark slate backdrop with translucent panels; the signature card itself
//! stays on a white surface so the preview matches the exported PNG.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backdrop */
  --slate-deep: #020617;
  --slate-night: #0f172a;
  --panel-border: rgba(255, 255, 255, 0.1);
  --panel-bg: rgba(255, 255, 255, 0.05);

  /* Text */
  --text-primary: #f8fafc;
  --text-secondary: rgba(226, 232, 240, 0.9);
  --text-muted: rgba(203, 213, 225, 0.7);

  /* Accent chrome (page UI, not the signature themes) */
  --teal: #2dd4bf;
  --teal-soft: rgba(45, 212, 191, 0.35);

  /* Typography */
  --font-sans: 'Segoe UI', Arial, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: linear-gradient(135deg, var(--slate-deep), var(--slate-night), var(--slate-deep));
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Layout === */
.studio {
  max-width: 1100px;
  margin: 0 auto;
  padding: 3rem 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 2.5rem;
}

.studio-header {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  border: 1px solid var(--panel-border);
  background: var(--panel-bg);
  border-radius: 1.5rem;
  padding: 2.5rem;
}

.studio-kicker {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.35em;
  color: var(--text-muted);
}

.studio-title {
  font-size: 2.5rem;
  font-weight: 600;
  letter-spacing: -0.02em;
}

.studio-title-name {
  color: var(--teal);
}

.studio-lede {
  max-width: 42rem;
  color: var(--text-secondary);
}

.studio-grid {
  display: grid;
  grid-template-columns: minmax(0, 1.2fr) minmax(0, 1fr);
  gap: 2rem;
}

/* === Accent picker === */
.accent-picker {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
}

.accent-btn {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  border: 1px solid var(--panel-border);
  border-radius: 9999px;
  background: transparent;
  color: var(--text-muted);
  font-size: 0.875rem;
  padding: 0.5rem 1rem;
  cursor: pointer;
  transition: border-color var(--transition-fast), color var(--transition-fast);
}

.accent-btn:hover {
  border-color: rgba(255, 255, 255, 0.3);
  color: var(--text-primary);
}

.accent-btn--selected {
  border-color: var(--teal-soft);
  background: rgba(255, 255, 255, 0.1);
  color: var(--teal);
}

.accent-swatch {
  display: inline-block;
  height: 0.5rem;
  width: 2rem;
  border-radius: 9999px;
}

/* === Preview pane === */
.preview-pane {
  border: 1px solid var(--panel-border);
  background: rgba(2, 6, 23, 0.6);
  border-radius: 1.5rem;
  padding: 2rem;
  display: flex;
  align-items: flex-start;
  justify-content: center;
}

.preview-card {
  max-width: 100%;
}

.preview-card svg {
  max-width: 100%;
  height: auto;
  border-radius: 1rem;
  box-shadow: 0 25px 60px -30px rgba(45, 212, 191, 0.5);
}

/* === Export panel === */
.export-panel {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  border: 1px solid var(--panel-border);
  background: var(--panel-bg);
  border-radius: 1.5rem;
  padding: 2rem;
}

.export-header {
  font-size: 1.5rem;
  font-weight: 600;
}

.export-hint {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.export-actions {
  display: grid;
  gap: 0.75rem;
}

.btn-primary {
  border: none;
  border-radius: 9999px;
  background: rgba(45, 212, 191, 0.9);
  color: var(--slate-deep);
  font-size: 0.875rem;
  font-weight: 500;
  padding: 0.6rem 1rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-primary:hover {
  background: var(--teal);
}

.btn-primary:disabled {
  cursor: wait;
  opacity: 0.7;
}

.btn-ghost {
  border: 1px solid rgba(255, 255, 255, 0.2);
  border-radius: 9999px;
  background: transparent;
  color: var(--text-secondary);
  font-size: 0.875rem;
  font-weight: 500;
  padding: 0.6rem 1rem;
  cursor: pointer;
  transition: border-color var(--transition-fast), color var(--transition-fast);
}

.btn-ghost:hover {
  border-color: rgba(255, 255, 255, 0.4);
  color: var(--text-primary);
}

/* === HTML snippet block === */
.snippet-block {
  border: 1px solid var(--panel-border);
  background: rgba(15, 23, 42, 0.6);
  border-radius: 1rem;
  padding: 1rem;
  font-size: 0.75rem;
  color: var(--text-secondary);
}

.snippet-label {
  font-weight: 600;
  color: var(--text-primary);
}

.snippet-body {
  margin-top: 0.5rem;
  max-height: 11rem;
  overflow: auto;
  white-space: pre-wrap;
  word-break: break-all;
  font-family: var(--font-mono);
  font-size: 0.7rem;
  line-height: 1.6;
}

/* === Tip box === */
.tip-box {
  border: 1px solid rgba(110, 231, 183, 0.4);
  background: rgba(52, 211, 153, 0.1);
  border-radius: 1rem;
  padding: 1rem;
  font-size: 0.75rem;
  color: #d1fae5;
}

.tip-label {
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.2em;
  color: #a7f3d0;
}

.tip-body {
  margin-top: 0.25rem;
}

/* === Status line === */
.status-pill {
  border: 1px solid rgba(255, 255, 255, 0.2);
  background: rgba(255, 255, 255, 0.1);
  border-radius: 9999px;
  padding: 0.5rem 1rem;
  text-align: center;
  font-size: 0.75rem;
  color: var(--text-secondary);
}

@media (max-width: 900px) {
  .studio-grid {
    grid-template-columns: minmax(0, 1fr);
  }
}
"#;
