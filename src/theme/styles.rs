//! Global CSS styles for the portfolio gallery.
//!
//! Near-black surfaces, hairline borders, white as the only accent.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface-page: #050505;
  --surface-modal: #0a0a0a;
  --surface-card: #111111;
  --surface-raised: #1a1a1a;

  /* Borders */
  --border-subtle: #222222;
  --border: #333333;
  --border-hover: #444444;

  /* Text */
  --text-primary: #ffffff;
  --text-secondary: #999999;
  --text-muted: #888888;
  --text-faint: #666666;
  --text-ghost: #333333;

  /* Accents */
  --accent-stats: #60a5fa;
  --accent-bullet: rgba(59, 130, 246, 0.5);
  --accent-terminal: #22c55e;

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-fade: 300ms ease;
  --spring-hover: cubic-bezier(0.34, 1.56, 0.64, 1);
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
  background: var(--surface-page);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

.portfolio {
  max-width: 72rem;
  margin: 0 auto;
  padding: 3rem 1.5rem 8rem;
}

/* === Header === */
.site-header {
  display: flex;
  justify-content: space-between;
  align-items: flex-end;
  gap: 1rem;
  margin-bottom: 2.5rem;
}

.site-header__title {
  font-size: 2.25rem;
  font-weight: 700;
  letter-spacing: -0.02em;
}

.site-header__count {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--text-faint);
}

.site-header__actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.site-header__error {
  font-size: 0.75rem;
  color: #f87171;
  max-width: 24rem;
}

/* === Buttons === */
.btn-primary,
.btn-secondary {
  font-family: var(--font-sans);
  font-weight: 600;
  font-size: 0.95rem;
  padding: 0.75rem 1rem;
  border-radius: 0.5rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-primary {
  background: #ffffff;
  color: #000000;
  border: none;
}

.btn-primary:hover {
  background: #cccccc;
}

.btn-secondary {
  background: var(--surface-card);
  color: var(--text-primary);
  border: 1px solid var(--border);
}

.btn-secondary:hover {
  background: var(--border-subtle);
}

.btn-small {
  font-size: 0.8rem;
  padding: 0.4rem 0.8rem;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border: none;
  cursor: pointer;
}

.close-btn {
  background: rgba(0, 0, 0, 0.5);
  color: #ffffff;
  padding: 0.5rem;
  border-radius: 9999px;
  backdrop-filter: blur(12px);
  transition: background var(--transition-fast);
}

.close-btn:hover {
  background: rgba(0, 0, 0, 0.8);
}

/* === Tags === */
.tag-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.tag-pill {
  font-size: 0.75rem;
  color: var(--text-faint);
  border: 1px solid var(--border);
  padding: 0.25rem 0.5rem;
  border-radius: 9999px;
}

.tag-chip {
  font-size: 0.75rem;
  color: var(--text-muted);
  border: 1px solid var(--border);
  background: var(--surface-card);
  padding: 0.25rem 0.5rem;
  border-radius: 0.25rem;
}

/* === Grid === */
.project-gallery__empty {
  color: var(--text-faint);
}

.project-grid {
  width: 100%;
  display: grid;
  grid-template-columns: 1fr;
  grid-auto-rows: 300px;
  gap: 1.5rem;
}

@media (min-width: 768px) {
  .project-grid {
    grid-template-columns: repeat(3, 1fr);
  }

  .project-card--large {
    grid-column: span 2;
  }

  .project-card--medium,
  .project-card--small {
    grid-column: span 1;
  }
}

/* === Card === */
.project-card {
  position: relative;
  overflow: hidden;
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  padding: 2rem;
  background: var(--surface-card);
  border: 1px solid var(--border-subtle);
  border-radius: 0.75rem;
  cursor: pointer;
  transition: border-color var(--transition-fast), transform 300ms var(--spring-hover);
}

.project-card:hover {
  border-color: var(--border-hover);
  transform: scale(1.02);
}

.project-card__body,
.project-card .tag-list {
  position: relative;
  z-index: 1;
}

.project-card .tag-list {
  margin-top: 1rem;
}

.project-card__title {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.project-card__description {
  color: var(--text-muted);
}

/* Hover call to action */
.project-card__hover {
  position: absolute;
  inset: 0;
  z-index: 2;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.6);
  backdrop-filter: blur(2px);
  opacity: 0;
  transition: opacity var(--transition-fast);
}

.project-card:hover .project-card__hover {
  opacity: 1;
}

.project-card__cta {
  background: #ffffff;
  color: #000000;
  padding: 0.5rem 1rem;
  border-radius: 9999px;
  font-size: 0.875rem;
  font-weight: 500;
}

/* Academic layout */
.academic__heading {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  margin-bottom: 1rem;
}

.academic__title {
  font-size: 1.25rem;
  font-weight: 600;
}

.academic__institution {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.academic__badge {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: rgba(255, 255, 255, 0.5);
  border: 1px solid rgba(255, 255, 255, 0.1);
  padding: 0.25rem 0.5rem;
  border-radius: 0.25rem;
}

.academic__specialization {
  color: var(--text-faint);
  text-transform: uppercase;
  font-size: 0.75rem;
  letter-spacing: 0.05em;
  font-weight: 600;
  margin-bottom: 1.5rem;
}

.academic__focus {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-size: 0.875rem;
  color: var(--text-muted);
}

.academic__focus-icon {
  font-size: 1.125rem;
}

.academic__focus-value {
  color: var(--text-primary);
}

.project-card__watermark {
  position: absolute;
  right: -1rem;
  bottom: -1rem;
  font-size: 8rem;
  font-weight: 700;
  color: var(--border-subtle);
  opacity: 0.2;
  user-select: none;
  pointer-events: none;
}

/* === Detail Layer === */
.detail-layer {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 0 1rem;
}

.detail-layer--leaving {
  pointer-events: none;
}

.detail-backdrop {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.8);
  backdrop-filter: blur(4px);
  animation: fade-in var(--transition-fade);
  transition: opacity var(--transition-fade);
}

.detail-layer--leaving .detail-backdrop {
  opacity: 0;
}

.detail-card {
  position: relative;
  z-index: 1;
  width: 100%;
  max-width: 42rem;
  max-height: 90vh;
  display: flex;
  flex-direction: column;
  overflow: hidden;
  background: var(--surface-modal);
  border: 1px solid var(--border);
  border-radius: 1rem;
  will-change: transform;
}

/* Media header */
.media-header {
  position: relative;
  flex-shrink: 0;
  height: 16rem;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--surface-card);
  border-bottom: 1px solid var(--border-subtle);
}

.media-header__grid {
  position: absolute;
  inset: 0;
  opacity: 0.1;
  background-image:
    linear-gradient(var(--border) 1px, transparent 1px),
    linear-gradient(90deg, var(--border) 1px, transparent 1px);
  background-size: 24px 24px;
}

.media-header__close {
  position: absolute;
  top: 1rem;
  right: 1rem;
}

.media-label {
  position: relative;
  color: var(--text-ghost);
  font-size: 2.25rem;
  font-weight: 700;
  text-align: center;
}

.media-terminal {
  position: relative;
  width: 100%;
  height: 100%;
  padding: 2rem;
  overflow: hidden;
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--accent-terminal);
  opacity: 0.7;
}

.media-terminal__cursor {
  animation: blink 1s steps(1) infinite;
}

/* Body */
.detail-body {
  padding: 2rem;
  overflow-y: auto;
}

.detail-heading {
  display: flex;
  justify-content: space-between;
  align-items: baseline;
  gap: 1rem;
  margin-bottom: 0.5rem;
}

.detail-title {
  font-size: 1.875rem;
  font-weight: 700;
}

.detail-stats {
  font-family: var(--font-mono);
  font-size: 0.875rem;
  color: var(--accent-stats);
  white-space: nowrap;
}

.detail-description {
  color: var(--text-secondary);
  line-height: 1.75;
  margin-bottom: 2rem;
}

.detail-description p + p {
  margin-top: 0.75rem;
}

.detail-columns {
  display: grid;
  grid-template-columns: 1fr;
  gap: 2rem;
  margin-bottom: 2rem;
}

@media (min-width: 768px) {
  .detail-columns {
    grid-template-columns: 1fr 1fr;
  }
}

.detail-column__title {
  font-size: 0.875rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  margin-bottom: 0.75rem;
}

.detail-features {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.detail-feature {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 0.875rem;
  color: var(--text-faint);
}

.detail-feature__bullet {
  width: 6px;
  height: 6px;
  border-radius: 9999px;
  background: var(--accent-bullet);
  flex-shrink: 0;
}

.detail-actions {
  display: flex;
  gap: 1rem;
  border-top: 1px solid var(--border-subtle);
  padding-top: 1.5rem;
}

.detail-action {
  flex: 1;
}

/* === Animations === */
@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes blink {
  0%, 100% { opacity: 1; }
  50% { opacity: 0; }
}

@media (prefers-reduced-motion: reduce) {
  .detail-card {
    transition: none !important;
  }

  .media-terminal__cursor {
    animation: none;
  }
}
"#;
