//! Global CSS styles for the storefront.
//!
//! Implements the utility classes emitted by `storefront-ui` (see
//! `storefront_ui::tokens`). Only the classes the components use are defined.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --background: #ffffff;
  --foreground: #0a0a0a;
  --muted: #f4f4f5;
  --muted-foreground: #71717a;
  --accent: #f4f4f5;
  --accent-foreground: #18181b;
  --border: #e4e4e7;
  --input: #e4e4e7;
  --ring: #a1a1aa;
  --radius: 0.625rem;

  --font-sans: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;

  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-2xl: 1.5rem;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
  border: 0 solid var(--border);
}

body {
  font-family: var(--font-sans);
  background: var(--background);
  color: var(--foreground);
  line-height: 1.5;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

img, svg {
  display: block;
}

/* === Layout === */
.container {
  width: 100%;
  max-width: 1280px;
  padding-left: 1rem;
  padding-right: 1rem;
}

.m-auto { margin: auto; }
.ml-6 { margin-left: 1.5rem; }
.block { display: block; }
.relative { position: relative; }

.flex { display: flex; }
.inline-flex { display: inline-flex; }
.flex-1 { flex: 1 1 0%; }
.shrink-0 { flex-shrink: 0; }
.items-center { align-items: center; }
.justify-center { justify-content: center; }
.justify-between { justify-content: space-between; }
.justify-end { justify-content: flex-end; }

.grid { display: grid; }
.grid-cols-1 { grid-template-columns: repeat(1, minmax(0, 1fr)); }
.grid-cols-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }

.gap-2 { gap: 0.5rem; }
.gap-4 { gap: 1rem; }
.gap-8 { gap: 2rem; }
.space-y-4 > * + * { margin-top: 1rem; }

.py-1 { padding-top: 0.25rem; padding-bottom: 0.25rem; }
.py-2 { padding-top: 0.5rem; padding-bottom: 0.5rem; }
.py-4 { padding-top: 1rem; padding-bottom: 1rem; }
.py-8 { padding-top: 2rem; padding-bottom: 2rem; }
.px-3 { padding-left: 0.75rem; padding-right: 0.75rem; }
.px-4 { padding-left: 1rem; padding-right: 1rem; }

.w-full { width: 100%; }
.min-w-0 { min-width: 0; }
.h-9 { height: 2.25rem; }
.size-9 { width: 2.25rem; height: 2.25rem; }
.aspect-square { aspect-ratio: 1 / 1; object-fit: cover; }

.list-none { list-style: none; }

/* === Borders === */
.border { border-width: 1px; }
.border-b { border-bottom-width: 1px; }
.border-solid { border-style: solid; }
.border-input { border-color: var(--input); }
.rounded-md { border-radius: calc(var(--radius) - 2px); }
.rounded-lg { border-radius: var(--radius); }

/* === Typography === */
.text-sm { font-size: var(--text-sm); }
.text-base { font-size: var(--text-base); }
.text-lg { font-size: var(--text-lg); }
.font-medium { font-weight: 500; }
.whitespace-nowrap { white-space: nowrap; }
.text-muted-foreground { color: var(--muted-foreground); }

.page-heading {
  font-size: var(--text-2xl);
  font-weight: 600;
  margin-bottom: 1.5rem;
}

.empty-state {
  color: var(--muted-foreground);
}

/* === Surfaces === */
.bg-background { background: var(--background); }
.bg-transparent { background: transparent; }
.bg-muted { background: var(--muted); }
.shadow-xs { box-shadow: 0 1px 2px 0 rgba(0, 0, 0, 0.05); }
.outline-none { outline: none; }
.transition-all { transition: all var(--transition-fast); }

.hover\:bg-accent:hover { background: var(--accent); }
.hover\:text-accent-foreground:hover { color: var(--accent-foreground); }
.focus-visible\:border-ring:focus-visible { border-color: var(--ring); }
.disabled\:opacity-50:disabled { opacity: 0.5; }
.placeholder\:text-muted-foreground::placeholder { color: var(--muted-foreground); }

/* === Product card === */
.group:hover .group-hover\:opacity-90 { opacity: 0.9; }

button {
  cursor: pointer;
  font: inherit;
  color: inherit;
}

button svg {
  width: 1rem;
  height: 1rem;
  pointer-events: none;
  flex-shrink: 0;
}

/* === Responsive === */
@media (min-width: 640px) {
  .sm\:grid-cols-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

@media (min-width: 768px) {
  .md\:w-\[280px\] { width: 280px; }
  .md\:text-sm { font-size: var(--text-sm); }
}

@media (min-width: 1024px) {
  .lg\:grid-cols-4 { grid-template-columns: repeat(4, minmax(0, 1fr)); }
}
"#;
