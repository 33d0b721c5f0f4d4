//! Shared constants for the site behaviors.

// ── Config ──────────────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_SCRIPT_ID: &str = "site-config";

// ── Theme ───────────────────────────────────────────────────────

/// Default local-storage key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Media query reporting the system dark-mode preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Body transition applied while the theme flips.
pub const THEME_TRANSITION: &str = "background-color 0.3s ease, color 0.3s ease";

// ── Classes ─────────────────────────────────────────────────────

/// Class marking an open menu, the active tab, or an open FAQ item.
pub const ACTIVE_CLASS: &str = "active";

/// Class added to the body once the page has fully loaded.
pub const LOADED_CLASS: &str = "loaded";

/// Class added to a score element once it scrolls into view.
pub const ANIMATE_CLASS: &str = "animate";

// ── Scroll ──────────────────────────────────────────────────────

/// Header drop shadow shown once the page is scrolled.
pub const HEADER_SHADOW: &str = "0 4px 6px -1px rgb(0 0 0 / 0.1)";

/// Header box-shadow when the page sits at the top.
pub const NO_SHADOW: &str = "none";

// ── Copy feedback ───────────────────────────────────────────────

/// Checkmark icon swapped into the copy button after a successful copy.
pub const CHECKMARK_SVG: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><polyline points="20 6 9 17 4 12"/></svg>"#;

/// Button color while the checkmark is shown.
pub const SUCCESS_COLOR: &str = "var(--accent-success)";

// ── Page effects ────────────────────────────────────────────────

/// Body transition used for the page-load fade in.
pub const PAGE_FADE_TRANSITION: &str = "opacity 0.3s ease";
