//! Interactive behavior for the landing page, compiled to WebAssembly.
//!
//! The page ships its own markup and styles; this crate attaches behavior to
//! it once loaded. Every component is split into a browser-free core (plain
//! state types, unit tested natively) and a `hydrate`-only binding that
//! wires `web-sys` events to that core. A component whose markup is missing
//! simply stays disabled.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark preference, persistence, system preference |
//! | [`menu`] | Mobile navigation open/closed state |
//! | [`tabs`] | Code sample tabs and the language → sample map |
//! | [`clipboard`] | Copy button and its success feedback |
//! | [`scroll`] | Smooth anchor scrolling and the header shadow |
//! | [`accordion`] | FAQ items, one open at a time |
//! | [`typewriter`] | Hero headline typewriter animation |
//! | [`effects`] | Load fade in, card hover, parallax, score reveal |
//! | [`timing`] | Throttling for scroll-driven effects |
//! | [`lifecycle`] | Ready/load phases and the WASM entry point |
//! | [`config`] | Ids, selectors, timings, and content data |
//! | [`error`] | [`error::SiteError`] |
//! | [`consts`] | Shared class names and style values |

pub mod accordion;
pub mod clipboard;
pub mod config;
pub mod consts;
pub mod effects;
pub mod error;
pub mod lifecycle;
pub mod menu;
pub mod scroll;
pub mod tabs;
pub mod theme;
pub mod timing;
pub mod typewriter;

#[cfg(feature = "hydrate")]
mod api;
#[cfg(feature = "hydrate")]
mod dom;
