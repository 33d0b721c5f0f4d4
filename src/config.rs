//! Site configuration: element ids, selectors, timings, and content data.
//!
//! Every field has a default matching the shipped landing page, so a page
//! only needs a `#site-config` JSON script when it wants to override
//! something. Missing fields keep their defaults; `code_samples` entries are
//! merged over the default samples one language at a time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use crate::consts::CONFIG_SCRIPT_ID;
use crate::consts::THEME_STORAGE_KEY;
use crate::error::SiteError;
use crate::tabs::CodeSamples;
use crate::typewriter::Timing;

/// Top-level configuration handed to every component at install time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    /// Property name of the public API object attached to `window`.
    pub namespace: String,
    pub theme: ThemeConfig,
    pub markup: Markup,
    pub code_samples: CodeSamples,
    pub typewriter: TypewriterConfig,
    pub scroll: ScrollConfig,
    pub effects: EffectsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            namespace: "shenwenAI".into(),
            theme: ThemeConfig::default(),
            markup: Markup::default(),
            code_samples: CodeSamples::default(),
            typewriter: TypewriterConfig::default(),
            scroll: ScrollConfig::default(),
            effects: EffectsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override document. Absent fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The configured log level, falling back to `Info` for unknown names.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    /// How long the body color transition stays applied after a toggle.
    pub transition_ms: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { storage_key: THEME_STORAGE_KEY.into(), transition_ms: 300 }
    }
}

/// Ids and selectors of the markup the components attach to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markup {
    pub theme_toggle_id: String,
    pub menu_toggle_id: String,
    pub nav_links_id: String,
    pub nav_link_selector: String,
    pub demo_tab_selector: String,
    pub lang_attribute: String,
    pub demo_code_id: String,
    pub copy_button_selector: String,
    pub anchor_selector: String,
    pub header_id: String,
    pub faq_item_selector: String,
    pub faq_question_selector: String,
    pub card_selector: String,
    pub hero_selector: String,
    pub score_selector: String,
    pub typewriter_id: String,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            theme_toggle_id: "themeToggle".into(),
            menu_toggle_id: "mobileMenuToggle".into(),
            nav_links_id: "navLinks".into(),
            nav_link_selector: "a".into(),
            demo_tab_selector: ".demo-tab".into(),
            lang_attribute: "data-lang".into(),
            demo_code_id: "demoCode".into(),
            copy_button_selector: ".copy-btn".into(),
            anchor_selector: r##"a[href^="#"]"##.into(),
            header_id: "header".into(),
            faq_item_selector: ".faq-item".into(),
            faq_question_selector: ".faq-question".into(),
            card_selector: ".feature-card, .model-card, .pricing-card".into(),
            hero_selector: ".hero".into(),
            score_selector: ".score".into(),
            typewriter_id: "typewriter-text".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    pub type_ms: u32,
    pub delete_ms: u32,
    pub pause_ms: u32,
    /// Delay between `window.load` and the first typed character.
    pub start_delay_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: ["人工智能助手", "代码生成工具", "多模态AI", "智能对话系统", "代码助手"]
                .into_iter()
                .map(String::from)
                .collect(),
            type_ms: 100,
            delete_ms: 50,
            pause_ms: 2000,
            start_delay_ms: 500,
        }
    }
}

impl TypewriterConfig {
    #[must_use]
    pub fn timing(&self) -> Timing {
        Timing {
            type_delay: Duration::from_millis(u64::from(self.type_ms)),
            delete_delay: Duration::from_millis(u64::from(self.delete_ms)),
            pause: Duration::from_millis(u64::from(self.pause_ms)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Space left above an anchor target for the fixed header.
    pub header_offset: f64,
    /// Scroll offset past which the header gets its shadow.
    pub shadow_threshold: f64,
    pub parallax_rate: f64,
    pub parallax_throttle_ms: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { header_offset: 80.0, shadow_threshold: 10.0, parallax_rate: 0.5, parallax_throttle_ms: 10.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// How long the copy button shows its checkmark.
    pub copy_feedback_ms: u32,
    /// Transform applied to a hovered card.
    pub card_lift: String,
    /// Fraction of a score element that must be visible before it animates.
    pub score_threshold: f64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self { copy_feedback_ms: 2000, card_lift: "translateY(-4px)".into(), score_threshold: 0.5 }
    }
}

/// Read the page's optional `#site-config` JSON script.
///
/// Absent script means defaults; a malformed one is an error the caller logs
/// once the logger is up.
#[cfg(feature = "hydrate")]
pub fn load_from_document(document: &web_sys::Document) -> Result<SiteConfig, SiteError> {
    match document.get_element_by_id(CONFIG_SCRIPT_ID) {
        Some(script) => SiteConfig::from_json(&script.text_content().unwrap_or_default()),
        None => Ok(SiteConfig::default()),
    }
}
