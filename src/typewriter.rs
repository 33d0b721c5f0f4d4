//! Typewriter animation for the hero headline.
//!
//! [`Typewriter`] is a pure state machine; each [`Typewriter::step`] yields
//! the text to display and how long to wait before the next step. The
//! browser binding drives it from a local future and never stops.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use std::time::Duration;

use crate::error::SiteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    /// Hold time once a phrase is fully typed.
    pub pause: Duration,
}

/// Output of one animation step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay: Duration,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    timing: Timing,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(phrases: &[String], timing: Timing) -> Result<Self, SiteError> {
        if phrases.is_empty() {
            return Err(SiteError::EmptyPhrases);
        }
        Ok(Self {
            phrases: phrases.iter().map(|p| p.chars().collect()).collect(),
            timing,
            phrase_index: 0,
            char_index: 0,
            deleting: false,
        })
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn step(&mut self) -> Frame {
        let phrase = &self.phrases[self.phrase_index];
        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            let text = phrase[..self.char_index].iter().collect();
            if self.char_index == 0 {
                self.deleting = false;
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                return Frame { text, delay: self.timing.type_delay };
            }
            Frame { text, delay: self.timing.delete_delay }
        } else {
            self.char_index = (self.char_index + 1).min(phrase.len());
            let text = phrase[..self.char_index].iter().collect();
            if self.char_index == phrase.len() {
                self.deleting = true;
                return Frame { text, delay: self.timing.pause };
            }
            Frame { text, delay: self.timing.type_delay }
        }
    }
}

impl Iterator for Typewriter {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        Some(self.step())
    }
}

#[cfg(feature = "hydrate")]
pub use binding::start;

#[cfg(feature = "hydrate")]
mod binding {
    use std::time::Duration;

    use gloo_timers::future::sleep;

    use super::Typewriter;
    use crate::config::SiteConfig;
    use crate::dom;
    use crate::error::SiteError;

    /// Start the endless animation after the configured delay.
    pub fn start(config: &SiteConfig) -> Result<(), SiteError> {
        let document = dom::document()?;
        let Some(output) = document.get_element_by_id(&config.markup.typewriter_id) else {
            log::debug!("typewriter output missing; animation disabled");
            return Ok(());
        };
        let writer = Typewriter::new(&config.typewriter.phrases, config.typewriter.timing())?;
        let start_delay = Duration::from_millis(u64::from(config.typewriter.start_delay_ms));

        wasm_bindgen_futures::spawn_local(async move {
            sleep(start_delay).await;
            for frame in writer {
                output.set_text_content(Some(&frame.text));
                sleep(frame.delay).await;
            }
        });
        Ok(())
    }
}
