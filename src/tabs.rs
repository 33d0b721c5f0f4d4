//! Tabbed code samples: one active tab per group, and a fixed map from
//! language key to the sample shown in the output panel.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SiteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Python,
    Curl,
    Js,
}

impl FromStr for Lang {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "python" => Ok(Self::Python),
            "curl" => Ok(Self::Curl),
            "js" => Ok(Self::Js),
            other => Err(SiteError::UnknownLang(other.to_owned())),
        }
    }
}

/// Immutable language → sample text map.
///
/// Deserializing merges the given entries over the default samples, so an
/// override for one language keeps the others.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CodeSamples(BTreeMap<Lang, String>);

impl<'de> Deserialize<'de> for CodeSamples {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let overrides = BTreeMap::<Lang, String>::deserialize(deserializer)?;
        let mut samples = Self::default();
        samples.0.extend(overrides);
        Ok(samples)
    }
}

impl CodeSamples {
    #[must_use]
    pub fn new(samples: BTreeMap<Lang, String>) -> Self {
        Self(samples)
    }

    #[must_use]
    pub fn lang(&self, lang: Lang) -> Option<&str> {
        self.0.get(&lang).map(String::as_str)
    }

    /// Sample for a raw `data-lang` key; `None` for unknown or unmapped keys.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        match key.parse::<Lang>() {
            Ok(lang) => self.lang(lang),
            Err(_) => None,
        }
    }
}

impl Default for CodeSamples {
    fn default() -> Self {
        Self(BTreeMap::from([
            (Lang::Python, PYTHON_SAMPLE.to_owned()),
            (Lang::Curl, CURL_SAMPLE.to_owned()),
            (Lang::Js, JS_SAMPLE.to_owned()),
        ]))
    }
}

/// Active-tab bookkeeping for one sibling group of tabs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabGroup {
    keys: Vec<String>,
    active: Option<usize>,
}

impl TabGroup {
    #[must_use]
    pub fn new(keys: Vec<String>, active: Option<usize>) -> Self {
        let active = active.filter(|&i| i < keys.len());
        Self { keys, active }
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Make `index` the only active tab and return its language key.
    /// Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        let key = self.keys.get(index)?;
        self.active = Some(index);
        Some(key.as_str())
    }
}

const PYTHON_SAMPLE: &str = r"import OpenAI from '@openai/openai';

const client = new OpenAI({
  apiKey: 'sk-...',
  baseURL: 'https://api.shenwenai.com/v1'
});

const completion = await client.chat.completions.create({
  model: 'shenwen-chat',
  messages: [
    { role: 'user', content: '你好，请介绍一下你自己' }
  ]
});

console.log(completion.choices[0].message);";

const CURL_SAMPLE: &str = r#"curl https://api.shenwenai.com/v1/chat/completions \
  -H "Content-Type: application/json" \
  -H "Authorization: Bearer sk-..." \
  -d '{
    "model": "shenwen-chat",
    "messages": [
      {
        "role": "user",
        "content": "你好，请介绍一下你自己"
      }
    ]
  }'"#;

const JS_SAMPLE: &str = r"const response = await fetch('https://api.shenwenai.com/v1/chat/completions', {
  method: 'POST',
  headers: {
    'Content-Type': 'application/json',
    'Authorization': 'Bearer sk-...'
  },
  body: JSON.stringify({
    model: 'shenwen-chat',
    messages: [
      {
        role: 'user',
        content: '你好，请介绍一下你自己'
      }
    ]
  })
});

const data = await response.json();
console.log(data.choices[0].message);";

#[cfg(feature = "hydrate")]
pub use binding::install;

#[cfg(feature = "hydrate")]
mod binding {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::Element;

    use super::{CodeSamples, TabGroup};
    use crate::config::SiteConfig;
    use crate::consts::ACTIVE_CLASS;
    use crate::dom;
    use crate::error::SiteError;

    struct Switcher {
        group: TabGroup,
        tabs: Vec<Element>,
        output: Element,
        samples: CodeSamples,
    }

    impl Switcher {
        fn select(&mut self, index: usize) -> Result<(), SiteError> {
            let Some(key) = self.group.select(index) else {
                return Ok(());
            };
            match self.samples.get(key) {
                Some(sample) => self.output.set_text_content(Some(sample)),
                None => log::debug!("no code sample for tab key {key:?}"),
            }
            for (i, tab) in self.tabs.iter().enumerate() {
                dom::set_class(tab, ACTIVE_CLASS, self.group.is_active(i))?;
            }
            Ok(())
        }
    }

    pub fn install(config: &SiteConfig) -> Result<(), SiteError> {
        let document = dom::document()?;
        let markup = &config.markup;
        let tabs = dom::query_all(&document, &markup.demo_tab_selector)?;
        let Some(output) = document.get_element_by_id(&markup.demo_code_id) else {
            log::debug!("demo output missing; tabs disabled");
            return Ok(());
        };
        if tabs.is_empty() {
            log::debug!("no demo tabs found");
            return Ok(());
        }

        let keys = tabs
            .iter()
            .map(|tab| tab.get_attribute(&markup.lang_attribute).unwrap_or_default())
            .collect();
        let active = tabs.iter().position(|tab| tab.class_list().contains(ACTIVE_CLASS));
        let switcher = Rc::new(RefCell::new(Switcher {
            group: TabGroup::new(keys, active),
            tabs: tabs.clone(),
            output,
            samples: config.code_samples.clone(),
        }));

        for (index, tab) in tabs.iter().enumerate() {
            let switcher = Rc::clone(&switcher);
            dom::listen(tab, "click", move |_| {
                dom::report("tabs", switcher.borrow_mut().select(index));
            })?;
        }
        Ok(())
    }
}
