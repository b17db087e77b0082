use crate::channel::InputChannel;
use crate::error::Error;
use crate::options::OptionSet;
use crate::Result;

use super::option::OptionPrompt;
use super::types::{Answer, DisplayMode};

/// Binary confirmation built on [`OptionPrompt`]: a two-entry inline
/// option set (`yes`, `no`), no custom entry, no multi-select. The
/// `y`/`n` abbreviations ride on the option values, so no extra parsing
/// rules exist here.
pub struct YesNoPrompt {
    question: String,
    default: Option<YesNoDefault>,
    confirm: bool,
}

enum YesNoDefault {
    Flag(bool),
    Text(String),
}

impl YesNoPrompt {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            default: None,
            confirm: false,
        }
    }

    pub fn default(mut self, value: bool) -> Self {
        self.default = Some(YesNoDefault::Flag(value));
        self
    }

    /// Legacy-style text default: `yes`/`y`/`true` or `no`/`n`/`false`,
    /// case-insensitive. Anything else is a configuration error at
    /// `ask()` time.
    pub fn default_text(mut self, value: impl Into<String>) -> Self {
        self.default = Some(YesNoDefault::Text(value.into()));
        self
    }

    pub fn confirm(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }

    pub fn ask(&self, channel: &mut dyn InputChannel) -> Result<bool> {
        let mut inner = OptionPrompt::new(
            self.question.clone(),
            OptionSet::from_pairs([("yes", "y"), ("no", "n")])?,
        )
        .display(DisplayMode::Inline)
        .confirm(self.confirm);

        if let Some(default) = self.resolved_default()? {
            inner = inner.default(if default { "y" } else { "n" });
        }

        match inner.ask(channel)? {
            Answer::One(value) => Ok(value == "y"),
            other => Err(Error::Config(format!(
                "yes/no prompt produced a non-single answer: {other:?}"
            ))),
        }
    }

    fn resolved_default(&self) -> Result<Option<bool>> {
        match &self.default {
            None => Ok(None),
            Some(YesNoDefault::Flag(value)) => Ok(Some(*value)),
            Some(YesNoDefault::Text(text)) => {
                match text.trim().to_ascii_lowercase().as_str() {
                    "yes" | "y" | "true" => Ok(Some(true)),
                    "no" | "n" | "false" => Ok(Some(false)),
                    other => Err(Error::Config(format!(
                        "unrecognized yes/no default: {other:?}"
                    ))),
                }
            }
        }
    }
}
