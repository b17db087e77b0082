use crate::channel::InputChannel;
use crate::error::Error;
use crate::Result;

use super::types::Answer;
use super::{run, Parsed, PromptLogic};

/// Unconstrained text entry, one line or many.
pub struct FreeformPrompt {
    question: String,
    defaults: Vec<String>,
    multi: bool,
    confirm: bool,
}

impl FreeformPrompt {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            defaults: Vec::new(),
            multi: false,
            confirm: false,
        }
    }

    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.defaults = vec![value.into()];
        self
    }

    /// Default line sequence for multi-line mode.
    pub fn defaults<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.defaults = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    pub fn confirm(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }

    /// Returns `Answer::One` in single mode, `Answer::Many` (the
    /// non-empty lines entered, in order) in multi mode.
    pub fn ask(&self, channel: &mut dyn InputChannel) -> Result<Answer> {
        run(self, channel)
    }
}

impl PromptLogic for FreeformPrompt {
    fn render_prompt(&self, reason: Option<&str>) -> String {
        let mut out = String::new();
        if let Some(why) = reason {
            out.push_str(why);
            out.push('\n');
        }
        if self.multi {
            out.push_str(&format!(
                "{} (one per line; an empty line ends input):\n",
                self.question
            ));
        } else {
            let hint = match self.defaults.first() {
                Some(default) => format!(" (default: {default})"),
                None => String::new(),
            };
            out.push_str(&format!("{}{}: ", self.question, hint));
        }
        out
    }

    fn default_answer(&self) -> Option<Answer> {
        if self.defaults.is_empty() {
            return None;
        }
        if self.multi {
            Some(Answer::Many(self.defaults.clone()))
        } else {
            Some(Answer::One(self.defaults.first()?.clone()))
        }
    }

    fn parse_input(&self, raw: &str, channel: &mut dyn InputChannel) -> Result<Parsed> {
        if !self.multi {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(Parsed::Retry("a value is required".to_string()));
            }
            return Ok(Parsed::Answer(Answer::One(trimmed.to_string())));
        }

        // Collect lines here rather than through the outer retry loop;
        // the first empty line ends entry.
        let mut lines: Vec<String> = Vec::new();
        let mut current = raw.trim().to_string();
        loop {
            if current.is_empty() {
                break;
            }
            lines.push(current);
            current = match channel.read_line()? {
                Some(line) => line.trim().to_string(),
                None => return Err(Error::ChannelClosed),
            };
        }
        if lines.is_empty() {
            return Ok(Parsed::Retry("enter at least one line".to_string()));
        }
        Ok(Parsed::Answer(Answer::Many(lines)))
    }

    fn wants_confirm(&self) -> bool {
        self.confirm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::ScriptedChannel;

    #[test]
    fn single_line_is_trimmed() {
        let prompt = FreeformPrompt::new("Name?");
        let mut channel = ScriptedChannel::new(["  Ada Lovelace  "]);
        assert_eq!(
            prompt.ask(&mut channel).unwrap(),
            Answer::One("Ada Lovelace".to_string())
        );
    }

    #[test]
    fn empty_line_without_default_reprompts() {
        let prompt = FreeformPrompt::new("Name?");
        let mut channel = ScriptedChannel::new(["", "Ada"]);
        assert_eq!(
            prompt.ask(&mut channel).unwrap(),
            Answer::One("Ada".to_string())
        );
        assert!(channel.transcript().contains("a value is required"));
    }

    #[test]
    fn empty_line_with_default_returns_default() {
        let prompt = FreeformPrompt::new("Name?").default("anonymous");
        let mut channel = ScriptedChannel::new([""]);
        assert_eq!(
            prompt.ask(&mut channel).unwrap(),
            Answer::One("anonymous".to_string())
        );
        assert!(channel.transcript().contains("(default: anonymous)"));
    }

    #[test]
    fn multi_collects_until_empty_line() {
        let prompt = FreeformPrompt::new("Guests?").multi(true);
        let mut channel = ScriptedChannel::new(["Ada", "Grace", ""]);
        assert_eq!(
            prompt.ask(&mut channel).unwrap(),
            Answer::Many(vec!["Ada".to_string(), "Grace".to_string()])
        );
    }

    #[test]
    fn multi_keeps_duplicate_lines() {
        let prompt = FreeformPrompt::new("Guests?").multi(true);
        let mut channel = ScriptedChannel::new(["Ada", "Ada", ""]);
        assert_eq!(
            prompt.ask(&mut channel).unwrap(),
            Answer::Many(vec!["Ada".to_string(), "Ada".to_string()])
        );
    }

    #[test]
    fn multi_empty_first_line_with_defaults_returns_them() {
        let prompt = FreeformPrompt::new("Guests?")
            .multi(true)
            .defaults(["Ada", "Grace"]);
        let mut channel = ScriptedChannel::new([""]);
        assert_eq!(
            prompt.ask(&mut channel).unwrap(),
            Answer::Many(vec!["Ada".to_string(), "Grace".to_string()])
        );
    }

    #[test]
    fn multi_empty_first_line_without_defaults_reprompts() {
        let prompt = FreeformPrompt::new("Guests?").multi(true);
        let mut channel = ScriptedChannel::new(["", "Ada", ""]);
        assert_eq!(
            prompt.ask(&mut channel).unwrap(),
            Answer::Many(vec!["Ada".to_string()])
        );
        assert!(channel.transcript().contains("enter at least one line"));
    }

    #[test]
    fn multi_eof_during_collection_propagates() {
        let prompt = FreeformPrompt::new("Guests?").multi(true);
        let mut channel = ScriptedChannel::new(["Ada"]);
        let err = prompt.ask(&mut channel).unwrap_err();
        assert_eq!(err.code(), "CHANNEL_CLOSED");
    }
}
