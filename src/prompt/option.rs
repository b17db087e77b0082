use crate::channel::InputChannel;
use crate::error::Error;
use crate::options::{Opt, OptionSet};
use crate::Result;

use super::types::{Answer, DisplayMode};
use super::{run, Parsed, PromptLogic};

/// Single- or multi-choice selection from a fixed option set.
///
/// Input is matched per token by 1-based index (inline display), label
/// (case-insensitive), menu letter (menu display), then exact value.
/// Unknown tokens reject the whole line unless custom entry is allowed,
/// in which case they are accepted verbatim.
pub struct OptionPrompt {
    question: String,
    options: OptionSet,
    defaults: Vec<String>,
    multi: bool,
    allow_custom: bool,
    display: DisplayMode,
    confirm: bool,
}

impl OptionPrompt {
    pub fn new(question: impl Into<String>, options: OptionSet) -> Self {
        Self {
            question: question.into(),
            options,
            defaults: Vec::new(),
            multi: false,
            allow_custom: false,
            display: DisplayMode::Inline,
            confirm: false,
        }
    }

    /// Default answer, given as a label (case-insensitive) or a value.
    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.defaults = vec![value.into()];
        self
    }

    /// Default answers for multi mode.
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

    pub fn allow_custom(mut self, allow_custom: bool) -> Self {
        self.allow_custom = allow_custom;
        self
    }

    pub fn display(mut self, display: DisplayMode) -> Self {
        self.display = display;
        self
    }

    pub fn confirm(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }

    /// Ask until the user supplies a valid (and, if requested, confirmed)
    /// selection. Returns `Answer::One` in single mode, `Answer::Many` in
    /// multi mode.
    pub fn ask(&self, channel: &mut dyn InputChannel) -> Result<Answer> {
        let resolved = self.resolve()?;
        run(&resolved, channel)
    }

    /// Validate the configuration and fix the per-ask derived state
    /// (menu letters, resolved defaults). Configuration problems surface
    /// here, before any I/O.
    fn resolve(&self) -> Result<Resolved<'_>> {
        if self.options.is_empty() {
            return Err(Error::Config(
                "option prompt requires at least one option".to_string(),
            ));
        }
        if !self.multi && self.defaults.len() > 1 {
            return Err(Error::Config(
                "single-select prompt cannot have multiple defaults".to_string(),
            ));
        }

        let mut defaults = Vec::with_capacity(self.defaults.len());
        for raw in &self.defaults {
            let matched = self
                .options
                .find_by_label(raw)
                .or_else(|| self.options.find_by_value(raw));
            match matched {
                Some(opt) => defaults.push(ResolvedDefault {
                    label: opt.label.clone(),
                    value: opt.value.clone(),
                }),
                None if self.allow_custom => defaults.push(ResolvedDefault {
                    label: raw.clone(),
                    value: raw.clone(),
                }),
                None => {
                    return Err(Error::Config(format!(
                        "default {raw:?} does not match any option"
                    )))
                }
            }
        }

        Ok(Resolved {
            prompt: self,
            letters: self.options.menu_letters(),
            defaults,
        })
    }
}

struct ResolvedDefault {
    label: String,
    value: String,
}

/// An `OptionPrompt` with its derived state fixed for one `ask()` call.
struct Resolved<'a> {
    prompt: &'a OptionPrompt,
    letters: Vec<char>,
    defaults: Vec<ResolvedDefault>,
}

impl Resolved<'_> {
    fn is_default(&self, opt: &Opt) -> bool {
        self.defaults.iter().any(|d| d.value == opt.value)
    }

    fn default_hint(&self) -> String {
        if self.defaults.is_empty() {
            return String::new();
        }
        let labels: Vec<&str> = self.defaults.iter().map(|d| d.label.as_str()).collect();
        format!(" (default: {})", labels.join(", "))
    }

    fn shortcut_hints(&self) -> Vec<&'static str> {
        let mut hints = Vec::new();
        if self.prompt.multi {
            hints.push("all / none");
        }
        if self.prompt.allow_custom {
            hints.push("custom");
        }
        hints
    }

    /// `Apple` with letter `a` renders as `[A]pple`; a fallback letter
    /// absent from the label renders as a `[x] Label` prefix.
    fn label_with_letter(opt: &Opt, letter: char) -> String {
        for (pos, ch) in opt.label.char_indices() {
            if ch.to_ascii_lowercase() == letter {
                let rest = &opt.label[pos + ch.len_utf8()..];
                return format!("{}[{}]{}", &opt.label[..pos], ch, rest);
            }
        }
        format!("[{letter}] {}", opt.label)
    }

    fn match_token(&self, token: &str) -> Option<String> {
        let options = &self.prompt.options;
        if self.prompt.display == DisplayMode::Inline {
            if let Ok(n) = token.parse::<usize>() {
                if n >= 1 {
                    if let Some(opt) = options.get(n - 1) {
                        return Some(opt.value.clone());
                    }
                }
            }
        }
        if let Some(opt) = options.find_by_label(token) {
            return Some(opt.value.clone());
        }
        if self.prompt.display == DisplayMode::Menu {
            let mut chars = token.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                let ch = ch.to_ascii_lowercase();
                if let Some(pos) = self.letters.iter().position(|&l| l == ch) {
                    if let Some(opt) = options.get(pos) {
                        return Some(opt.value.clone());
                    }
                }
            }
        }
        options.find_by_value(token).map(|opt| opt.value.clone())
    }

    fn parse_multi(&self, raw: &str) -> Parsed {
        let tokens: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            return Parsed::Retry("select at least one option".to_string());
        }

        let mut selected: Vec<String> = Vec::new();
        for token in tokens {
            // `all` / `none` override the rest of the line; `none` is the
            // one legal way to come back empty-handed.
            if token.eq_ignore_ascii_case("all") {
                let everything = self.prompt.options.iter().map(|o| o.value.clone()).collect();
                return Parsed::Answer(Answer::Many(everything));
            }
            if token.eq_ignore_ascii_case("none") {
                return Parsed::Answer(Answer::Many(Vec::new()));
            }
            let value = match self.match_token(token) {
                Some(value) => value,
                None if self.prompt.allow_custom => token.to_string(),
                None => return Parsed::Retry(format!("unknown option: {token}")),
            };
            if !selected.contains(&value) {
                selected.push(value);
            }
        }
        Parsed::Answer(Answer::Many(selected))
    }

    fn parse_single(&self, raw: &str) -> Parsed {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Parsed::Retry("a value is required".to_string());
        }
        match self.match_token(trimmed) {
            Some(value) => Parsed::Answer(Answer::One(value)),
            None if self.prompt.allow_custom => Parsed::Answer(Answer::One(trimmed.to_string())),
            None => Parsed::Retry(format!("unknown option: {trimmed}")),
        }
    }
}

impl PromptLogic for Resolved<'_> {
    fn render_prompt(&self, reason: Option<&str>) -> String {
        let mut out = String::new();
        if let Some(why) = reason {
            out.push_str(why);
            out.push('\n');
        }
        match self.prompt.display {
            DisplayMode::Inline => {
                let listed: Vec<String> = self
                    .prompt
                    .options
                    .iter()
                    .enumerate()
                    .map(|(i, opt)| format!("{}) {}", i + 1, opt.label))
                    .collect();
                let mut bracket = listed.join("  ");
                for hint in self.shortcut_hints() {
                    bracket.push_str(" | ");
                    bracket.push_str(hint);
                }
                out.push_str(&format!(
                    "{} [{}]{}: ",
                    self.prompt.question,
                    bracket,
                    self.default_hint()
                ));
            }
            DisplayMode::Menu => {
                out.push_str(&self.prompt.question);
                out.push('\n');
                for (opt, &letter) in self.prompt.options.iter().zip(&self.letters) {
                    let marker = if self.is_default(opt) { '*' } else { ' ' };
                    out.push_str(&format!("{} {}\n", marker, Self::label_with_letter(opt, letter)));
                }
                out.push_str("Enter choice");
                let hints = self.shortcut_hints();
                if !hints.is_empty() {
                    out.push_str(&format!(" [{}]", hints.join(" | ")));
                }
                out.push_str(&self.default_hint());
                out.push_str(": ");
            }
        }
        out
    }

    fn default_answer(&self) -> Option<Answer> {
        if self.defaults.is_empty() {
            return None;
        }
        let values: Vec<String> = self.defaults.iter().map(|d| d.value.clone()).collect();
        if self.prompt.multi {
            Some(Answer::Many(values))
        } else {
            Some(Answer::One(values.into_iter().next()?))
        }
    }

    fn parse_input(&self, raw: &str, _channel: &mut dyn InputChannel) -> Result<Parsed> {
        if self.prompt.multi {
            Ok(self.parse_multi(raw))
        } else {
            Ok(self.parse_single(raw))
        }
    }

    fn wants_confirm(&self) -> bool {
        self.prompt.confirm
    }
}
