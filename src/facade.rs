use crate::channel::InputChannel;
use crate::options::OptionSet;
use crate::prompt::{Answer, DisplayMode, FreeformPrompt, OptionPrompt};
use crate::Result;

/// Caller-supplied options before normalization. `Labels` makes each
/// label its own value; `Pairs` maps labels to distinct values,
/// insertion order preserved.
#[derive(Debug, Clone)]
pub enum OptionInput {
    Labels(Vec<String>),
    Pairs(Vec<(String, String)>),
}

impl OptionInput {
    pub fn normalize(&self) -> Result<OptionSet> {
        match self {
            OptionInput::Labels(labels) => OptionSet::from_labels(labels.iter().cloned()),
            OptionInput::Pairs(pairs) => OptionSet::from_pairs(pairs.iter().cloned()),
        }
    }
}

/// Legacy free-form flag: absent means option selection (or single-line
/// text when no options are given).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreeformMode {
    Single,
    Multi,
}

impl std::str::FromStr for FreeformMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(FreeformMode::Single),
            "multi" => Ok(FreeformMode::Multi),
            other => Err(crate::Error::Config(format!(
                "unrecognized freeform mode: {other:?} (expected \"single\" or \"multi\")"
            ))),
        }
    }
}

/// The legacy flat-flag call shape, one field per recognized flag.
/// `Default` reproduces the historical defaults: single-select inline
/// option prompt, no custom entry, no confirmation.
#[derive(Debug, Clone, Default)]
pub struct PromptArgs {
    pub question: String,
    pub options: Option<OptionInput>,
    pub default: Vec<String>,
    pub multi: bool,
    pub allow_custom: bool,
    pub display: DisplayMode,
    pub freeform: Option<FreeformMode>,
    pub confirm: bool,
}

impl PromptArgs {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            ..Self::default()
        }
    }
}

/// Drop-in replacement for the legacy flag-driven prompt call.
///
/// Pure dispatch, no new behavior. The flags map onto exactly one
/// concrete prompt, matching the old semantics:
///
/// - `freeform` set: free-form text, single- or multi-line. The legacy
///   call ignored `options` in this case and so does this one.
/// - `options` set: option selection with `multi`, `allow_custom`, and
///   `display` forwarded verbatim.
/// - neither: single-line free-form text.
///
/// A two-option yes/no-shaped `options` argument is not special-cased;
/// it goes through [`OptionPrompt`] and produces the output it always
/// did.
pub fn interactive_prompt(args: &PromptArgs, channel: &mut dyn InputChannel) -> Result<Answer> {
    if let Some(mode) = args.freeform {
        return FreeformPrompt::new(args.question.clone())
            .multi(mode == FreeformMode::Multi)
            .defaults(args.default.iter().cloned())
            .confirm(args.confirm)
            .ask(channel);
    }

    match &args.options {
        Some(input) => OptionPrompt::new(args.question.clone(), input.normalize()?)
            .defaults(args.default.iter().cloned())
            .multi(args.multi)
            .allow_custom(args.allow_custom)
            .display(args.display)
            .confirm(args.confirm)
            .ask(channel),
        None => FreeformPrompt::new(args.question.clone())
            .multi(false)
            .defaults(args.default.iter().cloned())
            .confirm(args.confirm)
            .ask(channel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::ScriptedChannel;

    #[test]
    fn no_options_maps_to_single_freeform() {
        let args = PromptArgs::new("Name?");
        let mut channel = ScriptedChannel::new(["Ada"]);
        assert_eq!(
            interactive_prompt(&args, &mut channel).unwrap(),
            Answer::One("Ada".to_string())
        );
    }

    #[test]
    fn freeform_multi_maps_to_multi_line_entry() {
        let args = PromptArgs {
            freeform: Some(FreeformMode::Multi),
            ..PromptArgs::new("Guests?")
        };
        let mut channel = ScriptedChannel::new(["Ada", "Grace", ""]);
        assert_eq!(
            interactive_prompt(&args, &mut channel).unwrap(),
            Answer::Many(vec!["Ada".to_string(), "Grace".to_string()])
        );
    }

    #[test]
    fn freeform_flag_wins_over_options() {
        // Historical quirk preserved: a set freeform flag ignores options.
        let args = PromptArgs {
            options: Some(OptionInput::Labels(vec!["Apple".to_string()])),
            freeform: Some(FreeformMode::Single),
            ..PromptArgs::new("Anything?")
        };
        let mut channel = ScriptedChannel::new(["whatever"]);
        assert_eq!(
            interactive_prompt(&args, &mut channel).unwrap(),
            Answer::One("whatever".to_string())
        );
    }

    #[test]
    fn options_map_to_option_prompt_with_flags_forwarded() {
        let args = PromptArgs {
            options: Some(OptionInput::Pairs(vec![
                ("English".to_string(), "en".to_string()),
                ("Japanese".to_string(), "ja".to_string()),
            ])),
            multi: true,
            allow_custom: true,
            ..PromptArgs::new("Languages?")
        };
        let mut channel = ScriptedChannel::new(["english, fr"]);
        assert_eq!(
            interactive_prompt(&args, &mut channel).unwrap(),
            Answer::Many(vec!["en".to_string(), "fr".to_string()])
        );
    }

    #[test]
    fn yes_no_shaped_options_stay_an_option_prompt() {
        let args = PromptArgs {
            options: Some(OptionInput::Labels(vec![
                "yes".to_string(),
                "no".to_string(),
            ])),
            ..PromptArgs::new("Proceed?")
        };
        let mut channel = ScriptedChannel::new(["yes"]);
        assert_eq!(
            interactive_prompt(&args, &mut channel).unwrap(),
            Answer::One("yes".to_string())
        );
    }

    #[test]
    fn bad_option_input_surfaces_before_any_io() {
        let args = PromptArgs {
            options: Some(OptionInput::Labels(vec![
                "dup".to_string(),
                "dup".to_string(),
            ])),
            ..PromptArgs::new("Broken?")
        };
        let mut channel = ScriptedChannel::new(["1"]);
        let err = interactive_prompt(&args, &mut channel).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
        assert_eq!(channel.transcript(), "");
    }
}
