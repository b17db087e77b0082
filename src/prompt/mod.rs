mod freeform;
mod option;
mod types;
mod yes_no;

pub use freeform::FreeformPrompt;
pub use option::OptionPrompt;
pub use types::{Answer, DisplayMode};
pub use yes_no::YesNoPrompt;

use crate::channel::InputChannel;
use crate::error::Error;
use crate::Result;

/// Outcome of one parse attempt. A retry carries the reason shown to the
/// user on the next render; it never escapes `ask()`.
pub(crate) enum Parsed {
    Answer(Answer),
    Retry(String),
}

/// The seam between the retry engine and each prompt kind.
pub(crate) trait PromptLogic {
    /// Full prompt text for one attempt. `reason` is the previous
    /// attempt's failure, shown ahead of the question.
    fn render_prompt(&self, reason: Option<&str>) -> String;

    /// Answer substituted when the user submits an empty line.
    fn default_answer(&self) -> Option<Answer>;

    /// Parse one submitted line. May pull further lines from the channel
    /// (multi-line free-form entry does).
    fn parse_input(&self, raw: &str, channel: &mut dyn InputChannel) -> Result<Parsed>;

    /// Whether a valid answer must survive a yes/no confirmation before
    /// being returned.
    fn wants_confirm(&self) -> bool;
}

/// The ask loop: render, read, parse, optionally confirm.
///
/// An explicit loop, not recursion, so stack depth stays constant no
/// matter how many invalid attempts come in. Runs until a valid (and
/// confirmed) answer; only a closed or failing channel breaks out early.
/// There is deliberately no retry cap.
pub(crate) fn run<L: PromptLogic>(logic: &L, channel: &mut dyn InputChannel) -> Result<Answer> {
    let mut reason: Option<String> = None;
    loop {
        channel.write(&logic.render_prompt(reason.as_deref()))?;
        reason = None;

        let raw = match channel.read_line()? {
            Some(line) => line,
            None => return Err(Error::ChannelClosed),
        };

        let parsed = if raw.trim().is_empty() {
            match logic.default_answer() {
                Some(answer) => Parsed::Answer(answer),
                None => logic.parse_input(&raw, channel)?,
            }
        } else {
            logic.parse_input(&raw, channel)?
        };

        match parsed {
            Parsed::Answer(answer) => {
                if logic.wants_confirm() && !confirm(&answer, channel)? {
                    continue;
                }
                return Ok(answer);
            }
            Parsed::Retry(why) => reason = Some(why),
        }
    }
}

/// Post-answer confirmation sub-dialog. Declining discards the answer and
/// restarts the outer loop; the sub-dialog itself never asks for
/// confirmation, so this cannot recurse.
fn confirm(answer: &Answer, channel: &mut dyn InputChannel) -> Result<bool> {
    YesNoPrompt::new(format!("Confirm selection: {}. Keep it?", answer.summary()))
        .default(true)
        .ask(channel)
}
