//! Interactive terminal prompt engine.
//!
//! A small closed set of prompt kinds (option selection, free-form text,
//! yes/no) shares one retry/validation loop. Invalid input re-asks with a
//! short reason; only configuration mistakes and a closed input channel
//! surface as errors.
//!
//! ```no_run
//! use prompt_engine::{OptionPrompt, OptionSet, StdioChannel, YesNoPrompt};
//!
//! # fn main() -> prompt_engine::Result<()> {
//! let mut channel = StdioChannel::new();
//!
//! let fruit = OptionPrompt::new(
//!     "Favourite fruit?",
//!     OptionSet::from_labels(["Apple", "Banana", "Cherry"])?,
//! )
//! .default("Banana")
//! .ask(&mut channel)?;
//!
//! let confirmed = YesNoPrompt::new("Delete all recordings?")
//!     .default(false)
//!     .ask(&mut channel)?;
//! # let _ = (fruit, confirmed);
//! # Ok(())
//! # }
//! ```

pub mod channel;
pub mod error;
pub mod facade;
pub mod options;
pub mod prompt;

pub use channel::{InputChannel, ScriptedChannel, StdioChannel};
pub use error::{Error, Result};
pub use facade::{interactive_prompt, FreeformMode, OptionInput, PromptArgs};
pub use options::{Opt, OptionSet};
pub use prompt::{Answer, DisplayMode, FreeformPrompt, OptionPrompt, YesNoPrompt};
