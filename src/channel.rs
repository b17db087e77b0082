use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::Result;

/// The terminal capability every prompt consumes: write prompt text,
/// read one line of raw input.
///
/// Terminal input is serial per session: a channel is used by exactly one
/// `ask()` call at a time. The crate adds no locking; sharing one channel
/// across threads is on the caller.
pub trait InputChannel {
    /// Write prompt text to the user. No newline is appended.
    fn write(&mut self, text: &str) -> Result<()>;

    /// Read one line without its trailing newline. `None` means the
    /// stream is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// Channel over process stdio. Prompt text goes to stderr so stdout stays
/// clean for machine-readable output.
#[derive(Default)]
pub struct StdioChannel;

impl StdioChannel {
    pub fn new() -> Self {
        Self
    }
}

impl InputChannel for StdioChannel {
    fn write(&mut self, text: &str) -> Result<()> {
        let mut stderr = io::stderr().lock();
        stderr.write_all(text.as_bytes())?;
        stderr.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// In-memory channel fed from a fixed script of input lines.
///
/// Used by this crate's tests and by callers that drive prompts
/// programmatically. Everything a prompt writes is captured in
/// [`transcript`](ScriptedChannel::transcript); once the script runs out,
/// reads report end of input.
pub struct ScriptedChannel {
    lines: VecDeque<String>,
    transcript: String,
}

impl ScriptedChannel {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            transcript: String::new(),
        }
    }

    /// Everything written to the channel so far, in order.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }
}

impl InputChannel for ScriptedChannel {
    fn write(&mut self, text: &str) -> Result<()> {
        self.transcript.push_str(text);
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
