//! Narration sinks. The game core only ever hands over finished strings.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

pub trait OutputSink {
    fn write(&mut self, text: &str);

    fn write_line(&mut self, text: &str) {
        self.write(text);
        self.write("\n");
    }
}

/// Collects narration in memory. Clones share one buffer, so a caller can
/// keep a handle while the session owns the sink.
#[derive(Debug, Default, Clone)]
pub struct BufferedOutput {
    text: Rc<RefCell<String>>,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    /// Completed lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.text.borrow().lines().map(str::to_string).collect()
    }

    /// Return everything written since the last call.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.text.borrow_mut())
    }
}

impl OutputSink for BufferedOutput {
    fn write(&mut self, text: &str) {
        self.text.borrow_mut().push_str(text);
    }
}

/// Writes straight to stdout, flushing after every write so prompts appear.
#[derive(Debug, Default)]
pub struct StdoutOutput;

impl OutputSink for StdoutOutput {
    fn write(&mut self, text: &str) {
        let mut out = std::io::stdout().lock();
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }
}
