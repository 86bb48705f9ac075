use std::io::Write;

/// Receives human-readable progress messages during a checkout.
///
/// Hosts inject whatever sink suits them; the checkout never depends on a
/// concrete listener type.
pub trait ProgressSink {
    fn progress(&mut self, message: &str);
}

/// Writes each progress message as one line to the wrapped writer.
///
/// Write failures are discarded; progress reporting never aborts a
/// checkout.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ProgressSink for WriterSink<W> {
    fn progress(&mut self, message: &str) {
        let _ = writeln!(self.writer, "{message}");
    }
}

/// Discards all progress messages.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl ProgressSink for SilentSink {
    fn progress(&mut self, _message: &str) {}
}
