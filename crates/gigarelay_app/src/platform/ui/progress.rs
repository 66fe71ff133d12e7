use std::io::Write;

use gigarelay_core::{SessionEvent, SessionObserver};
use relay_logging::relay_info;

use super::render::{phase_label, progress_bar};

/// Redraws a single progress line in place while a transfer runs.
pub struct ProgressLine<W: Write> {
    out: W,
    open: bool,
}

impl<W: Write> ProgressLine<W> {
    pub fn new(out: W) -> Self {
        Self { out, open: false }
    }

    /// Ends the in-place line so full renders start on a fresh row.
    pub fn close(&mut self) {
        if self.open {
            let _ = writeln!(self.out);
            self.open = false;
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SessionObserver for ProgressLine<W> {
    fn notify(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::ProgressChanged(percent) => {
                let _ = write!(self.out, "\r  {}", progress_bar(percent));
                let _ = self.out.flush();
                self.open = true;
            }
            SessionEvent::PhaseChanged(phase) => {
                self.close();
                relay_info!("Upload session is now {}", phase_label(phase));
            }
        }
    }
}
