use crate::{Format, Payload, Snapshot, UndoHistory};
use core::fmt::{self, Write};

/// Configurable display formatting for the [`UndoHistory`].
///
/// Snapshots are listed newest first. The leading edge gets a row of its
/// own while the cursor is on it.
///
/// # Examples
/// ```
/// # use snapshot_history::UndoHistory;
/// let mut history = UndoHistory::default();
/// history.push_undo("Cut", "a");
/// history.push_undo("Paste", "b");
///
/// let mut display = history.display();
/// display.detailed(false);
/// # #[cfg(feature = "colored")]
/// # display.colored(false);
/// assert_eq!(display.to_string(), "2 [HEAD]\n1 Paste\n0 [SAVED] Cut\n");
/// ```
pub struct Display<'a, P, S> {
    history: &'a UndoHistory<P, S>,
    format: Format,
}

impl<P, S> Display<'_, P, S> {
    /// Show colored output (on by default).
    ///
    /// Requires the `colored` feature to be enabled.
    #[cfg(feature = "colored")]
    pub fn colored(&mut self, on: bool) -> &mut Self {
        self.format.colored = on;
        self
    }

    /// Show detailed output (on by default).
    ///
    /// Detailed output includes how many bytes each snapshot is accounted
    /// for and, with the `chrono` feature, when it was recorded.
    pub fn detailed(&mut self, on: bool) -> &mut Self {
        self.format.detailed = on;
        self
    }

    /// Show the position of the cursor in the output (on by default).
    pub fn head(&mut self, on: bool) -> &mut Self {
        self.format.head = on;
        self
    }

    /// Show the saved snapshot (on by default).
    pub fn saved(&mut self, on: bool) -> &mut Self {
        self.format.saved = on;
        self
    }
}

impl<P: Payload, S> Display<'_, P, S> {
    fn fmt_list(
        &self,
        f: &mut fmt::Formatter,
        index: usize,
        snapshot: Option<&Snapshot<P>>,
    ) -> fmt::Result {
        self.format.position(f, index)?;

        if let Some(snapshot) = snapshot {
            if self.format.detailed {
                let footprint = self.history.footprint().of(snapshot.payload());
                self.format.footprint(f, footprint)?;
                #[cfg(feature = "chrono")]
                self.format.timestamp(f, &snapshot.created_at())?;
            }
        }

        self.format
            .labels(f, index, self.history.current(), self.history.saved)?;

        if let Some(snapshot) = snapshot {
            if self.format.detailed {
                writeln!(f)?;
                self.format.message(f, snapshot.label())?;
            } else {
                self.format.message(f, snapshot.label())?;
                f.write_char('\n')?;
            }
        } else {
            f.write_char('\n')?;
        }
        Ok(())
    }
}

impl<'a, P, S> From<&'a UndoHistory<P, S>> for Display<'a, P, S> {
    fn from(history: &'a UndoHistory<P, S>) -> Self {
        Display {
            history,
            format: Format::default(),
        }
    }
}

impl<P: Payload, S> fmt::Display for Display<'_, P, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.history.is_eof() {
            self.fmt_list(f, self.history.len(), None)?;
        }
        for (i, snapshot) in self.history.snapshots().enumerate().rev() {
            self.fmt_list(f, i, Some(snapshot))?;
        }
        Ok(())
    }
}
