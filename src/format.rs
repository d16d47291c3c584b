#![cfg_attr(not(feature = "colored"), allow(unused_variables))]

#[cfg(feature = "chrono")]
use chrono::{DateTime, Local, Utc};
#[cfg(feature = "colored")]
use colored::Colorize;
use core::fmt::{self, Write};

#[derive(Copy, Clone, Debug)]
pub(crate) struct Format {
    #[cfg(feature = "colored")]
    pub colored: bool,
    pub detailed: bool,
    pub head: bool,
    pub saved: bool,
}

impl Default for Format {
    fn default() -> Self {
        Format {
            #[cfg(feature = "colored")]
            colored: true,
            detailed: true,
            head: true,
            saved: true,
        }
    }
}

impl Format {
    pub fn message(self, f: &mut fmt::Formatter, msg: &str) -> fmt::Result {
        let lines = msg.lines();
        if self.detailed {
            for line in lines {
                writeln!(f, "    {}", line.trim())?;
            }
        } else if let Some(line) = lines.map(str::trim).find(|s| !s.is_empty()) {
            f.write_char(' ')?;
            f.write_str(line)?;
        }
        Ok(())
    }

    pub fn position(self, f: &mut fmt::Formatter, index: usize) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, "{}", index.to_string().yellow().bold());
        }
        write!(f, "{index}")
    }

    pub fn labels(
        self,
        f: &mut fmt::Formatter,
        index: usize,
        head: usize,
        saved: Option<usize>,
    ) -> fmt::Result {
        match (
            self.head && index == head,
            self.saved && matches!(saved, Some(saved) if saved == index),
        ) {
            (true, true) => {
                #[cfg(feature = "colored")]
                if self.colored {
                    return write!(
                        f,
                        " {}{}{} {}{}",
                        "[".yellow(),
                        "HEAD".cyan().bold(),
                        ",".yellow(),
                        "SAVED".green().bold(),
                        "]".yellow()
                    );
                }
                f.write_str(" [HEAD, SAVED]")
            }
            (true, false) => {
                #[cfg(feature = "colored")]
                if self.colored {
                    return write!(
                        f,
                        " {}{}{}",
                        "[".yellow(),
                        "HEAD".cyan().bold(),
                        "]".yellow()
                    );
                }
                f.write_str(" [HEAD]")
            }
            (false, true) => {
                #[cfg(feature = "colored")]
                if self.colored {
                    return write!(
                        f,
                        " {}{}{}",
                        "[".yellow(),
                        "SAVED".green().bold(),
                        "]".yellow()
                    );
                }
                f.write_str(" [SAVED]")
            }
            (false, false) => Ok(()),
        }
    }

    pub fn footprint(self, f: &mut fmt::Formatter, bytes: usize) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, " {}", format!("{bytes} B").dimmed());
        }
        write!(f, " {bytes} B")
    }

    #[cfg(feature = "chrono")]
    pub fn timestamp(self, f: &mut fmt::Formatter, timestamp: &DateTime<Utc>) -> fmt::Result {
        let rfc2822 = timestamp.with_timezone(&Local).to_rfc2822();
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, " {}", rfc2822.yellow());
        }
        write!(f, " [{rfc2822}]")
    }
}
