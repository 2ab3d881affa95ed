//! Nice dcaspt2gen output formatting.

use std::fmt;

use log;

const DCG_BANNER_LENGTH: usize = 79;

/// Logs an error to the `dcaspt2gen-output` logger.
macro_rules! dcg_error {
    ($fmt:expr $(, $($arg:tt)*)?) => {
        log::error!($fmt, $($($arg)*)?);
        log::error!(target: "dcaspt2gen-output", $fmt, $($($arg)*)?);
    }
}

/// Logs a warning to the `dcaspt2gen-output` logger.
macro_rules! dcg_warn {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::warn!(target: "dcaspt2gen-output", $fmt, $($($arg)*)?); }
}

/// Logs a main output line to the `dcaspt2gen-output` logger.
macro_rules! dcg_output {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::info!(target: "dcaspt2gen-output", $fmt, $($($arg)*)?); }
}

pub(crate) use {dcg_error, dcg_output, dcg_warn};

/// Logs a nicely formatted section title to the `dcaspt2gen-output` logger.
pub(crate) fn log_title(title: &str) {
    let length = title.chars().count().max(DCG_BANNER_LENGTH - 6);
    let bar = "─".repeat(length);
    dcg_output!("┌──{bar}──┐");
    dcg_output!("│§ {title:^length$} §│");
    dcg_output!("└──{bar}──┘");
}

/// Writes a nicely formatted subtitle.
pub(crate) fn write_subtitle(f: &mut fmt::Formatter<'_>, subtitle: &str) -> fmt::Result {
    let length = subtitle.chars().count();
    let bar = "═".repeat(length);
    writeln!(f, "{subtitle}")?;
    writeln!(f, "{bar}")?;
    Ok(())
}

/// Turns a boolean into a string of `yes` or `no`.
pub(crate) fn nice_bool(b: bool) -> String {
    if b {
        "yes".to_string()
    } else {
        "no".to_string()
    }
}

/// A trait for logging `dcaspt2gen` outputs nicely.
pub(crate) trait Dcaspt2GenOutput: fmt::Debug + fmt::Display {
    /// Logs display output nicely.
    fn log_output_display(&self) {
        let lines = self.to_string();
        lines.lines().for_each(|line| {
            dcg_output!("{line}");
        })
    }
}

// Blanket implementation
impl<T> Dcaspt2GenOutput for T where T: fmt::Debug + fmt::Display {}
