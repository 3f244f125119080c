use std::env;

use once_cell::sync::Lazy;

pub static DEBUG_ENABLED: Lazy<bool> = Lazy::new(|| {
    env::var("RECASE_DEBUG").map_or(false, |log_level| log_level.eq("true") || log_level.eq("1"))
});

/// Builds a log entry in the `[title] message` form.
///
/// # Arguments
///
/// * `title` - The log title (e.g. the component raising the error).
/// * `message` - The error message.
///
/// # Returns
///
/// The formatted log line.
pub fn log_entry<T, M>(title: T, message: M) -> String
where
    T: AsRef<str>,
    M: AsRef<str>,
{
    format!("[{}] {}", title.as_ref(), message.as_ref())
}

/// Logs a debug message with optional formatted arguments.
///
/// # Arguments
///
/// * `fmt` - The format string for the debug message.
/// * `args` - Optional arguments to be formatted into the message.
///
/// # Examples
///
/// ```
/// use recase::debug;
///
/// // Printed in yellow only when RECASE_DEBUG is set to "true" or "1"
/// debug!("Operation completed");
/// debug!("Transformed {} fields in {}", 3, "ToDo");
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:expr) => {
        if *$crate::log::DEBUG_ENABLED {
            println!("{}", nu_ansi_term::Color::Yellow.paint(format!("{}", $fmt)));
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        if *$crate::log::DEBUG_ENABLED {
            println!("{}", nu_ansi_term::Color::Yellow.paint(format!($fmt, $($arg)*)));
        }
    };
}

/// Writes an entry to the error log (stderr), regardless of the debug switch.
///
/// # Examples
///
/// ```
/// use recase::error_log;
///
/// error_log!("Change Case", "Transformation error: {}", "boom");
/// ```
#[macro_export]
macro_rules! error_log {
    ($title:expr, $fmt:expr) => {
        eprintln!(
            "{}",
            nu_ansi_term::Color::Red.paint($crate::log::log_entry($title, format!("{}", $fmt)))
        );
    };
    ($title:expr, $fmt:expr, $($arg:tt)*) => {
        eprintln!(
            "{}",
            nu_ansi_term::Color::Red.paint($crate::log::log_entry($title, format!($fmt, $($arg)*)))
        );
    };
}

/// Writes an entry to the event log (stderr), regardless of the debug switch.
///
/// # Examples
///
/// ```
/// use recase::info_log;
///
/// info_log!("Change Case", "Applied case transformation to {} fields in {}", 2, "ToDo");
/// ```
#[macro_export]
macro_rules! info_log {
    ($title:expr, $fmt:expr) => {
        eprintln!(
            "{}",
            nu_ansi_term::Color::Green.paint($crate::log::log_entry($title, format!("{}", $fmt)))
        );
    };
    ($title:expr, $fmt:expr, $($arg:tt)*) => {
        eprintln!(
            "{}",
            nu_ansi_term::Color::Green.paint($crate::log::log_entry($title, format!($fmt, $($arg)*)))
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry() {
        assert_eq!(
            log_entry("Change Case", "something failed"),
            "[Change Case] something failed"
        );
        assert_eq!(log_entry("", ""), "[] ");
    }
}
