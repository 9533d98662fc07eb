//=========================================================================
// Log Level
//=========================================================================
//
// Per-instance verbosity gate placed in front of the `log` facade.
//
//   0 Silent │ 1 Errors │ 2 Errors + Warnings │ 3 + Debug trace
//
// The gate is purely observational: it decides whether a record is handed
// to `log`, never what the caller does next.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::Level;
use serde::{Deserialize, Serialize};

//=== LogLevel ============================================================

/// Verbosity of a controller or scene.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(from = "u8", into = "u8")]
pub enum LogLevel {
    Silent,
    Errors,
    #[default]
    Warnings,
    Debug,
}

impl LogLevel {
    /// Returns true if a record at `level` passes this gate.
    pub fn permits(self, level: Level) -> bool {
        match level {
            Level::Error => self >= Self::Errors,
            Level::Warn => self >= Self::Warnings,
            Level::Info | Level::Debug | Level::Trace => self >= Self::Debug,
        }
    }
}

impl From<u8> for LogLevel {
    /// Numeric levels as used by configuration; anything above 3 is Debug.
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Silent,
            1 => Self::Errors,
            2 => Self::Warnings,
            _ => Self::Debug,
        }
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level as u8
    }
}

//=== Gated Logging =======================================================

/// Logs through the `log` facade if the instance level permits it.
///
/// `gated!(self.log_level, Level::Warn, "message {}", arg)`
macro_rules! gated {
    ($setting:expr, $level:expr, $($arg:tt)+) => {
        if $crate::core::LogLevel::permits($setting, $level) {
            log::log!($level, $($arg)+);
        }
    };
}

pub(crate) use gated;

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_warnings() {
        assert_eq!(LogLevel::default(), LogLevel::Warnings);
        assert_eq!(u8::from(LogLevel::default()), 2);
    }

    #[test]
    fn silent_blocks_everything() {
        for level in [Level::Error, Level::Warn, Level::Info, Level::Debug] {
            assert!(!LogLevel::Silent.permits(level));
        }
    }

    #[test]
    fn warnings_pass_errors_and_warnings_only() {
        assert!(LogLevel::Warnings.permits(Level::Error));
        assert!(LogLevel::Warnings.permits(Level::Warn));
        assert!(!LogLevel::Warnings.permits(Level::Debug));
    }

    #[test]
    fn debug_passes_trace_records() {
        assert!(LogLevel::Debug.permits(Level::Debug));
        assert!(LogLevel::Debug.permits(Level::Info));
    }

    #[test]
    fn numeric_levels_saturate() {
        assert_eq!(LogLevel::from(1), LogLevel::Errors);
        assert_eq!(LogLevel::from(3), LogLevel::Debug);
        assert_eq!(LogLevel::from(9), LogLevel::Debug);
    }

    #[test]
    fn deserializes_from_number() {
        let level: LogLevel = serde_json::from_str("0").unwrap();
        assert_eq!(level, LogLevel::Silent);
        assert_eq!(serde_json::to_string(&LogLevel::Debug).unwrap(), "3");
    }
}
