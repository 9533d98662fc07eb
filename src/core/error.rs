//=========================================================================
// Errors
//=========================================================================
//
// Error taxonomy of the core.
//
// - `ConfigError`: a host handle is unusable; the operation is abandoned.
// - `OptionError`: an option value is out of range; it is replaced by a
//   safe default.
//
// Neither crosses the public setter API. They are produced by internal
// validation, logged at the instance's level and swallowed.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== ConfigError =========================================================

/// Unusable host handle supplied to a controller or scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Controller built without a scroll container.
    MissingScrollContainer,

    /// Pin target is not part of the document.
    DetachedPinElement,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingScrollContainer => write!(f, "No valid scroll container supplied"),
            Self::DetachedPinElement => write!(f, "Invalid pin element supplied"),
        }
    }
}

impl std::error::Error for ConfigError {}

//=== OptionError =========================================================

/// Scene option rejected during validation.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionError {
    /// Duration below zero or not finite.
    Duration(f64),

    /// Offset that is not a finite number.
    Offset(f64),

    /// Trigger position fraction outside `[0, 1]`.
    TriggerPosition(f64),
}

impl OptionError {
    /// Name of the rejected option as it appears in configuration.
    pub fn option_name(&self) -> &'static str {
        match self {
            Self::Duration(_) => "duration",
            Self::Offset(_) => "offset",
            Self::TriggerPosition(_) => "triggerPosition",
        }
    }
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Duration(v) | Self::Offset(v) | Self::TriggerPosition(v) => v,
        };
        write!(f, "Invalid value for scene option \"{}\": {}", self.option_name(), value)
    }
}

impl std::error::Error for OptionError {}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_error_names_the_option() {
        let err = OptionError::Duration(-5.0);
        assert_eq!(err.option_name(), "duration");
        assert_eq!(err.to_string(), "Invalid value for scene option \"duration\": -5");
    }

    #[test]
    fn config_error_messages() {
        assert_eq!(
            ConfigError::MissingScrollContainer.to_string(),
            "No valid scroll container supplied"
        );
        assert_eq!(ConfigError::DetachedPinElement.to_string(), "Invalid pin element supplied");
    }
}
