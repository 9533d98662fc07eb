//=========================================================================
// Scene Options
//=========================================================================
//
// Timing and positioning options of a scene, with validation.
//
// Invalid values never fail construction: each rejected field is reset to
// its safe default and the rejection is reported back to the caller for
// logging.
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::core::error::OptionError;
use crate::core::{LogLevel, TriggerPosition};

//=== SceneOptions ========================================================

/// Options of a scene; every field can be changed later through setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneOptions {
    /// Scroll distance over which progress runs from 0 to 1; 0 makes the
    /// trigger an instantaneous switch.
    pub duration: f64,

    /// Shift applied to the trigger point.
    pub offset: f64,

    pub trigger_position: TriggerPosition,

    /// Whether the scene rewinds when scrolling back.
    pub reverse: bool,

    /// Animate the tween towards the target instead of jumping to it.
    pub smooth_tweening: bool,

    #[serde(rename = "loglevel")]
    pub log_level: LogLevel,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            duration: 0.0,
            offset: 0.0,
            trigger_position: TriggerPosition::OnEnter,
            reverse: true,
            smooth_tweening: false,
            log_level: LogLevel::Warnings,
        }
    }
}

impl SceneOptions {
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_trigger_position(mut self, position: impl Into<TriggerPosition>) -> Self {
        self.trigger_position = position.into();
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_smooth_tweening(mut self, smooth: bool) -> Self {
        self.smooth_tweening = smooth;
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Parses options from JSON using the camelCase configuration keys.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resets invalid fields to their defaults and returns what was rejected.
    pub(crate) fn sanitize(&mut self) -> Vec<OptionError> {
        let mut rejected = Vec::new();

        if !(self.duration.is_finite() && self.duration >= 0.0) {
            rejected.push(OptionError::Duration(self.duration));
            self.duration = 0.0;
        }
        if !self.offset.is_finite() {
            rejected.push(OptionError::Offset(self.offset));
            self.offset = 0.0;
        }
        if let Err(err) = self.trigger_position.validate() {
            rejected.push(err);
            self.trigger_position = TriggerPosition::OnCenter;
        }

        rejected
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = SceneOptions::default();
        assert_eq!(options.duration, 0.0);
        assert_eq!(options.offset, 0.0);
        assert_eq!(options.trigger_position, TriggerPosition::OnEnter);
        assert!(options.reverse);
        assert!(!options.smooth_tweening);
        assert_eq!(options.log_level, LogLevel::Warnings);
    }

    #[test]
    fn valid_options_pass_untouched() {
        let mut options = SceneOptions::default()
            .with_duration(200.0)
            .with_offset(-50.0)
            .with_trigger_position(0.25);

        assert!(options.sanitize().is_empty());
        assert_eq!(options.duration, 200.0);
        assert_eq!(options.trigger_position, TriggerPosition::Fraction(0.25));
    }

    #[test]
    fn negative_duration_resets_to_zero() {
        let mut options = SceneOptions::default().with_duration(-10.0);
        assert_eq!(options.sanitize(), vec![OptionError::Duration(-10.0)]);
        assert_eq!(options.duration, 0.0);
    }

    #[test]
    fn infinite_duration_resets_to_zero() {
        let mut options = SceneOptions::default().with_duration(f64::INFINITY);
        assert_eq!(options.sanitize(), vec![OptionError::Duration(f64::INFINITY)]);
        assert_eq!(options.duration, 0.0);
    }

    #[test]
    fn non_finite_offset_resets_to_zero() {
        let mut options = SceneOptions::default().with_offset(f64::INFINITY);
        assert_eq!(options.sanitize().len(), 1);
        assert_eq!(options.offset, 0.0);
    }

    #[test]
    fn invalid_trigger_position_resets_to_center() {
        let mut options = SceneOptions::default().with_trigger_position(-0.5);
        assert_eq!(options.sanitize(), vec![OptionError::TriggerPosition(-0.5)]);
        assert_eq!(options.trigger_position, TriggerPosition::OnCenter);
    }

    #[test]
    fn several_rejections_are_all_reported() {
        let mut options = SceneOptions::default()
            .with_duration(f64::NAN)
            .with_trigger_position(7.0);
        let rejected = options.sanitize();
        assert_eq!(rejected.len(), 2);
        assert_eq!(rejected[1], OptionError::TriggerPosition(7.0));
    }

    #[test]
    fn parses_camel_case_json() {
        let options = SceneOptions::from_json(
            r#"{"duration": 300, "triggerPosition": "onLeave", "smoothTweening": true, "loglevel": 3}"#,
        )
        .unwrap();

        assert_eq!(options.duration, 300.0);
        assert_eq!(options.trigger_position, TriggerPosition::OnLeave);
        assert!(options.smooth_tweening);
        assert_eq!(options.log_level, LogLevel::Debug);
        assert!(options.reverse);
    }
}
