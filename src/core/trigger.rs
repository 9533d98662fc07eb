//=========================================================================
// Trigger
//=========================================================================
//
// Where a scene starts on the scroll axis.
//
//   Trigger          → absolute reference point (number or element)
//   TriggerPosition  → fraction of the viewport that must pass the
//                      reference point before progress begins
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::rc::Rc;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::core::error::OptionError;
use crate::core::Axis;
use crate::platform::Positioned;

//=== Trigger =============================================================

/// Scroll-axis reference point of a scene.
#[derive(Clone)]
pub enum Trigger {
    /// Absolute offset, interpreted on whatever axis the controller uses.
    Offset(f64),

    /// Element whose absolute position is read on every pass.
    Element(Rc<dyn Positioned>),
}

impl Trigger {
    /// Resolves the trigger to a number on `axis`.
    ///
    /// Element triggers resolve to 0 while the axis is unknown, i.e. before
    /// the scene joins a controller.
    pub fn resolve(&self, axis: Option<Axis>) -> f64 {
        match (self, axis) {
            (Self::Offset(offset), _) => *offset,
            (Self::Element(element), Some(axis)) => element.offset().along(axis),
            (Self::Element(_), None) => 0.0,
        }
    }
}

impl Default for Trigger {
    fn default() -> Self {
        Self::Offset(0.0)
    }
}

impl From<f64> for Trigger {
    fn from(offset: f64) -> Self {
        Self::Offset(offset)
    }
}

impl From<Rc<dyn Positioned>> for Trigger {
    fn from(element: Rc<dyn Positioned>) -> Self {
        Self::Element(element)
    }
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offset(offset) => f.debug_tuple("Offset").field(offset).finish(),
            Self::Element(element) => f.debug_tuple("Element").field(&element.offset()).finish(),
        }
    }
}

//=== TriggerPosition =====================================================

/// Viewport anchor of a scene's start point.
///
/// 0 means the trigger must reach the leading edge of the viewport
/// (`OnLeave`), 1 means it starts as soon as it enters (`OnEnter`).
#[derive(Clone, Default)]
pub enum TriggerPosition {
    OnLeave,
    OnCenter,
    #[default]
    OnEnter,
    Fraction(f64),
    Callback(Rc<dyn Fn() -> f64>),
}

impl TriggerPosition {
    /// Resolved viewport fraction.
    ///
    /// A callback result outside `[0, 1]` falls back to the center.
    pub fn fraction(&self) -> f64 {
        self.checked_fraction().unwrap_or(0.5)
    }

    /// Resolved viewport fraction, or the rejected callback result.
    pub fn checked_fraction(&self) -> Result<f64, OptionError> {
        match self {
            Self::OnLeave => Ok(0.0),
            Self::OnCenter => Ok(0.5),
            Self::OnEnter => Ok(1.0),
            Self::Fraction(fraction) => Ok(*fraction),
            Self::Callback(callback) => {
                let value = callback();
                if (0.0..=1.0).contains(&value) {
                    Ok(value)
                } else {
                    Err(OptionError::TriggerPosition(value))
                }
            }
        }
    }

    /// Creates a position backed by a callback.
    pub fn callback(f: impl Fn() -> f64 + 'static) -> Self {
        Self::Callback(Rc::new(f))
    }

    /// Rejects raw fractions outside `[0, 1]`.
    pub(crate) fn validate(&self) -> Result<(), OptionError> {
        match self {
            Self::Fraction(fraction) if !(0.0..=1.0).contains(fraction) => {
                Err(OptionError::TriggerPosition(*fraction))
            }
            _ => Ok(()),
        }
    }

    fn name(&self) -> Option<&'static str> {
        match self {
            Self::OnLeave => Some("onLeave"),
            Self::OnCenter => Some("onCenter"),
            Self::OnEnter => Some("onEnter"),
            Self::Fraction(_) | Self::Callback(_) => None,
        }
    }
}

impl From<f64> for TriggerPosition {
    fn from(fraction: f64) -> Self {
        Self::Fraction(fraction)
    }
}

impl fmt::Debug for TriggerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fraction(fraction) => f.debug_tuple("Fraction").field(fraction).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
            named => f.write_str(named.name().unwrap_or_default()),
        }
    }
}

impl PartialEq for TriggerPosition {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Fraction(a), Self::Fraction(b)) => a == b,
            (Self::Callback(a), Self::Callback(b)) => Rc::ptr_eq(a, b),
            (a, b) => a.name().is_some() && a.name() == b.name(),
        }
    }
}

//--- Serde ---------------------------------------------------------------
//
// Named anchors travel as strings, everything else as a number. A callback
// is written as its current fraction.
//

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TriggerPositionRepr {
    Name(String),
    Fraction(f64),
}

impl Serialize for TriggerPosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = match self.name() {
            Some(name) => TriggerPositionRepr::Name(name.to_string()),
            None => TriggerPositionRepr::Fraction(self.fraction()),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TriggerPosition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match TriggerPositionRepr::deserialize(deserializer)? {
            TriggerPositionRepr::Fraction(fraction) => Ok(Self::Fraction(fraction)),
            TriggerPositionRepr::Name(name) => match name.as_str() {
                "onLeave" => Ok(Self::OnLeave),
                "onCenter" => Ok(Self::OnCenter),
                "onEnter" => Ok(Self::OnEnter),
                other => Err(de::Error::unknown_variant(other, &["onLeave", "onCenter", "onEnter"])),
            },
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
