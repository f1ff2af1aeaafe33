//! The value types shared by the DMS decoder and encoder

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod consts;
pub mod decode;
pub mod encode;
pub mod errors;

use consts::{
    DEGREE_MARK, FULL_TURN_DEG, HALF_TURN_DEG, MINUTES_IN_DEGREE, MINUTE_MARK, SECONDS_IN_MINUTE,
    SECOND_MARK,
};

/// Presence of a hemisphere designator (N/S/E/W) when decoding,
/// or the formatting mode when encoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Indicator {
    /// No designator present; signed output.
    #[default]
    None,
    /// Latitude designator (N/S).
    Latitude,
    /// Longitude designator (E/W).
    Longitude,
    /// Encoding only: azimuth in the range [000, 360) without a letter.
    Azimuth,
    /// Encoding only: plain fixed-point number.
    Number,
}

/// The unit of a part of the DMS notation
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Component {
    /// Degrees
    Degree,
    /// Arc minutes
    Minute,
    /// Arc seconds
    Second,
}

impl Component {
    pub(crate) const ALL: [Self; 3] = [Self::Degree, Self::Minute, Self::Second];

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Degree => 0,
            Self::Minute => 1,
            Self::Second => 2,
        }
    }

    /// The canonical marker following the component
    pub(crate) const fn mark(self) -> char {
        match self {
            Self::Degree => DEGREE_MARK,
            Self::Minute => MINUTE_MARK,
            Self::Second => SECOND_MARK,
        }
    }

    pub(crate) fn from_mark(mark: char) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.mark() == mark)
    }

    /// The next smaller unit
    pub(crate) const fn smaller(self) -> Option<Self> {
        match self {
            Self::Degree => Some(Self::Minute),
            Self::Minute => Some(Self::Second),
            Self::Second => None,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Degree => "degrees",
            Self::Minute => "minutes",
            Self::Second => "seconds",
        };
        write!(f, "{name}")
    }
}

/// Combine the separate parts into the decimal degrees.
///
/// The sign of `degrees` is not propagated to other parts,
/// so -3d20' should be given either as `-dms_to_degrees(3.0, 20.0, 0.0)`
/// or as `dms_to_degrees(-3.0, -20.0, 0.0)`.
pub fn dms_to_degrees(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + (minutes + seconds / SECONDS_IN_MINUTE) / MINUTES_IN_DEGREE
}

/// Reduce an angle in the range [-540, 540) into [-180, 180)
pub(crate) fn reduce_half_turn(angle: f64) -> f64 {
    if angle >= HALF_TURN_DEG {
        angle - FULL_TURN_DEG
    } else if angle < -HALF_TURN_DEG {
        angle + FULL_TURN_DEG
    } else {
        angle
    }
}
