use std::{error::Error, fmt, num::ParseFloatError};

use log::trace;

use crate::enum_trivial_from_impl;

use super::{Component, Indicator};

/// The rule of the DMS notation violated by an input
#[derive(Debug, Clone, PartialEq)]
pub enum Malformation {
    /// Nothing left after stripping the sign and the hemisphere
    Empty,
    /// The character is not a part of the notation
    IllegalCharacter(char),
    /// The sign is only allowed at the beginning
    InternalSign,
    /// The hemisphere letter should precede the sign, e.g. `N-20` but not `-N20`
    HemisphereAfterSign(char),
    /// The same hemisphere letter is given at both ends
    RepeatedHemisphere(char),
    /// Different hemisphere letters are given at both ends
    ContradictoryHemispheres(char, char),
    /// Both the colons and the unit marks are used
    MixedDelimiters,
    /// More than three colon-separated parts
    TooManyComponents,
    /// No number between the colons (or at the ends)
    EmptyComponent(Component),
    /// The unit mark has no number before it
    MissingNumber(Component),
    /// The same unit mark appears twice
    RepeatedComponent(Component),
    /// The unit mark (first) after the smaller one (second)
    ComponentOrder(Component, Component),
    /// Some number follows the seconds mark
    ExtraTextAfterSeconds,
    /// More than one decimal point in a number
    MultipleDecimalPoints(Component),
    /// Only the last component can have a fraction
    NonFinalFraction(Component),
    /// Minutes or seconds are not in range [0, 60)
    ComponentRange(Component, f64),
    /// The number cannot be represented as a float
    Number(ParseFloatError),
    /// Both strings designate a latitude or both a longitude
    SameAxis(Indicator),
    /// The plain angle cannot have the hemisphere letter
    UnexpectedHemisphere,
    /// The azimuth cannot have the N/S designator
    LatitudeAzimuth,
    /// Latitude is not in the range [-90, 90]
    LatitudeRange(f64),
    /// Longitude is not in the range [-540, 540)
    LongitudeRange(f64),
    /// Azimuth is not in the range [-540, 540)
    AzimuthRange(f64),
}

enum_trivial_from_impl!(ParseFloatError => Malformation:Number);

impl fmt::Display for Malformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty or incomplete DMS string"),
            Self::IllegalCharacter(ch) => write!(f, "illegal character {ch:?}"),
            Self::InternalSign => write!(f, "internal sign"),
            Self::HemisphereAfterSign(ch) => {
                write!(f, "hemisphere designator {ch:?} follows the sign")
            }
            Self::RepeatedHemisphere(ch) => write!(f, "repeated hemisphere designator {ch:?}"),
            Self::ContradictoryHemispheres(first, last) => write!(
                f,
                "contradictory hemisphere designators {first:?} and {last:?}"
            ),
            Self::MixedDelimiters => write!(f, "colons mixed with the unit marks"),
            Self::TooManyComponents => write!(f, "more than three components"),
            Self::EmptyComponent(c) => write!(f, "empty {c} component"),
            Self::MissingNumber(c) => write!(f, "missing number in {c} component"),
            Self::RepeatedComponent(c) => write!(f, "repeated {c} component"),
            Self::ComponentOrder(c, prev) => write!(f, "{c} component follows {prev} component"),
            Self::ExtraTextAfterSeconds => write!(f, "extra text following seconds"),
            Self::MultipleDecimalPoints(c) => {
                write!(f, "multiple decimal points in {c} component")
            }
            Self::NonFinalFraction(c) => write!(f, "decimal fraction in non-final {c} component"),
            Self::ComponentRange(c, value) => write!(f, "{c} {value} not in range [0, 60)"),
            Self::Number(inner) => write!(f, "{inner}"),
            Self::SameAxis(Indicator::Latitude) => write!(f, "both interpreted as latitudes"),
            Self::SameAxis(_) => write!(f, "both interpreted as longitudes"),
            Self::UnexpectedHemisphere => write!(f, "hemisphere designator in the angle"),
            Self::LatitudeAzimuth => write!(f, "azimuth with the latitude designator"),
            Self::LatitudeRange(lat) => write!(f, "latitude {lat} not in range [-90, 90]"),
            Self::LongitudeRange(lon) => write!(f, "longitude {lon} not in range [-540, 540)"),
            Self::AzimuthRange(azi) => write!(f, "azimuth {azi} not in range [-540, 540)"),
        }
    }
}

impl Error for Malformation {}

/// The input string does not follow the DMS notation
/// or the decoded value is out of the allowed range.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedInput {
    reason: Malformation,
    input: String,
}

impl MalformedInput {
    pub(super) fn new(reason: Malformation, input: impl Into<String>) -> Self {
        let input = input.into();
        trace!("rejected DMS input {:?}: {}", input, reason);
        Self { reason, input }
    }

    /// The violated rule
    pub fn reason(&self) -> &Malformation {
        &self.reason
    }

    /// The (normalized) input which has been rejected
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot decode {:?}: {}", self.input, self.reason)
    }
}

impl Error for MalformedInput {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.reason)
    }
}
