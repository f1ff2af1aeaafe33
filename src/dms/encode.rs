//! Format decimal degrees in the degree-minute-second notation

use num_traits::Float;

use crate::utils::div_mod;

use super::{
    consts::{FULL_TURN_DEG, HEMISPHERES, MINUTES_IN_DEGREE, SECONDS_IN_MINUTE},
    Component, Indicator,
};

/// Convert angle (in degrees) into a DMS string (using `d`, `'`, and `"`).
///
/// The `trailing` component is given with `precision` digits
/// after the decimal point; the smaller components are omitted.
/// The degrees designator `d` is not printed if it is the trailing component.
///
/// The interpretation of the `ind` is as follows:
/// - [`Indicator::None`]: signed result, no leading zeros on degrees
///   except in the units place, e.g. `-8d03'`;
/// - [`Indicator::Latitude`]: trailing N or S hemisphere designator, no sign,
///   pad degrees to 2 digits, e.g. `08d03'S`;
/// - [`Indicator::Longitude`]: trailing E or W hemisphere designator, no sign,
///   pad degrees to 3 digits, e.g. `008d03'W`;
/// - [`Indicator::Azimuth`]: convert to the range [0, 360), no sign,
///   pad degrees to 3 digits, e.g. `351d57'`;
/// - [`Indicator::Number`]: plain number with the `precision` digits,
///   the `trailing` is ignored.
///
/// The integer parts of the minutes and seconds are always given with 2 digits.
///
/// If the `separator` is given, it is used between the components
/// instead of the `d`, `'`, and `"` marks.
///
/// ```
/// # use geod_dms::{encode, Component, Indicator};
/// assert_eq!(encode(-8.05, Component::Minute, 0, Indicator::Azimuth, None), "351d57'");
/// assert_eq!(encode(-20.51125, Component::Second, 1, Indicator::None, Some(':')), "-20:30:40.5");
/// ```
pub fn encode(
    angle: f64,
    trailing: Component,
    precision: u32,
    ind: Indicator,
    separator: Option<char>,
) -> String {
    if !angle.is_finite() || ind == Indicator::Number {
        return fixed(angle, precision);
    }

    // 15 - 2 * trailing = ceiling(log10(2^53 / 90 / 60^trailing))
    let trailing_idx = trailing.index() as u32;
    let precision = precision.min(15 - 2 * trailing_idx);

    let angle = if ind == Indicator::Azimuth {
        angle - (angle / FULL_TURN_DEG).floor() * FULL_TURN_DEG
    } else {
        angle
    };

    let is_negative = angle < 0.0;
    let angle = angle.abs();

    let precision_units = 10_u64.pow(precision);
    let trailing_units = 60_u64.pow(trailing_idx) * precision_units;
    let (mut degrees, units) = round_fraction(angle, trailing_units);
    if ind == Indicator::Azimuth && degrees >= FULL_TURN_DEG {
        degrees -= FULL_TURN_DEG;
    }

    let pad: usize = match ind {
        Indicator::Latitude => 2,
        Indicator::Longitude | Indicator::Azimuth => 3,
        _ => 0,
    };

    let mut encoded = String::new();
    if ind == Indicator::None && is_negative {
        encoded.push('-');
    }

    let precision = precision as usize;
    let (tail, fract) = div_mod(units, precision_units);
    match trailing {
        Component::Degree => {
            encoded.push_str(&format!("{:0pad$.0}", degrees));
        }
        Component::Minute => {
            encoded.push_str(&format!("{:0pad$.0}", degrees));
            push_mark(&mut encoded, Component::Degree, separator);
            encoded.push_str(&format!("{tail:02}"));
        }
        Component::Second => {
            let (minutes, seconds) = div_mod(tail, SECONDS_IN_MINUTE as u64);
            encoded.push_str(&format!("{:0pad$.0}", degrees));
            push_mark(&mut encoded, Component::Degree, separator);
            encoded.push_str(&format!("{minutes:02}"));
            push_mark(&mut encoded, Component::Minute, separator);
            encoded.push_str(&format!("{seconds:02}"));
        }
    }

    if precision > 0 {
        encoded.push_str(&format!(".{fract:0precision$}"));
    }

    if trailing != Component::Degree && separator.is_none() {
        encoded.push(trailing.mark());
    }

    let letter_idx = match ind {
        Indicator::Latitude => Some(0),
        Indicator::Longitude => Some(2),
        _ => None,
    };
    if let Some(idx) = letter_idx {
        let idx = idx + usize::from(!is_negative);
        encoded.push(char::from(HEMISPHERES.as_bytes()[idx]));
    }

    encoded
}

/// Convert angle into a DMS string selecting the trailing component
/// based on the precision.
///
/// The `precision` indicates the precision relative to 1 degree,
/// e.g. `precision = 3` gives a result accurate to 0.1' and
/// `precision = 4` gives a result accurate to 1".
/// The `ind` is interpreted as in [`encode`].
///
/// ```
/// # use geod_dms::{encode_with_precision, Indicator};
/// assert_eq!(encode_with_precision(-8.05, 3, Indicator::Latitude, None), "08d03.0'S");
/// assert_eq!(encode_with_precision(12.3456, 2, Indicator::Number, None), "12.35");
/// ```
pub fn encode_with_precision(
    angle: f64,
    precision: u32,
    ind: Indicator,
    separator: Option<char>,
) -> String {
    if ind == Indicator::Number {
        return fixed(angle, precision);
    }

    let (trailing, precision) = match precision {
        0 | 1 => (Component::Degree, precision),
        2 | 3 => (Component::Minute, precision - 2),
        _ => (Component::Second, precision - 4),
    };
    encode(angle, trailing, precision, ind, separator)
}

/// Split angle into degrees and minutes.
///
/// The degrees are truncated towards zero and
/// the minutes keep the sign of the angle.
///
/// ```
/// # use geod_dms::split_dm;
/// assert_eq!(split_dm(4.5), (4.0, 30.0));
/// assert_eq!(split_dm(-4.5), (-4.0, -30.0));
/// ```
pub fn split_dm<T: Float>(angle: T) -> (T, T) {
    let degrees = angle.trunc();
    let minutes = (angle - degrees) * sexagesimal_base();
    (degrees, minutes)
}

/// Split angle into degrees, minutes and seconds.
///
/// The degrees and minutes are truncated towards zero.
pub fn split_dms<T: Float>(angle: T) -> (T, T, T) {
    let (degrees, minutes) = split_dm(angle);
    let (minutes, seconds) = split_dm(minutes);
    (degrees, minutes, seconds)
}

fn sexagesimal_base<T: Float>() -> T {
    T::from(MINUTES_IN_DEGREE).expect("60 is representable by any float")
}

/// Break off the integer part of a non-negative angle and round the fraction
/// to the whole number of the `scale` units (the ties go to even).
/// A carry-over goes to the integer part.
fn round_fraction(angle: f64, scale: u64) -> (f64, u64) {
    let mut degrees = angle.floor();

    let scale_f = scale as f64;
    let scaled = (angle - degrees) * scale_f + 0.5;
    let mut units = scaled.floor();
    if units == scaled && units % 2.0 == 1.0 {
        units -= 1.0;
    }

    let mut units = units as u64;
    if units >= scale {
        degrees += 1.0;
        units -= scale;
    }

    (degrees, units)
}

fn push_mark(encoded: &mut String, component: Component, separator: Option<char>) {
    encoded.push(separator.unwrap_or_else(|| component.mark()));
}

/// Plain number with the `precision` digits after the decimal point
fn fixed(value: f64, precision: u32) -> String {
    if value.is_nan() {
        "nan".into()
    } else if value.is_infinite() {
        let token = if value < 0.0 { "-inf" } else { "inf" };
        token.into()
    } else {
        format!("{:.*}", precision as usize, value)
    }
}
