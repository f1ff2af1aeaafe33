//! Parse the degree-minute-second notation into signed decimal degrees.
//!
//! Degrees, minutes, and seconds are indicated by the characters `d`, `'`
//! (single quote), `"` (double quote), and these components may only be given
//! in this order. Any (but not all) components may be omitted and the unicode
//! symbols (`°` for degrees, `′` and `″` for minutes and seconds, etc.) may be
//! used instead. The last component indicator may be omitted and is assumed
//! to be the next smallest unit (thus `33d10` is interpreted as `33d10'`).
//!
//! Instead of the marks, the colon can _separate_ the components:
//! `50d30'10.3"` may be written as `50:30:10.3`, `5.5'` as `0:5.5`.
//!
//! Only the final component may be a decimal fraction. The integer parts of
//! the minutes and seconds must be less than 60. A single leading sign
//! and a hemisphere designator (N, E, W, S) at the beginning
//! or at the end of the string are allowed.

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::SplitChar;

use super::{
    consts::{
        DECIMAL_POINT, GLYPHS, HEMISPHERES, MAX_TURN_DEG, MINUTE_MARK, QUARTER_TURN_DEG,
        SECOND_MARK, SEPARATOR, SIGNS,
    },
    dms_to_degrees,
    errors::{Malformation, MalformedInput},
    reduce_half_turn, Component, Indicator,
};

lazy_static! {
    static ref RE_NUMBER: Regex = Regex::new(
        r"(?x)
        ^
        (?P<int>\d*)            # integer part, can be omitted: `.5`
        (?P<fract>\.\d*)?       # fraction, can be empty: `5.`
        $"
    )
    .expect("Number regex is valid");
}

/// Convert a string in the DMS notation into an angle (degrees).
///
/// Along with the angle the presence of a hemisphere designator returned:
/// [`Indicator::Latitude`] if N or S is present, [`Indicator::Longitude`]
/// if E or W is present, and [`Indicator::None`] otherwise.
/// The result is multiplied by the implied sign of the hemisphere designator
/// (negative for S and W). No check is performed on the range of the result.
///
/// ```
/// # use geod_dms::{decode, Indicator};
/// let (angle, ind) = decode("4d0'9E").unwrap();
/// assert!((angle - 4.0025).abs() < 1e-12);
/// assert_eq!(ind, Indicator::Longitude);
///
/// assert!(decode("4d5\"4'").is_err());
/// ```
///
/// # Errors
/// When the string is malformed, the [`MalformedInput`] describes the problem.
pub fn decode(dms: &str) -> Result<(f64, Indicator), MalformedInput> {
    decode_bytes(dms.as_bytes())
}

/// Convert the raw bytes in the DMS notation into an angle (degrees).
///
/// The same as [`decode`], but the Latin-1 variants of the unicode symbols
/// with a leading zero byte (e.g. `0xB0` for U+00B0 degree sign)
/// are also accepted as the single bytes.
///
/// # Errors
/// When the bytes are malformed, the [`MalformedInput`] describes the problem.
pub fn decode_bytes(dms: &[u8]) -> Result<(f64, Indicator), MalformedInput> {
    let normalized = normalize(dms)
        .map_err(|reason| MalformedInput::new(reason, String::from_utf8_lossy(dms)))?;
    let text = normalized.trim();

    if let Some(value) = non_finite(text) {
        return Ok((value, Indicator::None));
    }

    parse_normalized(text).map_err(|reason| MalformedInput::new(reason, text))
}

/// Convert a pair of strings into latitude and longitude.
///
/// By default, the latitude (resp., longitude) is the result of
/// decoding `dmsa` (resp., `dmsb`), or the other way round if `swap_lat_lon`
/// is set. However, the hemisphere designator (N, S, E, W) in any
/// of the strings overrides this.
///
/// The longitude is reduced to the range [-180, 180).
///
/// # Errors
/// - any string is malformed;
/// - both strings are latitudes (or both are longitudes);
/// - latitude is not in [-90, 90];
/// - longitude is not in [-540, 540).
#[allow(clippy::manual_range_contains)]
pub fn decode_lat_lon(
    dmsa: &str,
    dmsb: &str,
    swap_lat_lon: bool,
) -> Result<(f64, f64), MalformedInput> {
    let (a, ind_a) = decode(dmsa)?;
    let (b, ind_b) = decode(dmsb)?;

    let a_is_lat = match (ind_a, ind_b) {
        (Indicator::Latitude, Indicator::Latitude)
        | (Indicator::Longitude, Indicator::Longitude) => {
            return Err(MalformedInput::new(
                Malformation::SameAxis(ind_a),
                format!("{dmsa}, {dmsb}"),
            ));
        }
        (Indicator::Latitude, _) | (_, Indicator::Longitude) => true,
        (Indicator::Longitude, _) | (_, Indicator::Latitude) => false,
        _ => !swap_lat_lon,
    };

    let ((lat, lat_str), (lon, lon_str)) = if a_is_lat {
        ((a, dmsa), (b, dmsb))
    } else {
        ((b, dmsb), (a, dmsa))
    };

    // NaN passes all the range checks
    if lat.abs() > QUARTER_TURN_DEG {
        return Err(MalformedInput::new(
            Malformation::LatitudeRange(lat),
            lat_str,
        ));
    }

    if lon < -MAX_TURN_DEG || lon >= MAX_TURN_DEG {
        return Err(MalformedInput::new(
            Malformation::LongitudeRange(lon),
            lon_str,
        ));
    }

    Ok((lat, reduce_half_turn(lon)))
}

/// Convert a string into an angle in degrees.
///
/// No hemisphere designator is allowed and no check is done
/// on the range of the result.
///
/// # Errors
/// - the string is malformed;
/// - the string includes a hemisphere designator.
pub fn decode_angle(angle: &str) -> Result<f64, MalformedInput> {
    let (value, ind) = decode(angle)?;
    if ind != Indicator::None {
        return Err(MalformedInput::new(
            Malformation::UnexpectedHemisphere,
            angle,
        ));
    }

    Ok(value)
}

/// Convert a string into an azimuth in degrees
/// reduced to the range [-180, 180).
///
/// The hemisphere designator E/W can be used;
/// the result is multiplied by -1 if W is present.
///
/// # Errors
/// - the string is malformed;
/// - the string includes the N/S designator;
/// - the azimuth is not in [-540, 540).
#[allow(clippy::manual_range_contains)]
pub fn decode_azimuth(azimuth: &str) -> Result<f64, MalformedInput> {
    let (value, ind) = decode(azimuth)?;
    if ind == Indicator::Latitude {
        return Err(MalformedInput::new(Malformation::LatitudeAzimuth, azimuth));
    }

    if value < -MAX_TURN_DEG || value >= MAX_TURN_DEG {
        return Err(MalformedInput::new(
            Malformation::AzimuthRange(value),
            azimuth,
        ));
    }

    Ok(reduce_half_turn(value))
}

/// Replace every alias of the unit marks with the canonical ASCII mark.
///
/// Anything non-ASCII left after the replacement is illegal.
fn normalize(dms: &[u8]) -> Result<String, Malformation> {
    let mut normalized = String::with_capacity(dms.len());
    let mut rest = dms;

    'scan: while let Some((&head, tail)) = rest.split_first() {
        for glyph in &GLYPHS {
            if let Some(after) = rest.strip_prefix(glyph.bytes) {
                normalized.push(glyph.mark);
                rest = after;
                continue 'scan;
            }
        }

        if !head.is_ascii() {
            let illegal = String::from_utf8_lossy(rest)
                .chars()
                .next()
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(Malformation::IllegalCharacter(illegal));
        }

        normalized.push(char::from(head));
        rest = tail;
    }

    // two consecutive minute marks mean seconds
    let double_minute: String = [MINUTE_MARK, MINUTE_MARK].iter().collect();
    Ok(normalized.replace(&double_minute, &SECOND_MARK.to_string()))
}

/// The not-a-number and the infinities with an optional sign
fn non_finite(text: &str) -> Option<f64> {
    let (sign_mul, rest) = match text.split_first_char() {
        Some((head, rest)) => sign(head).map_or((1.0, text), |s| (s, rest)),
        None => return None,
    };

    let rest = rest.to_ascii_lowercase();
    match rest.as_str() {
        "nan" => Some(f64::NAN),
        "inf" | "infinity" => Some(sign_mul * f64::INFINITY),
        _ => None,
    }
}

fn hemisphere(ch: char) -> Option<(Indicator, f64)> {
    let k = HEMISPHERES.find(ch.to_ascii_uppercase())?;
    let ind = if k / 2 == 0 {
        Indicator::Latitude
    } else {
        Indicator::Longitude
    };
    let sign = if k % 2 == 0 { -1.0 } else { 1.0 };
    Some((ind, sign))
}

fn sign(ch: char) -> Option<f64> {
    SIGNS
        .find(ch)
        .map(|k| if k == 0 { -1.0 } else { 1.0 })
}

fn is_unit_mark(ch: char) -> bool {
    Component::from_mark(ch).is_some()
}

/// Validate the trimmed and normalized string stage by stage.
/// The first violated rule is reported.
fn parse_normalized(text: &str) -> Result<(f64, Indicator), Malformation> {
    let mut body = text;
    let mut sign_mul = 1.0;
    let mut ind = Indicator::None;

    let mut leading = None;
    if let Some((head, rest)) = body.split_first_char() {
        if let Some((head_ind, head_sign)) = hemisphere(head) {
            ind = head_ind;
            sign_mul = head_sign;
            leading = Some(head);
            body = rest;
        }
    }

    if let Some((rest, tail)) = body.split_last_char() {
        if let Some((tail_ind, tail_sign)) = hemisphere(tail) {
            if let Some(head) = leading {
                return Err(if head.eq_ignore_ascii_case(&tail) {
                    Malformation::RepeatedHemisphere(tail)
                } else {
                    Malformation::ContradictoryHemispheres(head, tail)
                });
            }
            ind = tail_ind;
            sign_mul = tail_sign;
            body = rest;
        }
    }

    if let Some((head, rest)) = body.split_first_char() {
        if let Some(explicit) = sign(head) {
            sign_mul *= explicit;
            body = rest;

            if let Some((next, _)) = body.split_first_char() {
                if hemisphere(next).is_some() {
                    return Err(Malformation::HemisphereAfterSign(next));
                }
            }
        }
    }

    if body.is_empty() {
        return Err(Malformation::Empty);
    }

    let is_legal = |ch: char| {
        ch.is_ascii_digit() || ch == DECIMAL_POINT || ch == SEPARATOR || is_unit_mark(ch)
    };
    if let Some(bad) = body.chars().find(|&ch| !is_legal(ch)) {
        return Err(if sign(bad).is_some() {
            Malformation::InternalSign
        } else {
            Malformation::IllegalCharacter(bad)
        });
    }

    let pieces = if body.contains(SEPARATOR) {
        if body.contains(is_unit_mark) {
            return Err(Malformation::MixedDelimiters);
        }
        split_separated(body)?
    } else {
        split_marked(body)?
    };

    let mut values = [0.0; 3];
    let last = pieces.len() - 1;
    for (i, &(unit, number)) in pieces.iter().enumerate() {
        values[unit.index()] = parse_number(number, unit, i == last)?;
    }

    // 59.999999... is accepted even though it rounds to 60
    for unit in [Component::Minute, Component::Second] {
        let value = values[unit.index()];
        if value.floor() >= 60.0 {
            return Err(Malformation::ComponentRange(unit, value));
        }
    }

    let [degrees, minutes, seconds] = values;
    Ok((sign_mul * dms_to_degrees(degrees, minutes, seconds), ind))
}

/// `20:30:40.5`
fn split_separated(body: &str) -> Result<Vec<(Component, &str)>, Malformation> {
    let fields: Vec<_> = body.split(SEPARATOR).collect();
    if fields.len() > Component::ALL.len() {
        return Err(Malformation::TooManyComponents);
    }

    fields
        .into_iter()
        .zip(Component::ALL)
        .map(|(field, unit)| {
            if field.is_empty() {
                Err(Malformation::EmptyComponent(unit))
            } else {
                Ok((unit, field))
            }
        })
        .collect()
}

/// `20d30'40.5"`, `20d30.675`, `4d9"`
fn split_marked(body: &str) -> Result<Vec<(Component, &str)>, Malformation> {
    let mut pieces: Vec<(Component, &str)> = Vec::with_capacity(Component::ALL.len());
    let mut start = 0;

    for (pos, ch) in body.char_indices() {
        let unit = match Component::from_mark(ch) {
            Some(unit) => unit,
            None => continue,
        };

        if let Some(&(prev, _)) = pieces.last() {
            if unit == prev {
                return Err(Malformation::RepeatedComponent(unit));
            }
            if unit < prev {
                return Err(Malformation::ComponentOrder(unit, prev));
            }
        }

        let number = &body[start..pos];
        if number.is_empty() {
            return Err(Malformation::MissingNumber(unit));
        }

        pieces.push((unit, number));
        start = pos + ch.len_utf8();
    }

    let trailing = &body[start..];
    if !trailing.is_empty() {
        // the omitted mark is the next smallest unit
        let unit = match pieces.last() {
            Some(&(prev, _)) => prev.smaller().ok_or(Malformation::ExtraTextAfterSeconds)?,
            None => Component::Degree,
        };
        pieces.push((unit, trailing));
    }

    Ok(pieces)
}

fn parse_number(number: &str, unit: Component, is_final: bool) -> Result<f64, Malformation> {
    let capture = RE_NUMBER
        .captures(number)
        .ok_or(Malformation::MultipleDecimalPoints(unit))?;

    let int = capture.name("int").map_or("", |m| m.as_str());
    let fract = capture.name("fract").map(|m| m.as_str());

    let fract_digits = fract.map_or(0, |f| f.len() - 1);
    if int.is_empty() && fract_digits == 0 {
        return Err(Malformation::MissingNumber(unit));
    }

    if fract.is_some() && !is_final {
        return Err(Malformation::NonFinalFraction(unit));
    }

    Ok(number.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "{} is not close to {}",
            actual,
            expected
        );
    }

    fn reason(s: &str) -> Malformation {
        decode(s).unwrap_err().reason().clone()
    }

    #[test]
    fn equivalent_negative_notations() {
        for s in [
            "-20.51125",
            "-20°30'40.5",
            "-20d30.675",
            "-20:30:40.5",
            "-20d30'40.5\"",
        ] {
            let (angle, ind) = decode(s).unwrap();
            assert_close(angle, -20.51125);
            assert_eq!(ind, Indicator::None, "{}", s);
        }
    }

    #[test]
    fn equivalent_latitude_notations() {
        for s in ["20d30'40.5\"S", "N-20d30'40.5\"", "S20:30:40.5", "s20d30.675"] {
            let (angle, ind) = decode(s).unwrap();
            assert_close(angle, -20.51125);
            assert_eq!(ind, Indicator::Latitude, "{}", s);
        }
    }

    #[test]
    fn equivalent_positive_notations() {
        for s in [
            "4d0'9", "4d9\"", "4d9''", "4:0:9", "004:00:09", "4.0025", "4.0025d", "4d0.15",
            "04:.15", "+4d0'9\"", "4D0'9",
        ] {
            let (angle, ind) = decode(s).unwrap();
            assert_close(angle, 4.0025);
            assert_eq!(ind, Indicator::None, "{}", s);
        }
    }

    #[test]
    fn illegal_notations() {
        for s in [
            "4d5\"4'", "4::5", "4:5:", ":4:5", "4d4.5'4\"", "-N20.5", "1.8e2d", "4:60", "4d-5'",
        ] {
            assert!(decode(s).is_err(), "{} should fail", s);
        }
    }

    #[test]
    fn longitude_designator() {
        let (angle, ind) = decode("W30d15'").unwrap();
        assert_close(angle, -30.25);
        assert_eq!(ind, Indicator::Longitude);

        let (angle, ind) = decode("30d15'e").unwrap();
        assert_close(angle, 30.25);
        assert_eq!(ind, Indicator::Longitude);
    }

    #[test]
    fn sign_and_designator_multiply() {
        let (angle, ind) = decode("S-10").unwrap();
        assert_close(angle, 10.0);
        assert_eq!(ind, Indicator::Latitude);

        let (angle, _) = decode("W+10").unwrap();
        assert_close(angle, -10.0);
    }

    #[test]
    fn surrounding_whitespace() {
        let (angle, ind) = decode("  \t12d30'N ").unwrap();
        assert_close(angle, 12.5);
        assert_eq!(ind, Indicator::Latitude);
    }

    #[test]
    fn unicode_degree_aliases() {
        for s in ["20°30'", "20º30'", "20⁰30'", "20˚30'", "20D30'", "20d30"] {
            let (angle, _) = decode(s).unwrap();
            assert_close(angle, 20.5);
        }
    }

    #[test]
    fn unicode_minute_aliases() {
        for s in ["0d30′", "0d30´", "0d30’", "0d30'"] {
            let (angle, _) = decode(s).unwrap();
            assert_close(angle, 0.5);
        }
    }

    #[test]
    fn unicode_second_aliases() {
        for s in ["0d0'36″", "0d0'36”", "0d0'36\"", "0d0'36''", "0d0'36′′", "0d0'36´´"] {
            let (angle, _) = decode(s).unwrap();
            assert_close(angle, 0.01);
        }
    }

    #[test]
    fn single_byte_aliases() {
        let (angle, _) = decode_bytes(b"20\xb030\xb4").unwrap();
        assert_close(angle, 20.5);

        let (angle, _) = decode_bytes(b"20\xba30").unwrap();
        assert_close(angle, 20.5);
    }

    #[test]
    fn utf8_bytes() {
        let (angle, ind) = decode_bytes("20°30′40.5″S".as_bytes()).unwrap();
        assert_close(angle, -20.51125);
        assert_eq!(ind, Indicator::Latitude);
    }

    #[test]
    fn single_byte_not_an_alias() {
        let err = decode_bytes(b"20\xff").unwrap_err();
        assert_eq!(
            err.reason(),
            &Malformation::IllegalCharacter(char::REPLACEMENT_CHARACTER)
        );
    }

    #[test]
    fn bare_degrees() {
        let (angle, ind) = decode("123").unwrap();
        assert_close(angle, 123.0);
        assert_eq!(ind, Indicator::None);

        let (angle, _) = decode("-0.5").unwrap();
        assert_close(angle, -0.5);

        let (angle, _) = decode("5.").unwrap();
        assert_close(angle, 5.0);
    }

    #[test]
    fn no_range_check() {
        let (angle, _) = decode("1000d59'").unwrap();
        assert_close(angle, 1000.0 + 59.0 / 60.0);
    }

    #[test]
    fn minutes_almost_60() {
        let (angle, _) = decode("0d59.9999").unwrap();
        assert_close(angle, 59.9999 / 60.0);
    }

    #[test]
    fn not_a_number() {
        let (angle, ind) = decode("nan").unwrap();
        assert!(angle.is_nan());
        assert_eq!(ind, Indicator::None);
    }

    #[test]
    fn infinities() {
        assert_eq!(decode("inf").unwrap().0, f64::INFINITY);
        assert_eq!(decode("-Inf").unwrap().0, f64::NEG_INFINITY);
        assert_eq!(decode("+infinity").unwrap().0, f64::INFINITY);
    }

    #[test]
    fn reversed_components() {
        assert_eq!(
            reason("4d5\"4'"),
            Malformation::ComponentOrder(Component::Minute, Component::Second)
        );
    }

    #[test]
    fn repeated_components() {
        assert_eq!(
            reason("4d5'6'"),
            Malformation::RepeatedComponent(Component::Minute)
        );
        assert_eq!(
            reason("4d5d"),
            Malformation::RepeatedComponent(Component::Degree)
        );
    }

    #[test]
    fn empty_fields() {
        assert_eq!(
            reason("4::5"),
            Malformation::EmptyComponent(Component::Minute)
        );
        assert_eq!(
            reason("4:5:"),
            Malformation::EmptyComponent(Component::Second)
        );
        assert_eq!(
            reason(":4:5"),
            Malformation::EmptyComponent(Component::Degree)
        );
    }

    #[test]
    #[should_panic(expected = "TooManyComponents")]
    fn too_many_fields() {
        let _ = decode("1:2:3:4").unwrap();
    }

    #[test]
    #[should_panic(expected = "NonFinalFraction(Minute)")]
    fn fraction_in_the_middle() {
        let _ = decode("4d4.5'4\"").unwrap();
    }

    #[test]
    #[should_panic(expected = "NonFinalFraction(Degree)")]
    fn fraction_before_colon() {
        let _ = decode("4.5:30").unwrap();
    }

    #[test]
    #[should_panic(expected = "HemisphereAfterSign('N')")]
    fn sign_before_hemisphere() {
        let _ = decode("-N20.5").unwrap();
    }

    #[test]
    #[should_panic(expected = "IllegalCharacter('e')")]
    fn exponent() {
        let _ = decode("1.8e2d").unwrap();
    }

    #[test]
    #[should_panic(expected = "ComponentRange(Minute, 60.0)")]
    fn minutes_60() {
        let _ = decode("4:60").unwrap();
    }

    #[test]
    #[should_panic(expected = "ComponentRange(Second, 75.5)")]
    fn seconds_75() {
        let _ = decode("4d10'75.5\"").unwrap();
    }

    #[test]
    #[should_panic(expected = "InternalSign")]
    fn sign_inside() {
        let _ = decode("4d-5'").unwrap();
    }

    #[test]
    #[should_panic(expected = "MixedDelimiters")]
    fn colon_and_marks() {
        let _ = decode("4d5:6").unwrap();
    }

    #[test]
    #[should_panic(expected = "ExtraTextAfterSeconds")]
    fn after_seconds() {
        let _ = decode("4d5'6\"7").unwrap();
    }

    #[test]
    #[should_panic(expected = "MultipleDecimalPoints(Degree)")]
    fn two_points() {
        let _ = decode("4.5.6").unwrap();
    }

    #[test]
    fn missing_numbers() {
        assert_eq!(reason("d"), Malformation::MissingNumber(Component::Degree));
        assert_eq!(
            reason("4d'"),
            Malformation::MissingNumber(Component::Minute)
        );
        assert_eq!(
            reason("4d."),
            Malformation::MissingNumber(Component::Minute)
        );
    }

    #[test]
    fn hemispheres_at_both_ends() {
        assert_eq!(reason("N20N"), Malformation::RepeatedHemisphere('N'));
        assert_eq!(reason("n20N"), Malformation::RepeatedHemisphere('N'));
        assert_eq!(
            reason("N20E"),
            Malformation::ContradictoryHemispheres('N', 'E')
        );
    }

    #[test]
    fn hemisphere_inside() {
        assert_eq!(reason("20N30"), Malformation::IllegalCharacter('N'));
    }

    #[test]
    fn empty() {
        assert_eq!(reason(""), Malformation::Empty);
        assert_eq!(reason("   "), Malformation::Empty);
        assert_eq!(reason("N"), Malformation::Empty);
        assert_eq!(reason("-"), Malformation::Empty);
        assert_eq!(reason("S+"), Malformation::Empty);
    }

    #[test]
    fn space_inside() {
        assert_eq!(reason("20d 30'"), Malformation::IllegalCharacter(' '));
    }

    #[test]
    fn error_keeps_normalized_input() {
        let err = decode(" 20°30′4° ").unwrap_err();
        assert_eq!(err.input(), "20d30'4d");
    }

    #[test]
    fn lat_lon_with_designators() {
        assert_eq!(decode_lat_lon("N20", "E30", false).unwrap(), (20.0, 30.0));
        assert_eq!(decode_lat_lon("E30", "N20", false).unwrap(), (20.0, 30.0));
        assert_eq!(decode_lat_lon("30W", "20", false).unwrap(), (20.0, -30.0));
        assert_eq!(decode_lat_lon("30", "20S", true).unwrap(), (-20.0, 30.0));
    }

    #[test]
    fn lat_lon_designator_overrides_swap() {
        assert_eq!(decode_lat_lon("N20", "30", true).unwrap(), (20.0, 30.0));
    }

    #[test]
    fn lat_lon_default_order() {
        assert_eq!(decode_lat_lon("20", "30", false).unwrap(), (20.0, 30.0));
        assert_eq!(decode_lat_lon("20", "30", true).unwrap(), (30.0, 20.0));
    }

    #[test]
    fn lat_lon_reduces_longitude() {
        assert_eq!(decode_lat_lon("10", "200", false).unwrap(), (10.0, -160.0));
        assert_eq!(decode_lat_lon("10", "180", false).unwrap(), (10.0, -180.0));
        assert_eq!(decode_lat_lon("10", "-540", false).unwrap(), (10.0, -180.0));
    }

    #[test]
    fn lat_lon_poles() {
        assert_eq!(decode_lat_lon("90", "0", false).unwrap(), (90.0, 0.0));
        assert_eq!(decode_lat_lon("S90", "0", false).unwrap(), (-90.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "LatitudeRange(90.5)")]
    fn lat_too_big() {
        let _ = decode_lat_lon("90d30'", "0", false).unwrap();
    }

    #[test]
    #[should_panic(expected = "LatitudeRange(-91.0)")]
    fn lat_too_small() {
        let _ = decode_lat_lon("0", "91S", false).unwrap();
    }

    #[test]
    #[should_panic(expected = "LongitudeRange(540.0)")]
    fn lon_too_big() {
        let _ = decode_lat_lon("0", "540", false).unwrap();
    }

    #[test]
    fn nan_lat_lon() {
        let (lat, lon) = decode_lat_lon("nan", "nan", false).unwrap();
        assert!(lat.is_nan());
        assert!(lon.is_nan());

        let (lat, lon) = decode_lat_lon("10E", "NaN", false).unwrap();
        assert!(lat.is_nan());
        assert_close(lon, 10.0);
    }

    #[test]
    #[should_panic(expected = "LatitudeRange(-inf)")]
    fn infinite_lat() {
        let _ = decode_lat_lon("-inf", "0", false).unwrap();
    }

    #[test]
    #[should_panic(expected = "SameAxis(Latitude)")]
    fn both_latitudes() {
        let _ = decode_lat_lon("N1", "S2", false).unwrap();
    }

    #[test]
    #[should_panic(expected = "SameAxis(Longitude)")]
    fn both_longitudes() {
        let _ = decode_lat_lon("1E", "2W", false).unwrap();
    }

    #[test]
    fn lat_lon_propagates_malformed() {
        let err = decode_lat_lon("20", "4::5", false).unwrap_err();
        assert_eq!(
            err.reason(),
            &Malformation::EmptyComponent(Component::Minute)
        );
    }

    #[test]
    fn plain_angle() {
        assert_close(decode_angle("-10d30'").unwrap(), -10.5);
        assert_close(decode_angle("725").unwrap(), 725.0);
    }

    #[test]
    #[should_panic(expected = "UnexpectedHemisphere")]
    fn plain_angle_with_hemisphere() {
        let _ = decode_angle("N10").unwrap();
    }

    #[test]
    fn azimuths() {
        assert_close(decode_azimuth("30").unwrap(), 30.0);
        assert_close(decode_azimuth("W30").unwrap(), -30.0);
        assert_close(decode_azimuth("30E").unwrap(), 30.0);
        assert_close(decode_azimuth("350").unwrap(), -10.0);
        assert_close(decode_azimuth("-540").unwrap(), -180.0);
        assert_close(decode_azimuth("539d30'").unwrap(), 179.5);
    }

    #[test]
    fn nan_azimuth() {
        assert!(decode_azimuth("nan").unwrap().is_nan());
    }

    #[test]
    #[should_panic(expected = "LatitudeAzimuth")]
    fn azimuth_with_latitude() {
        let _ = decode_azimuth("S30").unwrap();
    }

    #[test]
    #[should_panic(expected = "AzimuthRange(540.0)")]
    fn azimuth_too_big() {
        let _ = decode_azimuth("540").unwrap();
    }

    #[test]
    #[should_panic(expected = "AzimuthRange(-541.0)")]
    fn azimuth_too_small() {
        let _ = decode_azimuth("541W").unwrap();
    }
}
