pub(super) const MINUTES_IN_DEGREE: f64 = 60.0;
pub(super) const SECONDS_IN_MINUTE: f64 = 60.0;

pub(super) const HALF_TURN_DEG: f64 = 180.0;
pub(super) const FULL_TURN_DEG: f64 = 2.0 * HALF_TURN_DEG;
pub(super) const QUARTER_TURN_DEG: f64 = HALF_TURN_DEG / 2.0;
// longitudes and azimuths are accepted in [-540, 540)
pub(super) const MAX_TURN_DEG: f64 = 3.0 * HALF_TURN_DEG;

/// Negative and positive letter for latitudes, then for longitudes
pub(super) const HEMISPHERES: &str = "SNWE";
/// Negative then positive
pub(super) const SIGNS: &str = "-+";

pub(super) const DEGREE_MARK: char = 'd';
pub(super) const MINUTE_MARK: char = '\'';
pub(super) const SECOND_MARK: char = '"';
pub(super) const SEPARATOR: char = ':';
pub(super) const DECIMAL_POINT: char = '.';

/// Byte sequence standing for one of the canonical unit marks
#[derive(Debug, Copy, Clone)]
pub(super) struct Glyph {
    pub(super) bytes: &'static [u8],
    pub(super) mark: char,
}

/// Every accepted alias of the unit marks.
///
/// Multi-byte UTF-8 sequences go first, so that the single Latin-1 bytes
/// are only matched where they stand on their own.
pub(super) const GLYPHS: [Glyph; 14] = [
    // U+00B0 degree sign
    Glyph {
        bytes: &[0xc2, 0xb0],
        mark: DEGREE_MARK,
    },
    // U+00BA masculine ordinal indicator
    Glyph {
        bytes: &[0xc2, 0xba],
        mark: DEGREE_MARK,
    },
    // U+2070 superscript zero
    Glyph {
        bytes: &[0xe2, 0x81, 0xb0],
        mark: DEGREE_MARK,
    },
    // U+02DA ring above
    Glyph {
        bytes: &[0xcb, 0x9a],
        mark: DEGREE_MARK,
    },
    // U+2032 prime
    Glyph {
        bytes: &[0xe2, 0x80, 0xb2],
        mark: MINUTE_MARK,
    },
    // U+00B4 acute accent
    Glyph {
        bytes: &[0xc2, 0xb4],
        mark: MINUTE_MARK,
    },
    // U+2019 right single quote
    Glyph {
        bytes: &[0xe2, 0x80, 0x99],
        mark: MINUTE_MARK,
    },
    // U+2033 double prime
    Glyph {
        bytes: &[0xe2, 0x80, 0xb3],
        mark: SECOND_MARK,
    },
    // U+201D right double quote
    Glyph {
        bytes: &[0xe2, 0x80, 0x9d],
        mark: SECOND_MARK,
    },
    // Latin-1 degree sign
    Glyph {
        bytes: &[0xb0],
        mark: DEGREE_MARK,
    },
    // Latin-1 masculine ordinal indicator
    Glyph {
        bytes: &[0xba],
        mark: DEGREE_MARK,
    },
    // Latin-1 acute accent
    Glyph {
        bytes: &[0xb4],
        mark: MINUTE_MARK,
    },
    Glyph {
        bytes: b"D",
        mark: DEGREE_MARK,
    },
    Glyph {
        bytes: b"d",
        mark: DEGREE_MARK,
    },
];
