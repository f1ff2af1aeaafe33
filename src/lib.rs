//! Conversion between the degree-minute-second (DMS) notation and decimal degrees.
//!
//! The decoder understands many hand-written variants of the notation:
//!
//! ```
//! use geod_dms::{decode, Indicator};
//!
//! for s in ["-20.51125", "20d30'40.5\"S", "-20°30′40.5", "N-20d30'40.5\"", "-20:30:40.5"] {
//!     let (angle, _) = decode(s).unwrap();
//!     assert!((angle + 20.51125).abs() < 1e-12);
//! }
//!
//! let (_, ind) = decode("20d30'40.5\"S").unwrap();
//! assert_eq!(ind, Indicator::Latitude);
//! ```
//!
//! and the encoder produces the conventional surveyor notation:
//!
//! ```
//! use geod_dms::{encode, encode_with_precision, Component, Indicator};
//!
//! assert_eq!(encode(-8.05, Component::Minute, 0, Indicator::None, None), "-8d03'");
//! assert_eq!(encode_with_precision(-8.05, 2, Indicator::Longitude, None), "008d03'W");
//! ```

// The list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
// recommendations
#![forbid(unsafe_code)]
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]
#![allow(clippy::cast_possible_truncation)]

pub use dms::{
    decode::{decode, decode_angle, decode_azimuth, decode_bytes, decode_lat_lon},
    dms_to_degrees,
    encode::{encode, encode_with_precision, split_dm, split_dms},
    errors::{Malformation, MalformedInput},
    Component, Indicator,
};

mod dms;
mod utils;
