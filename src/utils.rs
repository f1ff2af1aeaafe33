//! Utilities functions which do not linked to domain

use std::ops::{Div, Rem};

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Split the string slice by its first or last character
pub(crate) trait SplitChar<'a> {
    /// Split into the first character and the rest of the string
    fn split_first_char(self) -> Option<(char, &'a str)>;
    /// Split into the last character and the rest of the string
    fn split_last_char(self) -> Option<(&'a str, char)>;
}

impl<'a> SplitChar<'a> for &'a str {
    fn split_first_char(self) -> Option<(char, &'a str)> {
        let mut chars = self.chars();
        chars.next().map(|head| (head, chars.as_str()))
    }

    fn split_last_char(self) -> Option<(&'a str, char)> {
        let mut chars = self.chars();
        chars.next_back().map(|tail| (chars.as_str(), tail))
    }
}

/// Division and remainder in one step
pub fn div_mod<T>(divider: T, divisor: T) -> (T, T)
where
    T: Copy + Div<Output = T> + Rem<Output = T>,
{
    (divider / divisor, divider % divisor)
}
