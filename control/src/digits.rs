//! Decomposition of the displayed value into its digit places.

/// Split a value into its hundreds, tens and ones places.
///
/// The caller keeps the value under 1000, each returned place is then a
/// single decimal digit.
#[must_use]
pub fn split(value: u16) -> [u8; 3] {
    [
        (value / 100) as u8,
        (value % 100 / 10) as u8,
        (value % 10) as u8,
    ]
}
