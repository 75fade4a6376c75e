//! Conversion of captured beat intervals into tempo.

/// Number of capture counter ticks per second.
///
/// The counter runs off a 16 MHz clock source pre-divided by 1024.
pub const TICKS_PER_SECOND: u32 = 15_625;

/// Convert ticks elapsed between two beats into beats per minute.
///
/// The division truncates toward zero. A zero interval yields `None`;
/// with the counter being reset after every capture it should never
/// occur, but it must not bring the display down either.
#[must_use]
pub fn tempo_from_interval(interval_ticks: u32) -> Option<u32> {
    if interval_ticks == 0 {
        return None;
    }
    Some(TICKS_PER_SECOND * 60 / interval_ticks)
}
