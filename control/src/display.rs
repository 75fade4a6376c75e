//! State machine multiplexing the displayed value over digit positions.

use crate::digits;
use crate::output::DesiredOutput;

/// Cycle a 3-digit value over the display, one position per frame.
///
/// Only one digit position is driven at a time. Cycling through them
/// fast enough makes all three appear lit at once. Every call of
/// `next_frame` emits the frame for the current position and moves to
/// the next one, wrapping after the ones place.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Display {
    places: [u8; 3],
    cursor: usize,
}

impl Display {
    pub fn set_value(&mut self, value: u16) {
        self.places = digits::split(value);
    }

    pub fn next_frame(&mut self) -> DesiredOutput {
        let mut select = [false; 3];
        select[self.cursor] = true;
        let frame = DesiredOutput {
            select,
            digit: self.places[self.cursor],
        };
        self.cursor = (self.cursor + 1) % self.places.len();
        frame
    }
}
