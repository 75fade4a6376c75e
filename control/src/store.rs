//! Central store tying the beat pipeline to the display.

use crate::display::Display;
use crate::log;
use crate::output::DesiredOutput;
use crate::smoother::TempoSmoother;
use crate::tempo;

/// The main store of the module's state.
///
/// The firmware feeds captured beat intervals in through `apply_beat`
/// and pulls one display frame per refresh cycle through `tick`. The
/// beat path is the sole writer of the displayed value, the refresh
/// path only reads it, which keeps the handoff between the two
/// execution contexts explicit.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    smoother: TempoSmoother,
    display: Display,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one captured beat interval.
    ///
    /// Returns the newly displayed tempo, or `None` when the sample was
    /// discarded as a zero interval or an out-of-range tempo. Discarded
    /// samples leave the display unchanged.
    pub fn apply_beat(&mut self, interval_ticks: u32) -> Option<u16> {
        let tempo = tempo::tempo_from_interval(interval_ticks)?;
        let displayed = self.smoother.observe(tempo)?;
        self.display.set_value(displayed);
        log::info!("Displaying tempo: {=u16}", displayed);
        Some(displayed)
    }

    /// Advance the display multiplexer by one digit position.
    pub fn tick(&mut self) -> DesiredOutput {
        self.display.next_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_digits(store: &mut Store) -> [u8; 3] {
        let mut digits = [0; 3];
        for digit in &mut digits {
            *digit = store.tick().digit;
        }
        digits
    }

    #[test]
    fn it_should_be_possible_to_initialize_store() {
        let _store = Store::new();
    }

    #[test]
    fn before_the_first_beat_it_displays_zero() {
        let mut store = Store::new();
        assert_eq!(frame_digits(&mut store), [0, 0, 0]);
    }

    #[test]
    fn when_beats_arrive_once_a_second_it_displays_60_bpm() {
        let mut store = Store::new();
        assert_eq!(store.apply_beat(15_625), Some(60));
        assert_eq!(store.apply_beat(15_625), Some(60));
        assert_eq!(frame_digits(&mut store), [0, 6, 0]);
    }

    #[test]
    fn when_tempo_changes_it_displays_average_of_last_two_beats() {
        let mut store = Store::new();
        // Two beats at 200 BPM pass the warm-up.
        store.apply_beat(4_687);
        store.apply_beat(4_687);
        // One at 210 BPM.
        assert_eq!(store.apply_beat(4_464), Some(205));
        assert_eq!(frame_digits(&mut store), [2, 0, 5]);
    }

    #[test]
    fn when_interval_is_out_of_range_it_keeps_the_last_reading() {
        let mut store = Store::new();
        store.apply_beat(4_687);
        store.apply_beat(4_687);
        // 30 BPM, below the valid range.
        assert_eq!(store.apply_beat(31_250), None);
        assert_eq!(frame_digits(&mut store), [2, 0, 0]);
    }

    #[test]
    fn when_interval_is_zero_it_discards_the_beat() {
        let mut store = Store::new();
        store.apply_beat(15_625);
        assert_eq!(store.apply_beat(0), None);
        assert_eq!(frame_digits(&mut store), [0, 6, 0]);
    }
}
