//! Smoothing of the measured tempo over recent beats.

use crate::log;

/// Tempo outside of this range is considered a spurious trigger.
pub const TEMPO_RANGE: (u32, u32) = (40, 999);

/// Number of initial beats reported verbatim, without averaging.
const WARM_UP_BEATS: u32 = 2;

/// Stabilize the displayed tempo against small timing variance.
///
/// Keeps the last two accepted tempos and reports their average, so the
/// reading does not swing with every small error the player makes. Two
/// samples are enough to settle the value while still adapting quickly
/// to a deliberate tempo change. For the first two beats the raw tempo
/// is reported, so the display reacts right after power-up.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TempoSmoother {
    history: [u16; 2],
    beats: u32,
}

impl TempoSmoother {
    /// Feed one measured tempo into the smoother.
    ///
    /// Returns the new value to display. An out-of-range tempo yields
    /// `None` and leaves the history and the beat count untouched.
    pub fn observe(&mut self, tempo: u32) -> Option<u16> {
        if tempo < TEMPO_RANGE.0 || tempo > TEMPO_RANGE.1 {
            log::info!("Rejecting out-of-range tempo: {=u32}", tempo);
            return None;
        }

        let tempo = tempo as u16;
        self.history[(self.beats % 2) as usize] = tempo;

        let displayed = if self.beats < WARM_UP_BEATS {
            tempo
        } else {
            (self.history[0] + self.history[1]) / 2
        };

        // Wrapping keeps the parity index alternating across the overflow.
        self.beats = self.beats.wrapping_add(1);
        Some(displayed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_fed_first_two_beats_it_reports_them_verbatim() {
        let mut smoother = TempoSmoother::default();
        assert_eq!(smoother.observe(120), Some(120));
        assert_eq!(smoother.observe(100), Some(100));
    }

    #[test]
    fn when_warmed_up_it_reports_average_of_last_two_beats() {
        let mut smoother = TempoSmoother::default();
        smoother.observe(120);
        smoother.observe(100);
        assert_eq!(smoother.observe(120), Some(110));
        assert_eq!(smoother.observe(140), Some(130));
    }

    #[test]
    fn when_average_is_fractional_it_floors() {
        let mut smoother = TempoSmoother::default();
        smoother.observe(101);
        smoother.observe(100);
        assert_eq!(smoother.observe(101), Some(100));
    }

    #[test]
    fn when_fed_same_tempo_repeatedly_it_converges_to_it() {
        let mut smoother = TempoSmoother::default();
        smoother.observe(120);
        smoother.observe(100);
        smoother.observe(90);
        assert_eq!(smoother.observe(90), Some(90));
    }

    #[test]
    fn when_fed_out_of_range_tempo_it_keeps_state_untouched() {
        let mut smoother = TempoSmoother::default();
        smoother.observe(200);
        smoother.observe(200);
        assert_eq!(smoother.observe(30), None);
        assert_eq!(smoother.observe(1000), None);
        assert_eq!(smoother.observe(210), Some(205));
    }

    #[test]
    fn it_accepts_tempo_on_range_bounds() {
        let mut smoother = TempoSmoother::default();
        assert_eq!(smoother.observe(40), Some(40));
        assert_eq!(smoother.observe(999), Some(999));
    }

    #[test]
    fn it_rejects_tempo_just_outside_range_bounds() {
        let mut smoother = TempoSmoother::default();
        assert_eq!(smoother.observe(39), None);
        assert_eq!(smoother.observe(1000), None);
    }
}
