use crate::system::capture::BeatCapture;

pub fn wait_until_beat_is_tapped(capture: &mut BeatCapture) {
    while !capture.captured() {
        cortex_m::asm::delay(400_000_000 / 1000);
    }
    capture.clear_interrupt();
}
