//! Beat input through the timer's capture feature.

use takt_control::tempo::TICKS_PER_SECOND;

use crate::system::hal::gpio;
use crate::system::hal::pac;
use crate::system::hal::rcc;

/// Timer measuring the interval between two taps.
///
/// TIM2 runs as a free-running counter prescaled down to
/// `TICKS_PER_SECOND`. Channel 1 captures the counter on every rising
/// edge of the trigger line, with the input filter enabled to reject
/// contact noise. The handler reads the captured value and resets the
/// counter, so every capture measures from the previous beat.
pub struct BeatCapture {
    tim: pac::TIM2,
    _pin: Pin,
}

pub type Pin = gpio::gpioa::PA0<gpio::Alternate<1>>;

impl BeatCapture {
    #[must_use]
    pub fn new(tim: pac::TIM2, pin: Pin, rec: rcc::rec::Tim2, clocks: &rcc::CoreClocks) -> Self {
        let _ = rec.enable().reset();

        let prescaler = clocks.timx_ker_ck().raw() / TICKS_PER_SECOND - 1;
        tim.psc.write(|w| unsafe { w.psc().bits(prescaler as u16) });

        // Channel 1 capturing TI1, with a moderate input filter.
        tim.ccmr1_input()
            .modify(|_, w| unsafe { w.cc1s().bits(0b01).ic1f().bits(0b0011) });
        // Rising edge.
        tim.ccer
            .modify(|_, w| w.cc1p().clear_bit().cc1np().clear_bit().cc1e().set_bit());
        tim.dier.modify(|_, w| w.cc1ie().set_bit());
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Self { tim, _pin: pin }
    }

    /// Read the captured interval and restart measurement from zero.
    pub fn interval(&mut self) -> u32 {
        let interval = self.tim.ccr1.read().bits();
        self.tim.cnt.reset();
        interval
    }

    pub fn captured(&self) -> bool {
        self.tim.sr.read().cc1if().bit_is_set()
    }

    pub fn clear_interrupt(&mut self) {
        self.tim.sr.modify(|_, w| w.cc1if().clear_bit());
    }
}
