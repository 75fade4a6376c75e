pub mod capture;
pub mod display;
pub mod led;

pub use stm32h7xx_hal as hal;

use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::prelude::*;
use systick_monotonic::Systick;

use capture::BeatCapture;
use display::{Pins as DisplayPins, SevenSegment};
use led::StatusLed;

pub struct System {
    pub mono: Systick<1000>,
    pub status_led: StatusLed,
    pub capture: BeatCapture,
    pub display: SevenSegment,
}

impl System {
    /// Initialize system abstraction
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let pwrcfg = dp.PWR.constrain().freeze();
        let ccdr = dp
            .RCC
            .constrain()
            .sys_ck(400.MHz())
            .freeze(pwrcfg, &dp.SYSCFG);

        let mono = Systick::new(cp.SYST, 400_000_000);

        let gpioa = dp.GPIOA.split(ccdr.peripheral.GPIOA);
        let gpiob = dp.GPIOB.split(ccdr.peripheral.GPIOB);
        let gpioc = dp.GPIOC.split(ccdr.peripheral.GPIOC);
        let gpioe = dp.GPIOE.split(ccdr.peripheral.GPIOE);

        let capture = BeatCapture::new(
            dp.TIM2,
            gpioa.pa0.into_alternate(),
            ccdr.peripheral.TIM2,
            &ccdr.clocks,
        );

        let display = SevenSegment::new(DisplayPins {
            select: (
                gpiob.pb0.into_push_pull_output(),
                gpiob.pb1.into_push_pull_output(),
                gpiob.pb2.into_push_pull_output(),
            ),
            segment: (
                gpioc.pc0.into_push_pull_output(),
                gpioc.pc1.into_push_pull_output(),
                gpioc.pc2.into_push_pull_output(),
                gpioc.pc3.into_push_pull_output(),
                gpioc.pc4.into_push_pull_output(),
                gpioc.pc5.into_push_pull_output(),
                gpioc.pc6.into_push_pull_output(),
                gpioc.pc7.into_push_pull_output(),
            ),
        });

        let status_led = StatusLed::new(gpioe.pe3.into_push_pull_output());

        Self {
            mono,
            status_led,
            capture,
            display,
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data from internal memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
