#![no_main]
#![no_std]

use takt_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI0, EXTI1, EXTI2])]
mod app {
    use fugit::ExtU64;
    use systick_monotonic::Systick;

    use takt_control::store::Store;
    use takt_firmware::system::capture::BeatCapture;
    use takt_firmware::system::display::SevenSegment;
    use takt_firmware::system::led::StatusLed;
    use takt_firmware::system::System;

    /// How long every digit position stays lit. 7 ms per digit blends
    /// the three positions into a steady reading without visible
    /// flicker.
    const DIGIT_DWELL_MS: u64 = 7;

    const BLINKS: u8 = 1;

    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>; // 1 kHz / 1 ms granularity

    #[shared]
    struct Shared {
        store: Store,
    }

    #[local]
    struct Local {
        status_led: StatusLed,
        capture: BeatCapture,
        display: SevenSegment,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);
        let mono = system.mono;
        let status_led = system.status_led;
        let capture = system.capture;
        let display = system.display;

        refresh::spawn().unwrap();
        blink::spawn(true, BLINKS).unwrap();

        (
            Shared {
                store: Store::new(),
            },
            Local {
                status_led,
                capture,
                display,
            },
            init::Monotonics(mono),
        )
    }

    #[task(binds = TIM2, local = [capture], priority = 3)]
    fn capture(cx: capture::Context) {
        let capture = cx.local.capture;
        capture.clear_interrupt();
        let interval = capture.interval();
        if beat::spawn(interval).is_err() {
            defmt::warn!("Previous beat is still being processed, dropping this one");
        }
    }

    #[task(shared = [store], priority = 2, capacity = 1)]
    fn beat(mut cx: beat::Context, interval: u32) {
        cx.shared.store.lock(|store| {
            store.apply_beat(interval);
        });
    }

    #[task(shared = [store], local = [display], priority = 1)]
    fn refresh(mut cx: refresh::Context) {
        let desired = cx.shared.store.lock(Store::tick);
        cx.local.display.set(&desired);
        refresh::spawn_after(DIGIT_DWELL_MS.millis()).unwrap();
    }

    #[task(local = [status_led])]
    fn blink(cx: blink::Context, on: bool, blinks: u8) {
        let time_on = 200.millis();
        let time_off_short = 200.millis();
        let time_off_long = 2.secs();

        if on {
            cx.local.status_led.on();
            blink::spawn_after(time_on, false, blinks).unwrap();
        } else {
            cx.local.status_led.off();
            if blinks > 1 {
                blink::spawn_after(time_off_short, true, blinks - 1).unwrap();
            } else {
                blink::spawn_after(time_off_long, true, BLINKS).unwrap();
            }
        }
    }
}
