use crate::system::hal::gpio;

pub struct StatusLed {
    pin: Pin,
}

pub type Pin = gpio::gpioe::PE3<gpio::Output>;

impl StatusLed {
    #[must_use]
    pub fn new(pin: Pin) -> Self {
        Self { pin }
    }

    pub fn on(&mut self) {
        self.pin.set_high();
    }

    pub fn off(&mut self) {
        self.pin.set_low();
    }
}
