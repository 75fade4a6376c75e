use takt_control::output::DesiredOutput;

use crate::system::hal::gpio;

/// Segment patterns of decimal digits, with segment A in the most
/// significant bit, down through G to the decimal point in the least.
const PATTERNS: [u8; 10] = [
    0xFC, // 0
    0x60, // 1
    0xDA, // 2
    0xF2, // 3
    0x66, // 4
    0xB6, // 5
    0xBE, // 6
    0xE0, // 7
    0xFE, // 8
    0xF6, // 9
];

/// Driver of the 3-digit 7-segment display.
///
/// Digit positions share the segment lines. Select lines are active
/// low, one position at a time.
pub struct SevenSegment {
    pins: Pins,
}

pub struct Pins {
    pub select: (Select1Pin, Select2Pin, Select3Pin),
    pub segment: (
        SegmentAPin,
        SegmentBPin,
        SegmentCPin,
        SegmentDPin,
        SegmentEPin,
        SegmentFPin,
        SegmentGPin,
        SegmentDpPin,
    ),
}

type Select1Pin = gpio::gpiob::PB0<gpio::Output>;
type Select2Pin = gpio::gpiob::PB1<gpio::Output>;
type Select3Pin = gpio::gpiob::PB2<gpio::Output>;
type SegmentAPin = gpio::gpioc::PC0<gpio::Output>;
type SegmentBPin = gpio::gpioc::PC1<gpio::Output>;
type SegmentCPin = gpio::gpioc::PC2<gpio::Output>;
type SegmentDPin = gpio::gpioc::PC3<gpio::Output>;
type SegmentEPin = gpio::gpioc::PC4<gpio::Output>;
type SegmentFPin = gpio::gpioc::PC5<gpio::Output>;
type SegmentGPin = gpio::gpioc::PC6<gpio::Output>;
type SegmentDpPin = gpio::gpioc::PC7<gpio::Output>;

impl SevenSegment {
    #[must_use]
    pub fn new(mut pins: Pins) -> Self {
        // All positions released until the first frame is driven.
        pins.select.0.set_high();
        pins.select.1.set_high();
        pins.select.2.set_high();
        Self { pins }
    }

    pub fn set(&mut self, desired: &DesiredOutput) {
        self.pins.select.0.set_state((!desired.select[0]).into());
        self.pins.select.1.set_state((!desired.select[1]).into());
        self.pins.select.2.set_state((!desired.select[2]).into());

        let pattern = PATTERNS[usize::from(desired.digit)];
        self.pins.segment.0.set_state((pattern & 0x80 != 0).into());
        self.pins.segment.1.set_state((pattern & 0x40 != 0).into());
        self.pins.segment.2.set_state((pattern & 0x20 != 0).into());
        self.pins.segment.3.set_state((pattern & 0x10 != 0).into());
        self.pins.segment.4.set_state((pattern & 0x08 != 0).into());
        self.pins.segment.5.set_state((pattern & 0x04 != 0).into());
        self.pins.segment.6.set_state((pattern & 0x02 != 0).into());
        self.pins.segment.7.set_state((pattern & 0x01 != 0).into());
    }
}
