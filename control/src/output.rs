/// Desired state of output peripherals.
///
/// This structure transfers request to the firmware, asking to drive a
/// single digit position of the display for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DesiredOutput {
    /// One-hot selection of the active digit position, left to right.
    pub select: [bool; 3],
    /// Decimal digit to show on the selected position.
    pub digit: u8,
}
