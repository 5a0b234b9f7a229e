//! button.rs — GPIO pushbutton level reader
use embedded_hal::digital::InputPin;

/// Electrical level that means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Button connects the line to GND, pull-up holds it high when released.
    #[default]
    Low,
    /// Button connects the line to VCC, pull-down holds it low when released.
    High,
}

/// Button wiring configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Level read while the button is held down
    pub active_level: ActiveLevel,
}

impl ButtonConfig {
    /// Pull-up input, button to GND (active-low).
    pub const fn pull_up() -> Self {
        Self {
            active_level: ActiveLevel::Low,
        }
    }

    /// Pull-down input, button to VCC (active-high).
    pub const fn pull_down() -> Self {
        Self {
            active_level: ActiveLevel::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonError {
    #[error("Failed to read button pin level")]
    Read,
}

/// Button driver over any embedded-hal input pin.
pub struct Button<P> {
    pin: P,
    config: ButtonConfig,
}

impl<P> Button<P>
where
    P: InputPin,
{
    /// Create a new active-low button wrapper.
    /// Caller must configure the pin as pull-up input before calling this.
    pub fn new(pin: P) -> Self {
        Self::with_config(pin, ButtonConfig::default())
    }

    /// Create a button wrapper with explicit wiring.
    /// Pin direction and pulls are still the caller's job.
    pub fn with_config(pin: P, config: ButtonConfig) -> Self {
        Self { pin, config }
    }

    /// Samples the pin once and reports whether it sits at the active level.
    pub fn try_is_pressed(&mut self) -> Result<bool, ButtonError> {
        let pressed = match self.config.active_level {
            ActiveLevel::Low => self.pin.is_low(),
            ActiveLevel::High => self.pin.is_high(),
        };
        pressed.map_err(|_| ButtonError::Read)
    }

    /// Returns true if the button is currently pressed.
    /// A failed read counts as not pressed.
    pub fn is_pressed(&mut self) -> bool {
        self.try_is_pressed().unwrap_or(false)
    }

    /// Returns true if the button is NOT pressed.
    pub fn is_released(&mut self) -> bool {
        !self.is_pressed()
    }

    pub fn active_level(&self) -> ActiveLevel {
        self.config.active_level
    }

    /// Gives the pin back.
    pub fn free(self) -> P {
        self.pin
    }
}
