//! edge_detector.rs — report each button press exactly once
//!
//! Polled from the control loop, one call per iteration. A press is reported
//! on the first sample at the active level, and the button must be seen
//! released before it can be reported again. There is no time-based filter:
//! bounce that is sampled as released in between two active samples counts
//! as two presses.

use embedded_hal::digital::InputPin;

use crate::{Button, ButtonConfig, ButtonError};

/// Latch position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LatchState {
    /// Waiting for a press.
    #[default]
    Armed,
    /// Press reported, waiting for release.
    Held,
}

/// Two-state edge latch over already-sampled levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeLatch {
    state: LatchState,
}

impl EdgeLatch {
    pub const fn new() -> Self {
        Self {
            state: LatchState::Armed,
        }
    }

    /// Feeds one sample. Returns true only on the Armed -> Held transition.
    pub fn update(&mut self, pressed: bool) -> bool {
        match (self.state, pressed) {
            (LatchState::Armed, true) => {
                self.state = LatchState::Held;
                true
            }
            (LatchState::Held, false) => {
                self.state = LatchState::Armed;
                false
            }
            _ => false,
        }
    }

    pub fn state(&self) -> LatchState {
        self.state
    }

    /// True while a reported press has not been released yet.
    pub fn is_latched(&self) -> bool {
        self.state == LatchState::Held
    }
}

/// Edge-triggered pushbutton.
///
/// Owns the pin for its whole life and only reads it. Not meant to be shared:
/// polling from several contexts needs external serialization.
pub struct EdgeDetector<P> {
    button: Button<P>,
    latch: EdgeLatch,
}

impl<P> EdgeDetector<P>
where
    P: InputPin,
{
    /// Active-low detector, starts armed.
    /// Caller must configure the pin as pull-up input before polling.
    pub fn new(pin: P) -> Self {
        Self::with_config(pin, ButtonConfig::default())
    }

    pub fn with_config(pin: P, config: ButtonConfig) -> Self {
        Self {
            button: Button::with_config(pin, config),
            latch: EdgeLatch::new(),
        }
    }

    /// Polls the pin once. True exactly on the poll where a new press shows up.
    ///
    /// A failed read is skipped: returns false and leaves the latch alone.
    pub fn status(&mut self) -> bool {
        self.try_status().unwrap_or(false)
    }

    /// Same as [`status`](Self::status) but surfaces pin read faults.
    /// The latch only moves on a successful read.
    pub fn try_status(&mut self) -> Result<bool, ButtonError> {
        let pressed = match self.button.try_is_pressed() {
            Ok(pressed) => pressed,
            Err(err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("button read failed: {}", err);
                return Err(err);
            }
        };

        #[cfg(feature = "defmt")]
        let was_latched = self.latch.is_latched();
        let triggered = self.latch.update(pressed);

        #[cfg(feature = "defmt")]
        if triggered {
            defmt::trace!("button pressed");
        } else if was_latched && !self.latch.is_latched() {
            defmt::trace!("button released, re-armed");
        }

        Ok(triggered)
    }

    pub fn is_latched(&self) -> bool {
        self.latch.is_latched()
    }

    pub fn state(&self) -> LatchState {
        self.latch.state()
    }

    /// Gives the pin back.
    pub fn free(self) -> P {
        self.button.free()
    }
}
