//! GPIO pin abstraction
//!
//! Infallible pin traits shared by the drivers in this crate. The
//! firmware implements them over its HAL's GPIO types; tests implement
//! them over plain booleans.

/// Trait for GPIO output pin abstraction
pub trait OutputPin {
    /// Set the pin high
    fn set_high(&mut self);

    /// Set the pin low
    fn set_low(&mut self);
}

/// Trait for GPIO input pin abstraction
pub trait InputPin {
    /// Check if the pin reads high
    fn is_high(&self) -> bool;
}
