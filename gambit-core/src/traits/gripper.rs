//! Electromagnet gripper trait

/// Trait for the binary piece gripper
///
/// The physical gripper is an electromagnet under the gantry head,
/// switched through a transistor. Engaging it while the head sits over a
/// square couples the piece's base magnet; disengaging releases it.
pub trait Gripper {
    /// Energize or release the magnet
    fn set_engaged(&mut self, engaged: bool);

    /// Current logical state (true = holding)
    fn is_engaged(&self) -> bool;
}
