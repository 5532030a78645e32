use crate::constants::KEY_COUNT;
use crate::error::Error;

/// # Keypad
/// The 16 keys of the hexadecimal keypad, 0x0..0xF.
///
/// Only the host writes to it; instructions only read it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Keypad {
    pressed: [bool; KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Keypad::default()
    }

    /// Set the pressed status of a key
    ///
    /// # Arguments
    /// * `key` the keypad index, 0x0..0xF
    /// * `pressed` whether the key is now held down
    pub fn set(&mut self, key: u8, pressed: bool) -> Result<(), Error> {
        let slot = self
            .pressed
            .get_mut(key as usize)
            .ok_or(Error::InvalidKey(key))?;
        *slot = pressed;
        Ok(())
    }

    /// Whether a key is held down; indices off the keypad are never pressed
    pub fn is_pressed(&self, key: usize) -> bool {
        self.pressed.get(key).copied().unwrap_or(false)
    }

    /// The highest-numbered key currently held down, if any
    pub fn last_pressed(&self) -> Option<usize> {
        self.pressed.iter().rposition(|&pressed| pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_start_released() {
        let keypad = Keypad::new();
        assert!((0..KEY_COUNT).all(|key| !keypad.is_pressed(key)));
        assert_eq!(keypad.last_pressed(), None);
    }

    #[test]
    fn test_press_and_release() {
        let mut keypad = Keypad::new();
        keypad.set(0xA, true).unwrap();
        assert!(keypad.is_pressed(0xA));
        keypad.set(0xA, false).unwrap();
        assert!(!keypad.is_pressed(0xA));
    }

    #[test]
    fn test_rejects_keys_off_the_pad() {
        let mut keypad = Keypad::new();
        assert!(matches!(keypad.set(0x10, true), Err(Error::InvalidKey(0x10))));
        assert!(!keypad.is_pressed(0x10));
    }

    #[test]
    fn test_last_pressed_prefers_highest_key() {
        let mut keypad = Keypad::new();
        keypad.set(0x3, true).unwrap();
        keypad.set(0xC, true).unwrap();
        assert_eq!(keypad.last_pressed(), Some(0xC));
    }
}
