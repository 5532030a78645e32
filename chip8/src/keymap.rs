use sdl2::keyboard::Keycode;

/// # Keymap
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// This original layout is mapped to the left 4 alphanumeric columns.
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
/// The remaining number keys are aliases for the digits they show.
pub fn keymap(key: Keycode) -> Option<u8> {
    match key {
        Keycode::X | Keycode::Num0 => Some(0x0),
        Keycode::Num1 => Some(0x1),
        Keycode::Num2 => Some(0x2),
        Keycode::Num3 => Some(0x3),
        Keycode::Q => Some(0x4),
        Keycode::W | Keycode::Num5 => Some(0x5),
        Keycode::E | Keycode::Num6 => Some(0x6),
        Keycode::A | Keycode::Num7 => Some(0x7),
        Keycode::S | Keycode::Num8 => Some(0x8),
        Keycode::D | Keycode::Num9 => Some(0x9),
        Keycode::Z => Some(0xA),
        Keycode::C => Some(0xB),
        Keycode::Num4 => Some(0xC),
        Keycode::R => Some(0xD),
        Keycode::F => Some(0xE),
        Keycode::V => Some(0xF),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_keypad_corners() {
        assert_eq!(keymap(Keycode::Num1), Some(0x1));
        assert_eq!(keymap(Keycode::Num4), Some(0xC));
        assert_eq!(keymap(Keycode::Z), Some(0xA));
        assert_eq!(keymap(Keycode::V), Some(0xF));
    }

    #[test]
    fn test_number_aliases() {
        assert_eq!(keymap(Keycode::Num0), keymap(Keycode::X));
        assert_eq!(keymap(Keycode::Num5), keymap(Keycode::W));
        assert_eq!(keymap(Keycode::Num9), keymap(Keycode::D));
    }

    #[test]
    fn test_ignores_unmapped_keys() {
        assert_eq!(keymap(Keycode::Escape), None);
        assert_eq!(keymap(Keycode::P), None);
    }
}
