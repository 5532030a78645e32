/// # Opcodes
///
/// Chip-8 opcodes are 16 bits each. Their behavior is cased on some combination of:
/// - `(n, _, _, _)` broad categorization; applies to all opcodes
/// - `(_, _, _, n)` specific behavior within a category
/// - `(_, _, n, n)` more specific behavior within a category
/// - `(_, n, n, n)` some fixed function that doesn't require variables (e.g. CLS; clear screen)
///
/// Nibbles not used to determine the operation often (but not always) carry important data.
/// - `(_, n, n, n)` represent a 12-bit address
/// - `(_, _, n, n)` encodes some data that is assigned to and/or compared with Vx
/// - `(_, n, _, _)` refers either to the register Vx or a range of registers V0..Vx
/// - `(_, _, n, _)` refers to the the register Vy
pub trait Opcode {
    /// The Opcode's most significant nibble.
    /// `[f___]`
    fn family(&self) -> u8;

    /// The Opcode's second nibble.
    /// `[_x__]`
    fn x(&self) -> usize;

    /// The Opcode's third nibble.
    /// `[__y_]`
    fn y(&self) -> usize;

    /// The Opcode's fourth nibble.
    /// `[___n]`
    fn n(&self) -> u8;

    /// The Opcode's least significant byte.
    /// `[__kk]`
    fn kk(&self) -> u8;

    /// The Opcode's without its most significant nibble.
    /// `[_nnn]`
    fn nnn(&self) -> u16;

    /// The Opcode with its operand bits masked off.
    ///
    /// Each family keeps only the bits that select an operation within it:
    /// - `0x0___` keeps the low byte (`00E0`, `00EE`)
    /// - `0x8___` keeps the family and the low nibble (`8xy0`..`8xyE`)
    /// - `0xE___` and `0xF___` keep the family and the low byte (`Ex9E`, `Fx07`, ...)
    /// - every other family is identified by its top nibble alone
    fn generic(&self) -> u16;
}

impl Opcode for u16 {
    fn family(&self) -> u8 {
        ((self & 0xF000) >> 12) as u8
    }

    fn x(&self) -> usize {
        ((self & 0x0F00) >> 8) as usize
    }

    fn y(&self) -> usize {
        ((self & 0x00F0) >> 4) as usize
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn kk(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn nnn(&self) -> u16 {
        self & 0x0FFF
    }

    fn generic(&self) -> u16 {
        match self.family() {
            0x0 => self & 0x00FF,
            0x8 => self & 0xF00F,
            0xE | 0xF => self & 0xF0FF,
            _ => self & 0xF000,
        }
    }
}

#[cfg(test)]
mod test_opcode {
    use super::*;

    #[test]
    fn test_family() {
        let op: u16 = 0xABCD;
        assert_eq!(op.family(), 0xA);
    }

    #[test]
    fn test_x() {
        let op: u16 = 0xABCD;
        assert_eq!(op.x(), 0xB);
    }

    #[test]
    fn test_y() {
        let op: u16 = 0xABCD;
        assert_eq!(op.y(), 0xC);
    }

    #[test]
    fn test_n() {
        let op: u16 = 0xABCD;
        assert_eq!(op.n(), 0xD);
    }

    #[test]
    fn test_kk() {
        let op: u16 = 0xABCD;
        assert_eq!(op.kk(), 0xCD);
    }

    #[test]
    fn test_nnn() {
        let op: u16 = 0xABCD;
        assert_eq!(op.nnn(), 0x0BCD);
    }

    #[test]
    fn test_generic_system_family_keeps_low_byte() {
        assert_eq!(0x00E0u16.generic(), 0x00E0);
        assert_eq!(0x0AEEu16.generic(), 0x00EE);
    }

    #[test]
    fn test_generic_alu_family_keeps_low_nibble() {
        assert_eq!(0x8AB4u16.generic(), 0x8004);
        assert_eq!(0x812Eu16.generic(), 0x800E);
    }

    #[test]
    fn test_generic_key_and_misc_families_keep_low_byte() {
        assert_eq!(0xE19Eu16.generic(), 0xE09E);
        assert_eq!(0xFA65u16.generic(), 0xF065);
    }

    #[test]
    fn test_generic_other_families_keep_top_nibble() {
        assert_eq!(0x1ABCu16.generic(), 0x1000);
        assert_eq!(0x5121u16.generic(), 0x5000);
        assert_eq!(0xDABCu16.generic(), 0xD000);
    }
}
