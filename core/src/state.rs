use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET, STACK_SIZE,
};

/// A snapshot of the Chip-8 machine state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) doubles as the carry, borrow and collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) an 8-bit stack pointer
///     - points at the most recently pushed return address
///     - slot 0 is never written so 0 means "no active call"
///
/// Timers
/// - 2 8-bit timers (delay & sound)
/// - both count down once per external tick, never below 0
///
/// ## Memory
/// - 16 slot stack of return addresses
/// - 4096 bytes of addressable memory
///     - 0x000..0x050 holds the sprite sheet
///     - 0x200.. holds the loaded ROM
/// - 32x64 frame buffer
///
/// ## Input
/// - `awaiting_key` names the register a blocked `Fx0A` will write to
#[derive(Copy, Clone)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_SIZE],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub awaiting_key: Option<usize>,
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        memory[0..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_SIZE],
            memory,
            frame_buffer: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            awaiting_key: None,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        State::new()
    }
}

/// The FrameBuffer is indexed as [y][x]; each cell is 0 or 1
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_starts_at_program() {
        let state = State::new();
        assert_eq!(state.pc, 0x200);
        assert_eq!(state.sp, 0);
        assert_eq!(state.awaiting_key, None);
    }

    #[test]
    fn test_state_holds_sprite_sheet() {
        let state = State::new();
        assert_eq!(state.memory[0..80], SPRITE_SHEET[..]);
        assert!(state.memory[80..].iter().all(|&b| b == 0));
    }
}
