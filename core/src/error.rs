use std::io;

use thiserror::Error;

/// Everything that can go wrong while loading or running a program.
///
/// None of these abort the process; the caller of `Chip8::step` or
/// `Chip8::load_rom` decides whether to halt, skip or carry on.
#[derive(Debug, Error)]
pub enum Error {
    /// The masked opcode has no instruction registered for it
    #[error("unknown opcode {opcode:#06X} at {pc:#05X}")]
    UnknownOpcode { opcode: u16, pc: u16 },

    #[error("ROM is {size} bytes but at most {max} fit in memory")]
    RomTooLarge { size: usize, max: usize },

    #[error("unable to read ROM: {0}")]
    RomUnreadable(#[from] io::Error),

    /// A call was made with every stack slot in use
    #[error("stack overflow calling from {pc:#05X}")]
    StackOverflow { pc: u16 },

    /// A return was made without an active call
    #[error("stack underflow returning from {pc:#05X}")]
    StackUnderflow { pc: u16 },

    /// An instruction fetch or memory access ran off the end of memory
    #[error("memory access out of range at {address:#06X}")]
    MemoryOutOfRange { address: usize },

    #[error("key {0:#X} is not on the keypad")]
    InvalidKey(u8),

    #[error("pixel buffer holds {actual} pixels but the display has {expected}")]
    PixelBufferSize { expected: usize, actual: usize },
}
