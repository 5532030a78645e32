/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// Where ROMs are loaded into memory and where execution begins
pub const PROGRAM_START: u16 = 0x200;

/// The largest ROM that fits between `PROGRAM_START` and the end of memory
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Opcodes are 2 bytes wide; the program counter moves in steps of this size
pub const INSTRUCTION_WIDTH: u16 = 0x2;

/// Return addresses the call stack can hold
pub const STACK_SIZE: usize = 16;

/// Number of keys on the hexadecimal keypad
pub const KEY_COUNT: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;
pub const DISPLAY_SIZE: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;

/// Pixel values written by `Chip8::render` for lit and unlit cells
pub const PIXEL_ON: u32 = 0x00FF_FFFF;
pub const PIXEL_OFF: u32 = 0x0000_0000;

/// Timers count down and the display refreshes at this rate
pub const TIMER_HZ: u32 = 60;

/// Rows in each glyph of the sprite sheet
pub const GLYPH_HEIGHT: u16 = 5;

/// # Sprite Sheet
/// The built-in hexadecimal font, one 5-byte glyph per digit 0..F.
///
/// Each byte is a row of the glyph; only the high nibble is lit.
/// ```text
/// 0xF0 ████
/// 0x90 █  █
/// 0x90 █  █
/// 0x90 █  █
/// 0xF0 ████
/// ```
/// Lives at 0x000..0x050 and is never written after construction.
#[rustfmt::skip]
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
