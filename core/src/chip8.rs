use std::io::Read;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::constants::{
    DISPLAY_SIZE, INSTRUCTION_WIDTH, MAX_ROM_SIZE, MEMORY_SIZE, PIXEL_OFF, PIXEL_ON,
    PROGRAM_START,
};
use crate::error::Error;
use crate::instruction::Instruction;
use crate::keypad::Keypad;
use crate::state::{FrameBuffer, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the `keypad`, which only the host writes to
///  - the `rng` that feeds `Cxkk`
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU one instruction at a time
/// - advancing its timers
/// - rendering its frame buffer into a pixel buffer owned by some display
pub struct Chip8 {
    state: State,
    keypad: Keypad,
    rng: Box<dyn RngCore>,
}

impl Chip8 {
    /// A machine whose random numbers come from the operating system
    pub fn new() -> Self {
        Chip8::with_rng(StdRng::from_entropy())
    }

    /// A machine whose random numbers are reproducible from `seed`
    pub fn with_seed(seed: u64) -> Self {
        Chip8::with_rng(StdRng::seed_from_u64(seed))
    }

    /// A machine drawing its random numbers from `rng`
    pub fn with_rng(rng: impl RngCore + 'static) -> Self {
        Chip8 {
            state: State::new(),
            keypad: Keypad::new(),
            rng: Box::new(rng),
        }
    }

    /// Copy a rom into memory at `PROGRAM_START`
    ///
    /// Memory is left untouched if the rom doesn't fit.
    ///
    /// # Arguments
    /// * `rom` the program's bytes
    pub fn load(&mut self, rom: &[u8]) -> Result<(), Error> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Error::RomTooLarge {
                size: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }
        let start = PROGRAM_START as usize;
        self.state.memory[start..start + rom.len()].copy_from_slice(rom);
        log::debug!("loaded {} byte ROM at {:#05X}", rom.len(), start);
        Ok(())
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        let mut rom = Vec::with_capacity(MAX_ROM_SIZE);
        reader.read_to_end(&mut rom)?;
        self.load(&rom)
    }

    /// Advances the CPU by a single cycle
    /// - fetches the opcode the pc points at
    /// - decodes it into an Instruction
    /// - executes it, committing the resulting state only if it succeeds
    pub fn step(&mut self) -> Result<Instruction, Error> {
        let op = self.get_op()?;
        let instruction = Instruction::decode(op, self.state.pc)?;
        log::trace!("{:#05X}: {:04X} {:?}", self.state.pc, op, instruction);
        self.state = instruction.execute(op, &self.state, &self.keypad, self.rng.as_mut())?;
        Ok(instruction)
    }

    /// Moves the pc past the current instruction without executing it
    ///
    /// Lets a host carry on after `step` reports an unknown opcode.
    pub fn skip_instruction(&mut self) {
        self.state.pc = self.state.pc.wrapping_add(INSTRUCTION_WIDTH);
    }

    /// Decrements both timers by one, stopping at zero
    /// Called by the host once per tick of its clock
    pub fn advance_timers(&mut self) {
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
    }

    /// Set the pressed status of a key
    ///
    /// # Arguments
    /// * `key` the keypad index, 0x0..0xF
    /// * `pressed` whether the key is now held down
    pub fn set_key(&mut self, key: u8, pressed: bool) -> Result<(), Error> {
        self.keypad.set(key, pressed)
    }

    pub fn is_key_pressed(&self, key: u8) -> bool {
        self.keypad.is_pressed(key as usize)
    }

    /// Writes one pixel per frame buffer cell into `pixels`, row by row.
    ///
    /// # Arguments
    /// * `pixels` a buffer of exactly `DISPLAY_WIDTH * DISPLAY_HEIGHT` pixels
    pub fn render(&self, pixels: &mut [u32]) -> Result<(), Error> {
        if pixels.len() != DISPLAY_SIZE {
            return Err(Error::PixelBufferSize {
                expected: DISPLAY_SIZE,
                actual: pixels.len(),
            });
        }
        let cells = self.state.frame_buffer.iter().flat_map(|row| row.iter());
        for (pixel, &cell) in pixels.iter_mut().zip(cells) {
            *pixel = if cell == 0 { PIXEL_OFF } else { PIXEL_ON };
        }
        Ok(())
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.sound_timer
    }

    /// Whether an audio device should currently be sounding a tone
    pub fn is_sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    /// The register a blocked `Fx0A` is waiting to fill, if any
    pub fn awaiting_key(&self) -> Option<usize> {
        self.state.awaiting_key
    }

    /// Gets the opcode currently pointed at by the pc.
    ///
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&self) -> Result<u16, Error> {
        let pc = self.state.pc as usize;
        if pc + 1 >= MEMORY_SIZE {
            return Err(Error::MemoryOutOfRange {
                address: pc.max(MEMORY_SIZE),
            });
        }
        let left = u16::from(self.state.memory[pc]);
        let right = u16::from(self.state.memory[pc + 1]);
        Ok(left << 8 | right)
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Chip8::new()
    }
}
