use rand::{Rng, RngCore};

use crate::error::Error;
use crate::keypad::Keypad;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// Every instruction the interpreter understands, named by what it does.
///
/// The comment on each variant is the opcode pattern that selects it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0`
    Clear,
    /// `00EE`
    Return,
    /// `1nnn`
    Jump,
    /// `2nnn`
    Call,
    /// `3xkk`
    SkipEqualByte,
    /// `4xkk`
    SkipNotEqualByte,
    /// `5xy0`
    SkipEqualReg,
    /// `6xkk`
    LoadByte,
    /// `7xkk`
    AddByte,
    /// `8xy0`
    Move,
    /// `8xy1`
    Or,
    /// `8xy2`
    And,
    /// `8xy3`
    Xor,
    /// `8xy4`
    AddReg,
    /// `8xy5`
    Sub,
    /// `8xy6`
    ShiftRight,
    /// `8xy7`
    SubReverse,
    /// `8xyE`
    ShiftLeft,
    /// `9xy0`
    SkipNotEqualReg,
    /// `Annn`
    LoadIndex,
    /// `Bnnn`
    JumpOffset,
    /// `Cxkk`
    Random,
    /// `Dxyn`
    Draw,
    /// `Ex9E`
    SkipKeyPressed,
    /// `ExA1`
    SkipKeyReleased,
    /// `Fx07`
    LoadDelay,
    /// `Fx0A`
    WaitKey,
    /// `Fx15`
    SetDelay,
    /// `Fx18`
    SetSound,
    /// `Fx1E`
    AddIndex,
    /// `Fx29`
    LoadGlyph,
    /// `Fx33`
    StoreBcd,
    /// `Fx55`
    StoreRegisters,
    /// `Fx65`
    LoadRegisters,
}

impl Instruction {
    /// Selects the Instruction registered for a masked opcode
    /// See `Opcode::generic` for how opcodes are masked
    pub fn from_generic(generic: u16) -> Option<Instruction> {
        use Instruction::*;

        let instruction = match generic {
            0x00E0 => Clear,
            0x00EE => Return,
            0x1000 => Jump,
            0x2000 => Call,
            0x3000 => SkipEqualByte,
            0x4000 => SkipNotEqualByte,
            0x5000 => SkipEqualReg,
            0x6000 => LoadByte,
            0x7000 => AddByte,
            0x8000 => Move,
            0x8001 => Or,
            0x8002 => And,
            0x8003 => Xor,
            0x8004 => AddReg,
            0x8005 => Sub,
            0x8006 => ShiftRight,
            0x8007 => SubReverse,
            0x800E => ShiftLeft,
            0x9000 => SkipNotEqualReg,
            0xA000 => LoadIndex,
            0xB000 => JumpOffset,
            0xC000 => Random,
            0xD000 => Draw,
            0xE09E => SkipKeyPressed,
            0xE0A1 => SkipKeyReleased,
            0xF007 => LoadDelay,
            0xF00A => WaitKey,
            0xF015 => SetDelay,
            0xF018 => SetSound,
            0xF01E => AddIndex,
            0xF029 => LoadGlyph,
            0xF033 => StoreBcd,
            0xF055 => StoreRegisters,
            0xF065 => LoadRegisters,
            _ => return None,
        };
        Some(instruction)
    }

    /// Decodes the opcode fetched from `pc`
    pub fn decode(op: u16, pc: u16) -> Result<Instruction, Error> {
        Instruction::from_generic(op.generic()).ok_or(Error::UnknownOpcode { opcode: op, pc })
    }

    /// Runs the instruction against `state` and returns the state that follows it.
    ///
    /// `state` itself is left untouched, so an instruction that fails has no
    /// visible effect at all.
    pub fn execute(
        self,
        op: u16,
        state: &State,
        keypad: &Keypad,
        rng: &mut dyn RngCore,
    ) -> Result<State, Error> {
        use Instruction::*;

        let op: &dyn Opcode = &op;
        let next = match self {
            Clear => clr(op, state),
            Return => rts(op, state)?,
            Jump => jump(op, state),
            Call => call(op, state)?,
            SkipEqualByte => ske(op, state),
            SkipNotEqualByte => skne(op, state),
            SkipEqualReg => skre(op, state),
            LoadByte => load(op, state),
            AddByte => add(op, state),
            Move => mv(op, state),
            Or => or(op, state),
            And => and(op, state),
            Xor => xor(op, state),
            AddReg => addr(op, state),
            Sub => sub(op, state),
            ShiftRight => shr(op, state),
            SubReverse => subn(op, state),
            ShiftLeft => shl(op, state),
            SkipNotEqualReg => skrne(op, state),
            LoadIndex => loadi(op, state),
            JumpOffset => jumpi(op, state),
            Random => rand(op, state, rng.gen()),
            Draw => draw(op, state)?,
            SkipKeyPressed => skpr(op, state, keypad),
            SkipKeyReleased => skup(op, state, keypad),
            LoadDelay => moved(op, state),
            WaitKey => keyd(op, state, keypad),
            SetDelay => loads(op, state),
            SetSound => ld(op, state),
            AddIndex => addi(op, state),
            LoadGlyph => ldspr(op, state),
            StoreBcd => bcd(op, state)?,
            StoreRegisters => stor(op, state)?,
            LoadRegisters => read(op, state)?,
        };
        Ok(next)
    }
}
