use std::ops::Range;

use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_SIZE, DISPLAY_WIDTH, GLYPH_HEIGHT, INSTRUCTION_WIDTH, MEMORY_SIZE,
    STACK_SIZE,
};
use crate::error::Error;
use crate::keypad::Keypad;
use crate::opcode::Opcode;
use crate::state::State;

/// The address of the instruction after the current one
fn next(state: &State) -> u16 {
    state.pc.wrapping_add(INSTRUCTION_WIDTH)
}

/// The address to continue at; skips the next instruction if `condition` holds
fn skip_if(condition: bool, state: &State) -> u16 {
    if condition {
        next(state).wrapping_add(INSTRUCTION_WIDTH)
    } else {
        next(state)
    }
}

/// The memory range `start..start + len`, if it lies entirely within memory
fn span(start: u16, len: usize) -> Result<Range<usize>, Error> {
    let start = start as usize;
    let end = start + len;
    if end > MEMORY_SIZE {
        return Err(Error::MemoryOutOfRange {
            address: start.max(MEMORY_SIZE),
        });
    }
    Ok(start..end)
}

/// clear
pub fn clr(_op: &dyn Opcode, state: &State) -> State {
    State {
        pc: next(state),
        frame_buffer: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        ..*state
    }
}

/// PC = STACK.pop()
pub fn rts(_op: &dyn Opcode, state: &State) -> Result<State, Error> {
    if state.sp == 0 {
        return Err(Error::StackUnderflow { pc: state.pc });
    }
    log::debug!("return to {:#05X}", state.stack[state.sp as usize]);
    Ok(State {
        pc: state.stack[state.sp as usize].wrapping_add(INSTRUCTION_WIDTH),
        sp: state.sp - 0x1,
        ..*state
    })
}

/// PC = addr
pub fn jump(op: &dyn Opcode, state: &State) -> State {
    State {
        pc: op.nnn(),
        ..*state
    }
}

/// STACK.push(PC); PC = addr
pub fn call(op: &dyn Opcode, state: &State) -> Result<State, Error> {
    if state.sp as usize >= STACK_SIZE - 1 {
        return Err(Error::StackOverflow { pc: state.pc });
    }
    let sp = state.sp + 0x1;
    let mut stack = state.stack;
    stack[sp as usize] = state.pc;
    log::debug!("call {:#05X} from {:#05X}", op.nnn(), state.pc);
    Ok(State {
        pc: op.nnn(),
        sp,
        stack,
        ..*state
    })
}

/// if Vx == kk then pc += 2
pub fn ske(op: &dyn Opcode, state: &State) -> State {
    State {
        pc: skip_if(state.v[op.x()] == op.kk(), state),
        ..*state
    }
}

/// if Vx != kk then pc += 2
pub fn skne(op: &dyn Opcode, state: &State) -> State {
    State {
        pc: skip_if(state.v[op.x()] != op.kk(), state),
        ..*state
    }
}

/// if Vx == Vy then pc += 2
pub fn skre(op: &dyn Opcode, state: &State) -> State {
    State {
        pc: skip_if(state.v[op.x()] == state.v[op.y()], state),
        ..*state
    }
}

/// Vx = kk
pub fn load(op: &dyn Opcode, state: &State) -> State {
    let mut v = state.v;
    v[op.x()] = op.kk();
    State {
        pc: next(state),
        v,
        ..*state
    }
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but implicitly drop it
pub fn add(op: &dyn Opcode, state: &State) -> State {
    let mut v = state.v;
    v[op.x()] = v[op.x()].wrapping_add(op.kk());
    State {
        pc: next(state),
        v,
        ..*state
    }
}

/// Vx = Vy
pub fn mv(op: &dyn Opcode, state: &State) -> State {
    let mut v = state.v;
    v[op.x()] = v[op.y()];
    State {
        pc: next(state),
        v,
        ..*state
    }
}

/// Vx |= Vy
pub fn or(op: &dyn Opcode, state: &State) -> State {
    let mut v = state.v;
    v[op.x()] |= v[op.y()];
    State {
        pc: next(state),
        v,
        ..*state
    }
}

/// Vx &= Vy
pub fn and(op: &dyn Opcode, state: &State) -> State {
    let mut v = state.v;
    v[op.x()] &= v[op.y()];
    State {
        pc: next(state),
        v,
        ..*state
    }
}

/// Vx ^= Vy
pub fn xor(op: &dyn Opcode, state: &State) -> State {
    let mut v = state.v;
    v[op.x()] ^= v[op.y()];
    State {
        pc: next(state),
        v,
        ..*state
    }
}

/// Vx += Vy; VF = overflow
pub fn addr(op: &dyn Opcode, state: &State) -> State {
    let (res, over) = state.v[op.x()].overflowing_add(state.v[op.y()]);
    let mut v = state.v;
    v[0xF] = over as u8;
    v[op.x()] = res;
    State {
        pc: next(state),
        v,
        ..*state
    }
}

/// Vx -= Vy; VF = !underflow
pub fn sub(op: &dyn Opcode, state: &State) -> State {
    let (res, under) = state.v[op.x()].overflowing_sub(state.v[op.y()]);
    let mut v = state.v;
    v[0xF] = !under as u8;
    v[op.x()] = res;
    State {
        pc: next(state),
        v,
        ..*state
    }
}

/// Vx >>= 1; VF = lsb
pub fn shr(op: &dyn Opcode, state: &State) -> State {
    let mut v = state.v;
    v[0xF] = state.v[op.x()] & 0x1;
    v[op.x()] = state.v[op.x()] >> 1;
    State {
        pc: next(state),
        v,
        ..*state
    }
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(op: &dyn Opcode, state: &State) -> State {
    let (res, under) = state.v[op.y()].overflowing_sub(state.v[op.x()]);
    let mut v = state.v;
    v[0xF] = !under as u8;
    v[op.x()] = res;
    State {
        pc: next(state),
        v,
        ..*state
    }
}

/// Vx <<= 1; VF = msb
pub fn shl(op: &dyn Opcode, state: &State) -> State {
    let mut v = state.v;
    v[0xF] = state.v[op.x()] >> 7;
    v[op.x()] = state.v[op.x()] << 1;
    State {
        pc: next(state),
        v,
        ..*state
    }
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: &dyn Opcode, state: &State) -> State {
    State {
        pc: skip_if(state.v[op.x()] != state.v[op.y()], state),
        ..*state
    }
}

/// I = addr
pub fn loadi(op: &dyn Opcode, state: &State) -> State {
    State {
        pc: next(state),
        i: op.nnn(),
        ..*state
    }
}

/// PC = V0 + addr
pub fn jumpi(op: &dyn Opcode, state: &State) -> State {
    State {
        pc: u16::from(state.v[0x0]) + op.nnn(),
        ..*state
    }
}

/// Vx = rand_byte & kk
/// The byte is drawn by the caller so that the source stays injectable
pub fn rand(op: &dyn Opcode, state: &State, rand_byte: u8) -> State {
    let mut v = state.v;
    v[op.x()] = rand_byte & op.kk();
    State {
        pc: next(state),
        v,
        ..*state
    }
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n onto the FrameBuffer at position x, y.
///
/// Cells are addressed linearly as `x + y * DISPLAY_WIDTH`, so a sprite running
/// off the right edge continues on the next row; anything past the last cell
/// is dropped. Sets VF if any pixel is erased.
pub fn draw(op: &dyn Opcode, state: &State) -> Result<State, Error> {
    let sprite = &state.memory[span(state.i, op.n() as usize)?];
    let origin_x = state.v[op.x()] as usize;
    let origin_y = state.v[op.y()] as usize;

    let mut v = state.v;
    let mut frame_buffer = state.frame_buffer;

    // Reset the flag register (used for collision detection)
    v[0xF] = 0x0;

    for (row, byte) in sprite.iter().enumerate() {
        for bit in 0..8 {
            if (byte >> (7 - bit)) & 0x1 == 0 {
                continue;
            }
            let cell = (origin_x + bit) + (origin_y + row) * DISPLAY_WIDTH;
            if cell >= DISPLAY_SIZE {
                continue;
            }
            let pixel = &mut frame_buffer[cell / DISPLAY_WIDTH][cell % DISPLAY_WIDTH];
            v[0xF] |= *pixel;
            *pixel ^= 0x1;
        }
    }

    Ok(State {
        pc: next(state),
        v,
        frame_buffer,
        ..*state
    })
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: &dyn Opcode, state: &State, keypad: &Keypad) -> State {
    State {
        pc: skip_if(keypad.is_pressed(state.v[op.x()] as usize), state),
        ..*state
    }
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: &dyn Opcode, state: &State, keypad: &Keypad) -> State {
    State {
        pc: skip_if(!keypad.is_pressed(state.v[op.x()] as usize), state),
        ..*state
    }
}

/// Vx = DT
pub fn moved(op: &dyn Opcode, state: &State) -> State {
    let mut v = state.v;
    v[op.x()] = state.delay_timer;
    State {
        pc: next(state),
        v,
        ..*state
    }
}

/// await keypress for Vx
/// The pc stays put until a key is down, so this runs again every cycle
pub fn keyd(op: &dyn Opcode, state: &State, keypad: &Keypad) -> State {
    match keypad.last_pressed() {
        Some(key) => {
            let mut v = state.v;
            v[op.x()] = key as u8;
            State {
                pc: next(state),
                v,
                awaiting_key: None,
                ..*state
            }
        }
        None => State {
            awaiting_key: Some(op.x()),
            ..*state
        },
    }
}

/// DT = Vx
pub fn loads(op: &dyn Opcode, state: &State) -> State {
    State {
        pc: next(state),
        delay_timer: state.v[op.x()],
        ..*state
    }
}

/// ST = Vx
pub fn ld(op: &dyn Opcode, state: &State) -> State {
    State {
        pc: next(state),
        sound_timer: state.v[op.x()],
        ..*state
    }
}

/// I += Vx
pub fn addi(op: &dyn Opcode, state: &State) -> State {
    State {
        pc: next(state),
        i: state.i.wrapping_add(u16::from(state.v[op.x()])),
        ..*state
    }
}

/// I = Vx * 5
/// Set I to the memory address of the glyph for the digit in Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(op: &dyn Opcode, state: &State) -> State {
    State {
        pc: next(state),
        i: u16::from(state.v[op.x()] & 0xF) * GLYPH_HEIGHT,
        ..*state
    }
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(op: &dyn Opcode, state: &State) -> Result<State, Error> {
    let value = state.v[op.x()];
    let mut memory = state.memory;
    memory[span(state.i, 3)?].copy_from_slice(&[value / 100, value / 10 % 10, value % 10]);
    Ok(State {
        pc: next(state),
        memory,
        ..*state
    })
}

/// mem[I..=I+x] = V0..=Vx; I += x + 1
pub fn stor(op: &dyn Opcode, state: &State) -> Result<State, Error> {
    let count = op.x() + 1;
    let mut memory = state.memory;
    memory[span(state.i, count)?].copy_from_slice(&state.v[..count]);
    Ok(State {
        pc: next(state),
        i: state.i + count as u16,
        memory,
        ..*state
    })
}

/// V0..=Vx = mem[I..=I+x]; I += x + 1
pub fn read(op: &dyn Opcode, state: &State) -> Result<State, Error> {
    let count = op.x() + 1;
    let mut v = state.v;
    v[..count].copy_from_slice(&state.memory[span(state.i, count)?]);
    Ok(State {
        pc: next(state),
        i: state.i + count as u16,
        v,
        ..*state
    })
}
