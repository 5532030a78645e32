pub use chip8::Chip8;
pub use error::Error;
pub use instruction::Instruction;
pub use state::FrameBuffer;

mod chip8;
pub mod constants;
mod error;
mod instruction;
mod keypad;
mod opcode;
mod operations;
mod state;
