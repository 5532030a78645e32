use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use vip8_core::Chip8;
use vip8_display::Display;

use crate::clock::Clock;
use crate::config::Config;
use crate::keymap::keymap;

pub fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let mut chip8 = match config.seed {
        Some(seed) => Chip8::with_seed(seed),
        None => Chip8::new(),
    };

    // Load ROM
    let file = File::open(&config.rom)?;
    chip8.load_rom(&mut BufReader::new(file))?;
    log::info!("loaded {}", config.rom.display());

    // Get SDL2 context
    let sdl = sdl2::init()?;
    let title = config.rom.display().to_string();
    let mut display = Display::new(&sdl, &title, config.scale)?;
    let mut events = sdl.event_pump()?;

    let mut clock = Clock::new(config.tick_rate, Instant::now());
    let mut sounding = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.set_key(kc, true)?;
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.set_key(kc, false)?;
                    }
                }
                _ => continue,
            };
        }

        // Advance timers and redraw once per elapsed tick
        let ticks = clock.ticks(Instant::now());
        for _ in 0..ticks {
            chip8.advance_timers();
        }
        if ticks > 0 {
            display.render(&chip8)?;
        }
        if chip8.is_sound_active() != sounding {
            sounding = chip8.is_sound_active();
            log::debug!("tone {}", if sounding { "on" } else { "off" });
        }

        // Update state; a slow frame earns proportionally more instructions
        let budget = ticks.max(1) * config.ips;
        if let Err(e) = execute(&mut chip8, budget, config.skip_unknown) {
            log::error!("halting: {}", e);
            return Err(e.into());
        }

        // Nothing more to do until the next tick
        if ticks == 0 || chip8.awaiting_key().is_some() {
            std::thread::sleep(clock.period());
        }
    }

    Ok(())
}

/// Executes up to `budget` instructions.
///
/// Stops early while the machine waits for a key, since every further step
/// would just run the same wait again.
pub fn execute(chip8: &mut Chip8, budget: u32, skip_unknown: bool) -> Result<(), vip8_core::Error> {
    for _ in 0..budget {
        match chip8.step() {
            Ok(_) => {}
            Err(vip8_core::Error::UnknownOpcode { opcode, pc }) if skip_unknown => {
                log::warn!("skipping unknown opcode {:#06X} at {:#05X}", opcode, pc);
                chip8.skip_instruction();
            }
            Err(e) => return Err(e),
        }
        if chip8.awaiting_key().is_some() {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_runs_budget() {
        let mut chip8 = Chip8::with_seed(0);
        // V0 += 1, forever
        chip8.load(&[0x70, 0x01, 0x12, 0x00]).unwrap();
        execute(&mut chip8, 10, false).unwrap();
        assert_eq!(chip8.pc(), 0x200);
    }

    #[test]
    fn test_execute_stops_while_awaiting_key() {
        let mut chip8 = Chip8::with_seed(0);
        chip8.load(&[0xF0, 0x0A]).unwrap();
        execute(&mut chip8, 10, false).unwrap();
        assert_eq!(chip8.awaiting_key(), Some(0x0));
        assert_eq!(chip8.pc(), 0x200);
    }

    #[test]
    fn test_execute_halts_on_unknown_opcode() {
        let mut chip8 = Chip8::with_seed(0);
        chip8.load(&[0xFF, 0xFF]).unwrap();
        assert!(matches!(
            execute(&mut chip8, 10, false),
            Err(vip8_core::Error::UnknownOpcode { opcode: 0xFFFF, pc: 0x200 })
        ));
    }

    #[test]
    fn test_execute_can_skip_unknown_opcode() {
        let mut chip8 = Chip8::with_seed(0);
        // ???; V0 = K
        chip8.load(&[0xFF, 0xFF, 0xF0, 0x0A]).unwrap();
        execute(&mut chip8, 10, true).unwrap();
        assert_eq!(chip8.pc(), 0x202);
        assert_eq!(chip8.awaiting_key(), Some(0x0));
    }
}
