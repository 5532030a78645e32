use std::path::PathBuf;

use clap::Parser;

use vip8_core::constants::TIMER_HZ;

/// Runs a Chip-8 ROM in an SDL2 window
#[derive(Parser, Debug)]
#[command(name = "vip8", version)]
pub struct Config {
    /// Path to the ROM to run
    pub rom: PathBuf,

    /// Instructions executed per clock tick
    #[arg(long, default_value_t = 10)]
    pub ips: u32,

    /// Clock ticks per second; drives the timers and the display refresh
    #[arg(long, default_value_t = TIMER_HZ)]
    pub tick_rate: u32,

    /// Size of each Chip-8 pixel on screen
    #[arg(long, default_value_t = 10)]
    pub scale: u32,

    /// Seed for the random number generator, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log and step over unknown opcodes instead of stopping
    #[arg(long)]
    pub skip_unknown: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["vip8", "pong.ch8"]).unwrap();
        assert_eq!(config.rom, PathBuf::from("pong.ch8"));
        assert_eq!(config.ips, 10);
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.scale, 10);
        assert_eq!(config.seed, None);
        assert!(!config.skip_unknown);
    }

    #[test]
    fn test_overrides() {
        let config = Config::try_parse_from([
            "vip8",
            "--ips",
            "20",
            "--seed",
            "7",
            "--skip-unknown",
            "pong.ch8",
        ])
        .unwrap();
        assert_eq!(config.ips, 20);
        assert_eq!(config.seed, Some(7));
        assert!(config.skip_unknown);
    }

    #[test]
    fn test_requires_rom() {
        assert!(Config::try_parse_from(["vip8"]).is_err());
    }
}
