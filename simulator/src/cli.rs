//! Command line options.

use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use segclock_common::colors::parse_color;
use segclock_common::config::{INITIAL_HEIGHT, MIN_HEIGHT};

use crate::clock::TimeMode;

/// Vintage seven-segment clock
#[derive(Parser, Debug, Clone)]
#[command(name = "segclock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Segment color: a name (red, amber, green, ...) or #rrggbb
    #[arg(short = 'c', long = "color", value_name = "COLOR", default_value = "red", value_parser = parse_color_arg)]
    pub color: Rgb565,

    /// Hour format
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = TimeMode::H24)]
    pub mode: TimeMode,

    /// Show the date (DDMMYY) instead of the time
    #[arg(long = "date")]
    pub date: bool,

    /// Digit height in pixels; also the largest height Up can grow back to
    #[arg(long = "height", value_name = "PIXELS", default_value_t = INITIAL_HEIGHT,
          value_parser = clap::value_parser!(u32).range(i64::from(MIN_HEIGHT)..=2000))]
    pub height: u32,

    /// Window pixel scale
    #[arg(short = 's', long = "scale", default_value_t = 1,
          value_parser = clap::value_parser!(u32).range(1..=4))]
    pub scale: u32,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    pub debug: u8,
}

impl Cli {
    /// Default log filter for the `-d` level. `RUST_LOG` still overrides it.
    pub const fn log_level(&self) -> &'static str {
        match self.debug {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn parse_color_arg(s: &str) -> Result<Rgb565, String> { parse_color(s).map_err(|e| format!("{e}: {s:?}")) }

#[cfg(test)]
mod tests {
    use segclock_common::colors::{AMBER, RED};

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["segclock"]).unwrap();
        assert_eq!(cli.color, RED);
        assert_eq!(cli.mode, TimeMode::H24);
        assert!(!cli.date);
        assert_eq!(cli.height, INITIAL_HEIGHT);
        assert_eq!(cli.scale, 1);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "segclock", "--color", "amber", "--mode", "12h", "--date", "--height", "300", "-s", "2", "-d", "2",
        ])
        .unwrap();
        assert_eq!(cli.color, AMBER);
        assert_eq!(cli.mode, TimeMode::H12);
        assert!(cli.date);
        assert_eq!(cli.height, 300);
        assert_eq!(cli.scale, 2);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_hex_color() {
        let cli = Cli::try_parse_from(["segclock", "-c", "#ff0000"]).unwrap();
        assert_eq!(cli.color, RED);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Cli::try_parse_from(["segclock", "--color", "#12"]).is_err(), "Two hex digits is not a color");
        assert!(Cli::try_parse_from(["segclock", "--height", "10"]).is_err(), "Height below minimum");
        assert!(Cli::try_parse_from(["segclock", "--mode", "36h"]).is_err());
    }

    #[test]
    fn test_high_debug_is_trace() {
        let cli = Cli::try_parse_from(["segclock", "-d", "7"]).unwrap();
        assert_eq!(cli.log_level(), "trace");
    }

    #[test]
    fn test_command_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
