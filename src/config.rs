//! Configuration for the analysis and its command line front end.

use clap::Parser;

/// Default field width (valid x: `0..=399`).
pub const DEFAULT_WIDTH: i32 = 400;
/// Default field height (valid y: `0..=599`).
pub const DEFAULT_HEIGHT: i32 = 600;

/// Dimensions of the field to analyse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConfig {
    /// Extent along x.
    pub width: i32,
    /// Extent along y.
    pub height: i32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl FieldConfig {
    /// Largest valid x coordinate.
    pub const fn max_x(&self) -> i32 {
        self.width - 1
    }

    /// Largest valid y coordinate.
    pub const fn max_y(&self) -> i32 {
        self.height - 1
    }
}

/// Command line arguments for the `barren` binary.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "barren",
    version,
    about = "Reports the fertile areas of a farm field after barren land is carved out"
)]
pub struct Args {
    /// Field width
    #[arg(long, default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
    pub width: i32,

    /// Field height
    #[arg(long, default_value_t = DEFAULT_HEIGHT, allow_negative_numbers = true)]
    pub height: i32,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Field dimensions requested on the command line.
    pub const fn field_config(&self) -> FieldConfig {
        FieldConfig {
            width: self.width,
            height: self.height,
        }
    }

    /// Log filter directive implied by `--verbose`.
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FieldConfig::default();
        assert_eq!(config.width, 400);
        assert_eq!(config.height, 600);
        assert_eq!(config.max_x(), 399);
        assert_eq!(config.max_y(), 599);
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["barren"]);
        assert_eq!(args.field_config(), FieldConfig::default());
        assert!(!args.no_color);
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::parse_from(["barren", "--width", "30", "--height", "20", "-vv", "--no-color"]);
        assert_eq!(
            args.field_config(),
            FieldConfig {
                width: 30,
                height: 20
            }
        );
        assert!(args.no_color);
        assert_eq!(args.log_level(), "trace");
    }

    #[test]
    fn test_args_verify() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
