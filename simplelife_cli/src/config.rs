// config.rs - Command line configuration for a simulation run

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use simplelife::RasterFormat;
use simplelife::seed::DEFAULT_DENSITY;

pub const DEFAULT_LOG_FILTER: &str = "simplelife=info,simplelife_cli=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Ppm,
    Png,
}

impl From<Format> for RasterFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Ppm => RasterFormat::Ppm,
            Format::Png => RasterFormat::Png,
        }
    }
}

/// Runs Conway's Game of Life and writes one image per generation.
#[derive(Debug, Parser)]
#[command(name = "simplelife", version)]
pub struct Config {
    /// Board width (size_x)
    #[arg(long, default_value_t = 256)]
    pub width: usize,

    /// Board height (size_y)
    #[arg(long, default_value_t = 256)]
    pub height: usize,

    /// Number of generations written as step files
    #[arg(long, default_value_t = 255)]
    pub steps: usize,

    /// Seed for random filling; drawn at random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chance of each cell starting alive
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Start from a named pattern, centred, instead of random cells
    #[arg(long)]
    pub pattern: Option<String>,

    /// Directory the images are written to
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Ppm)]
    pub format: Format,

    /// Step with one coroutine per column
    #[arg(long)]
    pub parallel: bool,

    /// Stop once a generation repeats one of the last ten
    #[arg(long)]
    pub stop_on_cycle: bool,

    /// Do not take the unwritten step between the initial image and step0
    #[arg(long)]
    pub skip_warmup: bool,

    /// Log filter, used when RUST_LOG is unset
    #[arg(long, default_value = DEFAULT_LOG_FILTER)]
    pub log: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["simplelife"]).unwrap();
        assert_eq!((config.width, config.height), (256, 256));
        assert_eq!(config.steps, 255);
        assert_eq!(config.seed, None);
        assert_eq!(config.density, DEFAULT_DENSITY);
        assert_eq!(config.output, PathBuf::from("."));
        assert_eq!(config.format, Format::Ppm);
        assert!(!config.parallel && !config.stop_on_cycle && !config.skip_warmup);
        assert_eq!(config.log, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn overrides() {
        let config = Config::try_parse_from([
            "simplelife", "--width", "40", "--height", "30", "--steps", "3", "--seed", "9",
            "--pattern", "glider", "-o", "out", "--format", "png", "--parallel",
        ])
        .unwrap();
        assert_eq!((config.width, config.height, config.steps), (40, 30, 3));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.pattern.as_deref(), Some("glider"));
        assert_eq!(config.output, PathBuf::from("out"));
        assert_eq!(RasterFormat::from(config.format), RasterFormat::Png);
        assert!(config.parallel);
    }

    #[test]
    fn rejects_negative_sizes() {
        assert!(Config::try_parse_from(["simplelife", "--width", "-4"]).is_err());
    }
}
