use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "salat-dial", version, about = "A terminal prayer-times dashboard with a progress dial")]
pub struct Cli {
    /// Read settings from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the prayer list, the current prayer and the countdown to the next one
    Times {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compute the half-circle arc for a progress value
    Arc {
        /// Progress in percent (clamped to 0-100)
        #[arg(allow_negative_numbers = true)]
        progress: f64,
        /// Outer diameter of the ring
        #[arg(long, default_value_t = 280.0)]
        size: f64,
        /// Stroke width of the ring
        #[arg(long, default_value_t = 8.0)]
        stroke: f64,
        /// Print SVG markup for the ring
        #[arg(long)]
        svg: bool,
        /// Foreground colour used with --svg
        #[arg(long, default_value = "#f97316")]
        color: String,
    },
    /// Show where each prayer marker sits around the dial
    Markers {
        /// Container width used for the top-left placement
        #[arg(long, default_value_t = 400.0)]
        width: f64,
        /// Container height used for the top-left placement
        #[arg(long, default_value_t = 192.0)]
        height: f64,
    },
    /// Configuration file management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the configuration file path
    Path,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
