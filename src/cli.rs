//! Command-line interface definitions.

use clap::{Parser, Subcommand, ValueEnum};

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("TFRAG_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("TFRAG_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "tfrag")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Resolve temporal media fragments (#t=start,end) and simulate range-bound playback"
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the temporal fragment of a reference
    Parse {
        /// Reference with a fragment (clip.mp4#t=10,25) or a bare fragment (#t=10,25)
        reference: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Simulate playback of a reference with its span enforced
    Play {
        /// Reference with a temporal fragment
        reference: String,

        /// How the span is bound to the player
        #[arg(long, value_enum, default_value_t = BindMode::Embed)]
        mode: BindMode,

        /// Simulated resource length in seconds (default from config)
        #[arg(long)]
        duration: Option<f64>,

        /// Seconds per tick (default from config)
        #[arg(long)]
        tick: Option<f64>,

        /// Maximum number of ticks to run (default from config)
        #[arg(long)]
        ticks: Option<usize>,

        /// Force looping on
        #[arg(long = "loop")]
        looping: bool,

        /// Output the trace as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Commands {
    /// Whether the command needs the config file loaded.
    ///
    /// `config path`, `config init` and `completions` must keep working when
    /// the file is missing or broken.
    pub fn reads_config(&self) -> bool {
        !matches!(
            self,
            Commands::Config(ConfigCommands::Path | ConfigCommands::Init { .. })
                | Commands::Completions { .. }
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// How `play` binds the span.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindMode {
    /// Followed link: jump to the start and stop once at the end
    Jump,
    /// Embedded player: keep playback inside the span for its lifetime
    Embed,
}
