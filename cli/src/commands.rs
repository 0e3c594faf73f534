pub mod list;
pub mod run;

use clap::{ArgAction, Parser, Subcommand};
use tour_common::config::Config;

#[derive(Parser)]
#[command(name = "tour")]
#[command(version, about = "A guided tour of the language, one chapter at a time.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Reduce output (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Raise log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Skip the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Seed for chapters that use randomness
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run chapters (all when none are named)
    #[command(alias = "r")]
    Run {
        /// Chapter numbers or slugs, in the order to run them
        chapters: Vec<String>,
    },
    /// List the available chapters
    #[command(alias = "l")]
    List,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            no_banner: self.no_banner,
            seed: self.seed,
            verbose: self.verbose,
        }
    }
}
