use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "redadeg",
    about = "Compute distance, mean speed and calorie summaries from raw workout sensor packages"
)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}
