use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "gitscribe")]
#[clap(about = "AI-powered repository analysis and README generation tool", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
