use clap::Subcommand;
use crate::config::constants::DEFAULT_DASHBOARD_PORT;

#[derive(Subcommand)]
pub enum Commands {
    Init,
    List {
        #[clap(long)]
        include_forks: bool,
    },
    Analyze {
        repo: String,
    },
    Health {
        repo: String,
    },
    Generate {
        repo: String,
        #[clap(short, long)]
        output: Option<String>,
        #[clap(long)]
        commit: bool,
    },
    Batch {
        #[clap(long)]
        missing_only: bool,
        #[clap(long)]
        dry_run: bool,
    },
    Dashboard {
        #[clap(short, long, default_value_t = DEFAULT_DASHBOARD_PORT)]
        port: u16,
    },
}
