use chunkwise_cli::{Cli, CliResult};
use clap::Parser;

fn main() -> CliResult<()> {
    Cli::parse().execute()
}
