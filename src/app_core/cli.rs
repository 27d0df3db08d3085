use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "podcastr", version, about = "A terminal podcast player")]
pub struct Cli {
    /// Episode list to load instead of the configured one
    #[arg(short, long, value_name = "FILE")]
    pub episodes: Option<PathBuf>,

    /// Config file to read instead of the default location
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
