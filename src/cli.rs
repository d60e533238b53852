//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "shelob", about = "Q&A training data extraction tool.")]
/// Holds every command that is callable by the `shelob` command.
pub enum Shelob {
    #[structopt(about = "Extract structured Q&A records from page batches")]
    Extract(Extract),
}

#[derive(Debug, StructOpt)]
/// Extract command and parameters.
pub struct Extract {
    #[structopt(
        parse(from_os_str),
        help = "source folder (contains per-archive .json page batches)"
    )]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "record destination folder")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "lid-path",
        help = "Path to 176.lid.bin",
        default_value = "lid.176.bin"
    )]
    pub lid_path: PathBuf,
}
