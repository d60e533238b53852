//! # Shelob
//!
//! 🕷️ Shelob turns saved archives of community Q&A pages into structured
//! training records for question-answering models.
//!
//! Pages annotated with schema.org microdata are walked recursively to
//! reconstruct the nesting of Questions and their Answers, free text is
//! sanitized down to a tag whitelist, and every page becomes one
//! line-delimited JSON record tagged with a majority-vote language.
//!
//! This project can be used both as a tool to generate record files,
//! or as a lib to integrate extraction into other projects.
//!
//! ## Getting started
//!
//! ```sh
//! shelob 0.1.0
//! Q&A training data extraction tool.
//!
//! USAGE:
//!     shelob <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     extract    Extract structured Q&A records from page batches
//!     help       Prints this message or the help of the given subcommand(s)
//! ```
use log::debug;
use structopt::StructOpt;

use shelob::cli;
use shelob::error;
use shelob::pipelines::{Pipeline, QaRecords};

fn main() -> Result<(), error::Error> {
    env_logger::init();

    let opt = cli::Shelob::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Shelob::Extract(e) => {
            let p = QaRecords::new(e.src, e.dst, e.lid_path);
            p.run()?;
        }
    };
    Ok(())
}
