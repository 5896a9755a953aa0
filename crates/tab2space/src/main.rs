mod cli;

use std::process::ExitCode;

use clap::Parser;
use tab2space::logging::init_logging;
use tab2space::{ConsoleReporter, Converter};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

use crate::cli::Cli;

const PROGRAM: &str = "tab2space";

fn main() -> ExitCode {
    if std::env::args_os().len() < 2 {
        println!("{PROGRAM}: missing operand");
        println!("Try '{PROGRAM} --help' for more information.");
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();
    init_logging(if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::OFF
    });

    let mut reporter = ConsoleReporter::stdio(PROGRAM);
    let config = match cli.config() {
        Ok(config) => config,
        Err(e) => {
            reporter.error(&e);
            return ExitCode::FAILURE;
        }
    };
    debug!(?config, files = cli.files.len(), "starting");

    let summary = Converter::new(config).run(&cli.files, &mut reporter);
    debug!(
        converted = summary.converted,
        skipped = summary.skipped,
        delete_failures = summary.delete_failures,
        "done"
    );

    // Per-file problems have already been reported and do not change the status.
    ExitCode::SUCCESS
}
