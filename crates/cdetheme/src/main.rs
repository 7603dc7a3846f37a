use std::io::{self, Write};
use std::process::ExitCode;

use cdetheme::{commands, logging, Cli};
use clap::Parser;
use console::style;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.global.quiet, cli.global.verbose);

    let mut out = io::stdout().lock();
    let result = commands::run(&cli, &mut out);
    let _ = out.flush();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
