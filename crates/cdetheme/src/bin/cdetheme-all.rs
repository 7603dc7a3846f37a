//! Generates a theme bundle for every palette with the default layout.

use std::io::{self, Write};
use std::process::ExitCode;

use cdetheme::{commands, logging, Context};
use clap::Parser;
use console::style;

#[derive(Parser)]
#[command(
    name = "cdetheme-all",
    version,
    about = "Generate a CDE-<Palette> theme bundle for every palette in ./palettes"
)]
struct Args {}

fn main() -> ExitCode {
    Args::parse();
    logging::init(false, 0);

    let mut out = io::stdout().lock();
    let result = commands::generate_all(&Context::default(), &mut out);
    let _ = out.flush();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
