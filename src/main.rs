use std::ffi::OsString;
use std::fmt::Display;
use std::process::ExitCode;

use colored::Colorize;
use human_panic::setup_panic;
use log::error;

use workshop_maps::cli::version;
use workshop_maps::prelude::*;

fn main() -> ExitCode {
    setup_panic!();

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    let options = match validate_args(&args) {
        Ok(CliAction::Help) => {
            show_help();
            return ExitCode::SUCCESS;
        }
        Ok(CliAction::Version) => {
            println!("{}", version());
            return ExitCode::SUCCESS;
        }
        Ok(CliAction::Run(options)) => options,
        Err(e) => {
            print_error(&e);
            show_help();
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logger(options.verbosity, options.log_file.as_deref()) {
        print_error(&e);
        return ExitCode::FAILURE;
    }

    match run(&options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_error(error: impl Display) {
    let plain = format!("ERROR: {error}");
    let colored = format!("{} {error}", "ERROR:".red().bold());
    println!("{}", format_message(&plain, &colored));
}
