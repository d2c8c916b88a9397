use std::process::ExitCode;

use address_book_cli::actions;
use address_book_cli::cli_args::{Action, Args};
use address_book_core::error::Result;
use clap::Parser;
use log::debug;

fn execute() -> Result<()> {
    let args = Args::parse();
    debug!("Arguments: {args:?}");

    let output = match args.action {
        Action::Run {
            contacts,
            dry_run,
            input,
        } => actions::run_command_line(&contacts, dry_run, &input)?,
        Action::Policy {
            insurer,
            number,
            name,
            commission,
            file,
        } => actions::describe_policy(
            file.as_deref(),
            insurer.as_deref(),
            number.as_deref(),
            name.as_deref(),
            commission.as_deref(),
        )?,
        Action::Check { field, value } => actions::check_field(field.into(), &value)?,
    };

    println!("{output}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
