use clap::Parser;
use color_eyre::Result;
use env_logger::Target;
use jbal_tools::{
    cli::input::CliArgs,
    utils::{fs::current_working_dir, logger::config_logger},
    worker::run_tools,
};

/// The entry point for the binary generated
/// for the program
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli_args = CliArgs::parse();
    // Keeps the standard output clean for the JSON report
    let log_target = if cli_args.command.prints_json() {
        Target::Stderr
    } else {
        Target::Stdout
    };
    config_logger(cli_args.verbose, log_target)?;
    log::debug!("Launching a new jBalCompTools program");
    run_tools(&cli_args, &current_working_dir()?)?;
    log::debug!("Tasks successfully finished");

    Ok(())
}
