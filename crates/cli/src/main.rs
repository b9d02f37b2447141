use clap::Parser;
use log::debug;
use mdexpand_core::config::{get_config_path, load_settings};
use mdexpand_core::error::{Error, Result};
use mdexpand_core::factory;
use std::io::{stdout, Write};
use std::process::ExitCode;

use mdexpand_cli::arguments::process_named_arguments;
use mdexpand_cli::cli_args::Args;

fn execute() -> Result<()> {
    let args = Args::parse();

    let config_path = get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);

    let settings = load_settings(&config_path)?.merge(args.settings_overrides());
    let runner = settings.shell_runner();

    let arguments = process_named_arguments(&args.arguments)?;
    let command = factory::create(&args.action, &arguments)?;

    let lines = if args.raw {
        command.raw_lines(&runner)?
    } else {
        command.render_lines_with(&runner)?
    };

    let mut stdout = stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}").map_err(Error::Stdio)?;
    }
    stdout.flush().map_err(Error::Stdio)?;

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
