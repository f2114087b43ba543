//! Folder Manager - CLI entry point.

use std::process::ExitCode;

use clap::{error::ErrorKind, Parser};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use folder_manager::{
    cli::Args,
    config::ConfigResolver,
    error::{exit_codes, Error, Result},
    fs::{change_working_directory, confirm_folder_name, ensure_project_dir, project_path},
    opener::{open_project, NoopOpener, PlatformOpener, SystemOpener},
    output::{print_dir_status, print_error},
    prompt::Prompter,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS),
        Err(e) => {
            print_error(&e.to_string());
            ExitCode::from(exit_codes::FAILURE)
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let message = e.to_string();
            return Err(Error::Usage(
                message.trim_start_matches("error: ").trim_end().to_string(),
            ));
        }
    };

    // Set up logging
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let raw_name = args.folder_name.ok_or(Error::MissingArgument)?;
    let mut prompter = Prompter::stdio();

    // Confirm the folder name first, then find out where it goes
    let folder_name = confirm_folder_name(&raw_name, &mut prompter)?;

    let resolver = ConfigResolver::from_env(args.config)?;
    debug!(config = %resolver.config_path().display(), "using config file");
    let base_path = resolver.resolve(&mut prompter)?;

    let full_path = project_path(&base_path, &folder_name);
    let status = ensure_project_dir(&full_path)?;
    print_dir_status(status, &full_path);

    change_working_directory(&full_path)?;

    let opener: &dyn SystemOpener = if args.no_open {
        &NoopOpener
    } else {
        &PlatformOpener
    };
    let failures = open_project(opener, &full_path);
    debug!(failures, "file browser handoff finished");

    Ok(())
}
