//! Process-level entry points and error handling.

/// Print an error with its context chain and exit with code 1.
pub fn handle_error(error: anyhow::Error) -> ! {
    eprintln!();
    eprintln!("Error running letterart:");
    eprintln!("{error:#}");
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

/// Parse command line arguments.
pub fn get_cli_args() -> crate::core::cli::CliArgs {
    use clap::Parser;
    crate::core::cli::CliArgs::parse()
}
