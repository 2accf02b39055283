//! Text portraits drawn from font outlines.

use anyhow::Result;
use letterart::core;

/// Run the job described by the CLI arguments.
fn run_app(cli_args: core::cli::CliArgs) -> Result<()> {
    core::runner::run_app(cli_args)
}

fn main() {
    let cli_args = core::platform::get_cli_args();
    match run_app(cli_args) {
        Ok(()) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
