//! Command line entrypoint for bdd-forge.

use std::process::ExitCode;

fn main() -> eyre::Result<ExitCode> {
    bdd_forge_cli::run()
}
