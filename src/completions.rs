//! Shell completion scripts for the `fleetcheck` binary.
//!
//! The shell is parsed by clap through `clap_complete::Shell`'s `ValueEnum`
//! impl, so every shell clap_complete knows about is accepted.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io;

/// Write a completion script for `cmd` to `out`.
pub fn write_completions(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}

/// Write a completion script for `cmd` to stdout.
pub fn generate_completions(cmd: &mut Command, shell: Shell) {
    write_completions(cmd, shell, &mut io::stdout());
}
