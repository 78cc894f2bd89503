use super::EXIT_SUCCESS;
use clap::{Command, CommandFactory};
use clap_complete::Shell;
use std::io::Write;

pub fn generate(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    clap_complete::generate(shell, cmd, "marquee", out);
}

#[allow(clippy::unnecessary_wraps)]
pub fn run<C: CommandFactory>(shell: Shell) -> Result<u8, String> {
    generate(shell, &mut C::command(), &mut std::io::stdout());
    Ok(EXIT_SUCCESS)
}
