// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools print to stdout/stderr for user output.
// - exit: `std::process::exit()` is how a CLI signals failure to the shell.
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

mod cli;
mod health;
mod print;

fn main() {
    std::process::exit(cli::run());
}
