use std::env;
use std::ffi::OsString;

use clap::Parser;

/// Run a predefined command from your Cargo.toml.
#[derive(Debug, Parser)]
#[command(name = "cargo-exec", bin_name = "cargo exec", version, about)]
pub struct Cli {
    /// Name of the command, as configured under [package.metadata.exec.commands]
    pub cmd: String,

    /// Additional arguments appended to the command line with shell quoting
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub arguments: Vec<String>,
}

impl Cli {
    /// Parses the process arguments. When run through cargo as
    /// `cargo exec …`, cargo passes the subcommand name as argv[1];
    /// strip it so both invocation styles parse the same.
    pub fn parse_from_env() -> Self {
        Self::parse_from(normalize(env::args_os().collect()))
    }
}

fn normalize(mut args: Vec<OsString>) -> Vec<OsString> {
    if args.get(1).is_some_and(|a| a == "exec") {
        args.remove(1);
    }
    args
}
