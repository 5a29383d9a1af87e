use std::env;
use std::path::Path;
use std::process;

use anyhow::Context;
use nu_ansi_term::Color;

use cargo_exec::{cli::Cli, config, error::Error, exec::ExecContext, resolve};

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            let message = match err.downcast_ref::<Error>() {
                Some(Error::CommandNotFound(name)) => command_not_found_help(name),
                _ => format!("error: {err:#}"),
            };
            eprintln!("{}", Color::Red.paint(message));
            process::exit(1);
        }
    }
}

fn run() -> anyhow::Result<i32> {
    // [1] CLI arguments (tolerates the extra `exec` cargo inserts)
    let cli = Cli::parse_from_env();

    // [2] Locate and load the project manifest
    let cwd = env::current_dir().context("cannot determine the current directory")?;
    let manifest = config::find_manifest(&cwd)?;
    let cfg = config::load(&manifest)?;

    // [3] Build the final command line
    let command_line = resolve::build_invocation(
        &cli.cmd,
        &cli.arguments,
        &cfg.commands,
        cfg.config.resolve,
    )?;

    // [4] Run it from the manifest's directory, like npm/yarn scripts,
    //     even when invoked from a subfolder
    let project_dir = manifest.parent().unwrap_or_else(|| Path::new("."));
    let ctx = ExecContext::from_env(project_dir);

    println!("{}\n", Color::Cyan.paint(format!("Exec: {command_line}")));
    let code = ctx.run(&command_line)?;

    if code == 0 {
        println!("\n{}", Color::Cyan.paint("✨ Done!"));
    }
    Ok(code)
}

fn command_not_found_help(name: &str) -> String {
    format!(
        "\nUnable to find the command '{name}'. To configure a command you must \
         add it to your Cargo.toml under [package.metadata.exec.commands]. For example:\n\n\
         [package.metadata.exec.commands]\n\
         {name} = \"echo Hello World\"\n"
    )
}
