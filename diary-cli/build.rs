use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree in src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn input(name: &'static str) -> Arg {
    Arg::new(name)
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("diary")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render diary markup to HTML and build listing previews")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-rules")
                .long("list-rules")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("render").arg(input("input")).arg(
                Arg::new("output")
                    .long("output")
                    .short('o')
                    .value_hint(ValueHint::FilePath),
            ),
        )
        .subcommand(Command::new("preview").arg(input("input")))
        .subcommand(
            Command::new("entry")
                .arg(input("input"))
                .arg(Arg::new("author").long("author").required(true))
                .arg(Arg::new("private").long("private").action(ArgAction::SetTrue))
                .arg(Arg::new("id").long("id"))
                .arg(Arg::new("timestamp").long("timestamp")),
        )
        .subcommand(
            Command::new("list")
                .arg(input("entries"))
                .arg(Arg::new("page").long("page"))
                .arg(Arg::new("viewer").long("viewer"))
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "diary", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "diary", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "diary", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
