use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI surface from src/main.rs. Build scripts can't access
// src/ modules, so the command tree is duplicated here; only names and
// value hints matter for completion generation.
fn build_cli() -> Command {
    Command::new("textgrid")
        .about("A tool for converting and inspecting Praat TextGrid files")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .arg(Arg::new("input").required(true).value_hint(ValueHint::FilePath))
                .arg(Arg::new("from").long("from"))
                .arg(Arg::new("to").long("to"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .arg(Arg::new("path").required(true).value_hint(ValueHint::FilePath))
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("transcode")
                .arg(Arg::new("text").required(true))
                .arg(Arg::new("to-praat").long("to-praat").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("retain-diacritics")
                        .long("retain-diacritics")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("export-csv")
                .arg(Arg::new("input").required(true).value_hint(ValueHint::FilePath))
                .arg(Arg::new("tier").long("tier").required(true))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("import-csv")
                .arg(Arg::new("csv").required(true).value_hint(ValueHint::FilePath))
                .arg(Arg::new("grid").long("grid").required(true).value_hint(ValueHint::FilePath))
                .arg(Arg::new("tier").long("tier").required(true))
                .arg(Arg::new("to").long("to"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();
    generate_to(Bash, &mut cmd, "textgrid", &outdir)?;
    generate_to(Zsh, &mut cmd, "textgrid", &outdir)?;
    generate_to(Fish, &mut cmd, "textgrid", &outdir)?;

    Ok(())
}
