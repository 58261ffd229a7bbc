use crate::args::{Args, Command};
use clap::{CommandFactory, Parser};
use log::debug;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

mod args;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse();
    debug!("rillc version: {}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Build {
            input,
            output,
            emit_c,
            optimize,
        } => {
            if emit_c {
                let output = output.unwrap_or_else(|| default_output(&input, Some("c")));
                rillc::compile_to_c(&input, &output)?;
            } else {
                let output = output.unwrap_or_else(|| default_output(&input, None));
                rillc::compile(&input, &output, optimize)?;
            }
        }
        Command::Run {
            input,
            args,
            optimize,
        } => {
            let code = rillc::run(&input, &args, optimize)?;
            process::exit(code);
        }
        Command::Completions { shell } => {
            let mut command = Args::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut io::stdout());
        }
    }

    Ok(())
}

/// The output path used when none is given: the input file name with its
/// extension stripped (or replaced)
fn default_output(input: &Path, extension: Option<&str>) -> PathBuf {
    let mut output = PathBuf::from(input.file_stem().unwrap_or(input.as_os_str()));
    if let Some(extension) = extension {
        output.set_extension(extension);
    }
    output
}
