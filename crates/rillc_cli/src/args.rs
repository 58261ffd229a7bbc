//! The args for running rillc

use std::path::PathBuf;

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Compiles rill code into native executables via C")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Compile a source file into an executable, or into C with -c
    Build {
        /// The source file to compile
        #[clap(value_name = "source file", value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,
        /// Where to place the output
        #[clap(short, long)]
        output: Option<PathBuf>,
        /// Output C code instead of an executable
        #[clap(short = 'c', long = "emit-c")]
        emit_c: bool,
        /// Optimize the generated executable
        #[clap(short = 'O', long)]
        optimize: bool,
    },
    /// Compile a source file and immediately run it
    Run {
        /// The source file to run
        #[clap(value_name = "source file", value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,
        /// Arguments passed through to the program
        args: Vec<String>,
        /// Optimize the generated executable
        #[clap(short = 'O', long)]
        optimize: bool,
    },
    /// Generate a shell completion script on stdout
    Completions {
        #[clap(value_enum)]
        shell: clap_complete::Shell,
    },
}
