//! Drives source files through the front end and the system C toolchain

use crate::emitter::Emitter;
use crate::error::{CompilationError, CompileResult, FileError};
use log::{debug, warn};
use rill_ast_parsing::analyzer::Analyzer;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// File extension required of source files
pub const SOURCE_EXTENSION: &str = "rill";

const OPTIMIZATION_FLAG: &str = "-Ofast";

fn find_executable(name: &str) -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    env::split_paths(&path)
        .map(|directory| directory.join(name))
        .find(|candidate| candidate.is_file())
}

fn find_clang() -> Result<PathBuf, CompilationError> {
    find_executable("clang").ok_or_else(|| CompilationError::new("clang not found in PATH"))
}

fn read_source(input: &Path) -> Result<String, FileError> {
    if input.extension().and_then(|extension| extension.to_str()) != Some(SOURCE_EXTENSION) {
        return Err(FileError::new(
            input,
            format!("Expected a .{SOURCE_EXTENSION} file"),
        ));
    }
    fs::read_to_string(input).map_err(|error| FileError::new(input, error.to_string()))
}

/// Parses and validates `input`, returning the generated C source text
pub fn generate_c_code(input: &Path) -> CompileResult<String> {
    let source = read_source(input)?;
    let program = rill_ast_parsing::parse(&source, Some(input.to_path_buf()))?;
    Analyzer::analyze(&program)?;
    Ok(Emitter::emit(&program))
}

/// Pipes `code` into clang, producing an executable at `destination`
fn clang_compile(code: &str, destination: &Path, optimize: bool) -> Result<(), CompilationError> {
    let clang = find_clang()?;
    debug!("compiling with {}", clang.display());

    let mut command = Command::new(&clang);
    command.args(["-xc", "-", "-o"]).arg(destination);
    if optimize {
        command.arg(OPTIMIZATION_FLAG);
    }

    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|error| CompilationError::new(error.to_string()))?;
    if let Some(stdin) = child.stdin.as_mut() {
        stdin
            .write_all(code.as_bytes())
            .map_err(|error| CompilationError::new(error.to_string()))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|error| CompilationError::new(error.to_string()))?;
    if !output.status.success() {
        return Err(CompilationError::new(
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ));
    }
    Ok(())
}

/// Compiles `input` into a native executable at `output`
pub fn compile(input: &Path, output: &Path, optimize: bool) -> CompileResult<()> {
    let code = generate_c_code(input)?;
    clang_compile(&code, output, optimize)?;
    Ok(())
}

/// Writes the generated C to `output`, formatted when clang-format is
/// available
pub fn compile_to_c(input: &Path, output: &Path) -> CompileResult<()> {
    let code = generate_c_code(input)?;
    fs::write(output, &code).map_err(|error| FileError::new(output, error.to_string()))?;

    match find_executable("clang-format") {
        Some(clang_format) => {
            if let Err(error) = Command::new(clang_format).arg("-i").arg(output).status() {
                warn!("clang-format failed: {error}");
            }
        }
        None => warn!("clang-format not found in PATH"),
    }
    Ok(())
}

/// Compiles `input` into a temporary directory, runs it with `args` and
/// returns the child's exit code
pub fn run(input: &Path, args: &[String], optimize: bool) -> CompileResult<i32> {
    let code = generate_c_code(input)?;

    let temp_dir = tempfile::tempdir().map_err(|error| CompilationError::new(error.to_string()))?;
    let executable = temp_dir.path().join("main");
    clang_compile(&code, &executable, optimize)?;

    let status = Command::new(&executable)
        .args(args)
        .status()
        .map_err(|error| CompilationError::new(error.to_string()))?;
    debug!("{} exited with {status}", executable.display());

    // a signal-terminated child has no exit code
    Ok(status.code().unwrap_or(130))
}
