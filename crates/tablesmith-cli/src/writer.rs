use tablesmith_codegen::{FileOutput, Output};

use anyhow::{Context, Result};
use console::style;
use std::{
    fs,
    path::{Path, PathBuf},
};

const HEADER: &str = "// @generated by tablesmith. Do not edit by hand.\n\n";

/// Writes every generated file under `target`, returning the written paths.
pub(crate) fn write_output(output: &Output, target: &Path, rustfmt: bool) -> Result<Vec<PathBuf>> {
    // Make sure the target directory exists
    fs::create_dir_all(target)
        .with_context(|| format!("failed to create `{}`", target.display()))?;

    let mut rustfmt = rustfmt;
    let mut written = vec![];

    for file in &output.files {
        let path = target.join(&file.path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create `{}`", parent.display()))?;
        }

        let source = render(file, &mut rustfmt);

        println!("  {:>10}    {}", style("writing").green().bold(), path.display());
        fs::write(&path, source).with_context(|| format!("failed to write `{}`", path.display()))?;

        written.push(path);
    }

    Ok(written)
}

/// Renders a file's source text. Once `rustfmt` fails to start it is not
/// tried again for the rest of the run.
fn render(file: &FileOutput, rustfmt_enabled: &mut bool) -> String {
    let source = format!("{HEADER}{}", file.body);

    if !*rustfmt_enabled {
        return source;
    }

    match rustfmt(&source) {
        Ok(formatted) => formatted,
        Err(RustfmtError::Unavailable(err)) => {
            tracing::warn!(error = %err, "rustfmt unavailable; writing unformatted sources");
            *rustfmt_enabled = false;
            source
        }
        Err(RustfmtError::Failed(message)) => {
            tracing::warn!(path = %file.path.display(), %message, "rustfmt failed; writing unformatted source");
            source
        }
    }
}

#[derive(Debug)]
enum RustfmtError {
    /// The `rustfmt` process could not be run at all
    Unavailable(std::io::Error),

    /// `rustfmt` ran but rejected the input
    Failed(String),
}

fn rustfmt(source: &str) -> std::result::Result<String, RustfmtError> {
    use std::io::prelude::*;
    use std::process::{Command, Stdio};

    let mut child = Command::new("rustfmt")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .args(["--emit", "stdout", "--edition", "2021"])
        .spawn()
        .map_err(RustfmtError::Unavailable)?;

    let Some(mut child_stdin) = child.stdin.take() else {
        return Err(RustfmtError::Failed("stdin not captured".to_string()));
    };

    // Feed stdin from a thread so a full stdout pipe cannot deadlock us
    let input = source.to_string();
    let feeder = std::thread::spawn(move || child_stdin.write_all(input.as_bytes()));

    let output = child
        .wait_with_output()
        .map_err(|err| RustfmtError::Failed(err.to_string()))?;

    match feeder.join() {
        Ok(Ok(())) => {}
        Ok(Err(err)) => return Err(RustfmtError::Failed(err.to_string())),
        Err(_) => return Err(RustfmtError::Failed("stdin writer panicked".to_string())),
    }

    match output.status.code() {
        Some(0) => String::from_utf8(output.stdout)
            .map_err(|err| RustfmtError::Failed(err.to_string())),
        Some(2) => Err(RustfmtError::Failed(format!(
            "parse error: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        ))),
        Some(3) => Err(RustfmtError::Failed("failed to format".to_string())),
        _ => Err(RustfmtError::Failed(format!("exited with {}", output.status))),
    }
}
