//! Rangeform CLI: inspect and edit parameter documents.
//!
//! Commands:
//! - `show`: list each parameter's range, default, value, and slider position
//! - `set`: set one parameter from text and save it into the document
//! - `reset`: restore one or all parameters to their defaults and save
//! - `args`: print the comma-joined value string of all parameters

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rangeform_core::number::parse_strict;
use rangeform_core::{
    DocumentError, FormGrid, Parameter, ParameterDocument, ParameterForm, ParseMode,
};

#[derive(Parser)]
#[command(
    name = "rangeform",
    about = "Rangeform CLI: bounded float parameters in TOML documents"
)]
struct Cli {
    /// Reject malformed numbers and degenerate ranges instead of reading them as 0.
    #[arg(long, global = true, default_value_t = false)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List parameters with range, default, value, and slider position.
    Show {
        /// Path to a TOML parameter document.
        document: PathBuf,
    },
    /// Set a parameter from a decimal string and save the document.
    Set {
        /// Path to a TOML parameter document.
        document: PathBuf,

        /// Parameter name.
        name: String,

        /// New value (C-locale decimal, e.g. 3.25).
        value: String,
    },
    /// Reset one parameter, or all of them, to the default and save.
    Reset {
        /// Path to a TOML parameter document.
        document: PathBuf,

        /// Parameter name. Resets every parameter when omitted.
        name: Option<String>,
    },
    /// Print all values joined by commas.
    Args {
        /// Path to a TOML parameter document.
        document: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mode = if cli.strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };

    match cli.command {
        Commands::Show { document } => run_show(&document, mode),
        Commands::Set {
            document,
            name,
            value,
        } => run_set(&document, mode, &name, &value),
        Commands::Reset { document, name } => run_reset(&document, mode, name.as_deref()),
        Commands::Args { document } => run_args(&document, mode),
    }
}

fn load(path: &Path, mode: ParseMode) -> Result<(ParameterDocument, ParameterForm)> {
    let document = ParameterDocument::from_file(path)
        .with_context(|| format!("open {}", path.display()))?;
    let form = ParameterForm::from_document(&document, mode)
        .with_context(|| format!("build parameters from {}", path.display()))?;
    log::debug!("{}: {} parameters", path.display(), form.len());
    Ok((document, form))
}

fn save(path: &Path, mut document: ParameterDocument, form: &ParameterForm) -> Result<()> {
    form.save_into(&mut document);
    document.save(path)?;
    println!("Saved {}", path.display());
    Ok(())
}

fn run_show(path: &Path, mode: ParseMode) -> Result<()> {
    let (document, mut form) = load(path, mode)?;
    let mut grid = FormGrid::new();
    form.attach_all(&mut grid);

    if !document.title.is_empty() {
        println!("{}", document.title);
        println!();
    }
    println!(
        "{:<20} {:>10} {:>10} {:>10} {:>10} {:>7}",
        "name", "min", "max", "default", "value", "slider"
    );
    for index in 0..form.len() {
        let Some(p) = form.float(index) else {
            continue;
        };
        let range = p.range();
        let slider = p
            .slider_position()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<20} {:>10} {:>10} {:>10} {:>10} {:>7}",
            p.name(),
            range.min,
            range.max,
            p.default_value(),
            p.text_value(),
            slider
        );
        if range.is_degenerate() {
            eprintln!("  warning: '{}' has max <= min; slider position is meaningless", p.name());
        }
    }
    Ok(())
}

fn run_set(path: &Path, mode: ParseMode, name: &str, value: &str) -> Result<()> {
    if mode == ParseMode::Strict {
        parse_strict("value", value)?;
    }
    let (document, mut form) = load(path, mode)?;
    let parameter = form
        .find_mut(name)
        .ok_or_else(|| DocumentError::NoSuchParameter { name: name.to_string() })?;
    parameter.set_value(value);
    println!("{name} = {}", parameter.text_value());
    save(path, document, &form)
}

fn run_reset(path: &Path, mode: ParseMode, name: Option<&str>) -> Result<()> {
    let (document, mut form) = load(path, mode)?;
    match name {
        Some(name) => {
            let parameter = form
                .find_mut(name)
                .ok_or_else(|| DocumentError::NoSuchParameter { name: name.to_string() })?;
            parameter.reset();
            println!("{name} = {}", parameter.text_value());
        }
        None => {
            form.reset_all();
            println!("Reset {} parameters", form.len());
        }
    }
    save(path, document, &form)
}

fn run_args(path: &Path, mode: ParseMode) -> Result<()> {
    let (_, form) = load(path, mode)?;
    println!("{}", form.command_arguments());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangeform_core::ConfigNode;

    const DOCUMENT: &str = r#"
[[parameter]]
name = "Gamma"
min = "0"
max = "10"
default = "5"
savedValue = "7.5"
"#;

    fn write_document(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("params.toml");
        std::fs::write(&path, DOCUMENT).unwrap();
        path
    }

    fn saved_gamma(path: &Path) -> Option<String> {
        let document = ParameterDocument::from_file(path).unwrap();
        document
            .find("Gamma")
            .and_then(|node| node.attribute("savedValue"))
            .map(str::to_string)
    }

    #[test]
    fn strict_set_rejects_malformed_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_document(&dir);

        let err = run_set(&path, ParseMode::Strict, "Gamma", "abc").unwrap_err();
        assert!(err.to_string().contains("abc"), "{err}");
        assert_eq!(saved_gamma(&path).as_deref(), Some("7.5"));
    }

    #[test]
    fn strict_set_accepts_decimal_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_document(&dir);

        run_set(&path, ParseMode::Strict, "Gamma", "3.25").unwrap();
        assert_eq!(saved_gamma(&path).as_deref(), Some("3.25"));
    }

    #[test]
    fn lenient_set_reads_malformed_value_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_document(&dir);

        run_set(&path, ParseMode::Lenient, "Gamma", "abc").unwrap();
        assert_eq!(saved_gamma(&path).as_deref(), Some("0"));
    }

    #[test]
    fn set_unknown_parameter_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_document(&dir);

        let err = run_set(&path, ParseMode::Lenient, "Nope", "1").unwrap_err();
        assert!(err.to_string().contains("Nope"), "{err}");
    }
}
