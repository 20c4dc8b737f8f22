//! Command-line interface and interactive prompts.
//!
//! The document link and the target format can be given as arguments or, when
//! absent, are asked for interactively: the link as free text, the format via
//! a numeric menu matching the original selector (1 step, 2 obj, 3 gltf,
//! 4 solidworks).

use std::io::{self, Write};

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

use crate::format::ExportFormat;

/// Bulk exporter for Onshape configuration variants.
#[derive(Debug, Parser)]
#[command(name = "shapex", version, about)]
pub struct Cli {
    /// Onshape document link
    /// (e.g. https://cad.onshape.com/documents/xxxx/w/yyyy/e/zzzz).
    pub link: Option<String>,

    /// Target file format.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Output directory (defaults to the configured `out`).
    #[arg(long)]
    pub out: Option<String>,

    /// Skip the "Default" configuration option.
    #[arg(long, default_value_t = false)]
    pub skip_default: bool,

    /// Export only the first variant and stop.
    #[arg(long, default_value_t = false)]
    pub first_only: bool,
}

/// Format argument accepted by the CLI, mapped to [`ExportFormat`] internally.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Step,
    Obj,
    Gltf,
    Solidworks,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Step => ExportFormat::Step,
            FormatArg::Obj => ExportFormat::Obj,
            FormatArg::Gltf => ExportFormat::Gltf,
            FormatArg::Solidworks => ExportFormat::Solidworks,
        }
    }
}

/// Map the numeric menu choice to a format.
pub fn parse_format_choice(choice: &str) -> Option<ExportFormat> {
    match choice.trim() {
        "1" => Some(ExportFormat::Step),
        "2" => Some(ExportFormat::Obj),
        "3" => Some(ExportFormat::Gltf),
        "4" => Some(ExportFormat::Solidworks),
        _ => None,
    }
}

/// Ask for the document link on stdin.
pub fn prompt_link() -> Result<String> {
    println!("Please enter the Onshape document link (e.g. https://cad.onshape.com/documents/xxxx/w/yyyy/e/zzzz):");
    let link = read_line("Link: ")?;
    if link.is_empty() {
        bail!("No link provided");
    }
    Ok(link)
}

/// Ask for the target format via the numeric menu.
pub fn prompt_format() -> Result<ExportFormat> {
    println!("Please select file format:");
    println!("1 - step");
    println!("2 - obj");
    println!("3 - gltf");
    println!("4 - solidworks");
    let choice = read_line("Enter number: ")?;
    match parse_format_choice(&choice) {
        Some(format) => Ok(format),
        None => bail!("Invalid format choice: {choice:?}"),
    }
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
