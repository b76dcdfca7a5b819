//! Command orchestration for the `fwaddr-convert` binary.
//!
//! ## Conversion Pipeline
//!
//! 1. **Settings** — embedded defaults, or `--config`, then CLI overrides
//! 2. **Output Path** — derive `<input>.txt` and refuse to overwrite the input
//! 3. **Read** — load every inventory row before producing anything
//! 4. **Convert** — build address objects and groups, render both blocks
//! 5. **Write** — write the file in one go (or stdout) and report

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use fwaddr_convert::convert::convert_rows;
use fwaddr_convert::inventory::read_inventory_file;
use fwaddr_convert::mask::MaskPolicy;
use fwaddr_convert::settings::{default_settings, load_settings, Settings};
use fwaddr_convert::summary::{render as render_summary, summarize};
use fwaddr_convert::template::{usage, write_template, TEMPLATE_FILE_NAME};

use crate::cli::{Cli, OutputFormat};
use crate::path_guard::{default_output_path, ensure_output_not_input};

/// Convert one inventory file according to the parsed CLI arguments.
///
/// # Errors
///
/// Returns error if:
/// - The settings file cannot be read or parsed
/// - The output path resolves to the input file
/// - The inventory cannot be read or lacks a required column
/// - A mask is unknown and the strict mask policy is active
/// - The output file cannot be written
pub fn run_convert(cli: &Cli, input: &Path) -> Result<()> {
    let settings = resolve_settings(cli)?;

    let output = if cli.stdout {
        None
    } else {
        Some(
            cli.output
                .clone()
                .unwrap_or_else(|| default_output_path(input)),
        )
    };
    if let Some(path) = &output {
        ensure_output_not_input(path, input)?;
    }

    let rows = read_inventory_file(input, &settings.columns)
        .with_context(|| format!("failed to read inventory {}", input.display()))?;
    let conversion = convert_rows(&rows, settings.masks.unknown)
        .with_context(|| format!("failed to convert {}", input.display()))?;
    let text = conversion.render();

    match &output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("failed to write output {}", path.display()))?;
            println!("Output written to {}", path.display());
        }
        None => print!("{text}"),
    }

    if !conversion.unknown_masks.is_empty() {
        let rows = conversion
            .unknown_masks
            .iter()
            .map(|u| u.row.to_string())
            .collect::<Vec<_>>()
            .join(",");
        eprintln!(
            "{}",
            format!("warning: unknown subnet masks written as /32 (rows {rows})").yellow()
        );
    }

    if cli.summary {
        let summary = summarize(&conversion);
        let rendered = match cli.format {
            OutputFormat::Text => render_summary(summary),
            OutputFormat::Json => serde_json::to_string_pretty(&summary)?,
        };
        // Keep piped configuration clean in stdout mode.
        if output.is_some() {
            println!("{rendered}");
        } else {
            eprintln!("{rendered}");
        }
    }

    Ok(())
}

/// Print usage, then offer to create a template from a `y` answer on stdin.
///
/// Always leaves the decision to exit to the caller; the run itself failed.
pub fn prompt_for_template() -> Result<()> {
    println!("{}", usage(env!("CARGO_PKG_NAME")));
    println!();
    println!("To create a template CSV file, type 'y' and press Enter (or press Enter to exit):");
    io::stdout().flush().context("flush stdout")?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("failed to read answer from stdin")?;
    if answer.trim().eq_ignore_ascii_case("y") {
        create_template()?;
    }
    Ok(())
}

/// Write the sample inventory into the working directory.
pub fn create_template() -> Result<()> {
    let path = Path::new(TEMPLATE_FILE_NAME);
    write_template(path).with_context(|| format!("failed to write {}", path.display()))?;
    println!("CSV template created: {}", TEMPLATE_FILE_NAME.green());
    Ok(())
}

fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => load_settings(path)?,
        None => default_settings(),
    };
    if cli.strict_masks {
        settings.masks.unknown = MaskPolicy::Strict;
    }
    tracing::debug!(?settings, "resolved settings");
    Ok(settings)
}
