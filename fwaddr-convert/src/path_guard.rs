use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Output path derived from the inventory path: `hosts.csv` becomes `hosts.txt`.
///
/// Inputs without a `.csv` extension get `.txt` appended instead, so the
/// output never lands on the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    let is_csv = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        return input.with_extension("txt");
    }
    let mut name = input.as_os_str().to_os_string();
    name.push(".txt");
    PathBuf::from(name)
}

pub fn ensure_output_not_input(output: &Path, input: &Path) -> Result<()> {
    let out_norm = normalize_for_compare(output)
        .with_context(|| format!("failed to normalize output path {}", output.display()))?;
    let in_norm = normalize_for_compare(input)
        .with_context(|| format!("failed to normalize input path {}", input.display()))?;
    if out_norm == in_norm {
        bail!(
            "refusing to overwrite inventory: output {} matches input {}",
            output.display(),
            input.display()
        );
    }
    Ok(())
}

fn normalize_for_compare(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return path
            .canonicalize()
            .with_context(|| format!("canonicalize {}", path.display()));
    }

    // Not on disk yet; `..` segments are left unresolved.
    let base = if path.is_absolute() {
        PathBuf::new()
    } else {
        std::env::current_dir().context("current_dir")?
    };
    Ok(base.join(path))
}
