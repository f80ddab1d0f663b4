use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::error::Result;

/// A name list discovered under the batch root.
#[derive(Debug)]
pub struct NameFile {
    pub path: PathBuf,
    /// Report file name: "lists/finland.txt" → "lists_finland.json"
    pub report_name: String,
}

/// Scan `root` for name lists, one company name per line.
///
/// Any `.txt` file below `root` counts; hidden files and directories are
/// skipped. Files come back sorted by path so reports are written in a
/// stable order.
pub fn scan_name_files(root: &Path) -> Vec<NameFile> {
    let mut results = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name().to_str().unwrap_or("")))
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("skipping unreadable entry: {e}");
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|e| e.to_str()) != Some("txt")
        {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        results.push(NameFile {
            path: path.to_path_buf(),
            report_name: report_name(relative),
        });
    }

    results
}

/// Read the non-blank lines of a name list, trimmed. A leading `#` marks a
/// comment line.
pub fn read_names(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn report_name(relative: &Path) -> String {
    let stem = relative.with_extension("");
    let parts: Vec<&str> = stem
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();
    format!("{}.json", parts.join("_"))
}
