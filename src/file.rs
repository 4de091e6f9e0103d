// src/file.rs

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::config::options::ExportOptions;
use crate::core::sanitize::sanitize_filename;
use crate::csv::{detail_table, rows_to_string};
use crate::error::ExportError;
use crate::stats::RunnerAnalysis;

/// Writes analysis tables under one output directory, keeping filenames
/// unique within the run.
pub struct Exporter<'a> {
    opts: &'a ExportOptions,
    seen: HashMap<String, usize>,
}

impl<'a> Exporter<'a> {
    pub fn new(opts: &'a ExportOptions) -> Self {
        Self { opts, seen: HashMap::new() }
    }

    /// Write `<runner>_<distance>_results.<ext>` and return its path.
    pub fn export(&mut self, analysis: &RunnerAnalysis, source_headers: &[String]) -> Result<PathBuf, ExportError> {
        ensure_directory(&self.opts.out_dir)?;

        let stem = format!(
            "{}_{}_results",
            sanitize_filename(&analysis.runner, "runner"),
            sanitize_filename(analysis.group.distance(), "distance"),
        );
        let path = resolve_filename(&self.opts.out_dir, &stem, &mut self.seen, self.opts.format.ext());

        let (headers, rows) = detail_table(&analysis.group, source_headers);
        let headers = self.opts.include_headers.then_some(headers.as_slice());
        let contents = rows_to_string(headers, &rows, self.opts.format.delim());

        fs::write(&path, contents).map_err(|source| ExportError::Write { path: path.clone(), source })?;
        info!(path = %path.display(), rows = rows.len(), "exported results");
        Ok(path)
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ExportError::Write { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

/// Duplicate handling **only within this run**
pub fn resolve_filename(
    dir: &Path,
    stem: &str,                        // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str,                         // "csv" | "tsv"
) -> PathBuf {
    let count = seen_names.entry(stem.to_string()).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem> (N).ext" with N starting at 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}
