mod writer;

use crate::config::Job;
use crate::error::{Error, Result};
use crate::extension;
use crate::scanner::{self, WalkOptions};
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path};
use tracing::{debug, info, warn};

pub use writer::write_manifest;

#[derive(Debug, Serialize)]
pub struct JobResult {
    pub root: String,
    pub output_file: String,
    pub entries: Vec<String>,
}

/// Walks `job.root`, keeps files whose extension is allowed and overwrites
/// `job.output_file` with the manifest as a compact JSON array.
///
/// Nothing is written if the walk fails.
pub fn list_resources(job: &Job) -> Result<JobResult> {
    let entries = collect_resources(job)?;
    write_manifest(&job.output_file, &entries, job.write_mode)?;

    info!(
        root = %job.root.display(),
        output = %job.output_file.display(),
        count = entries.len(),
        mode = %job.write_mode,
        "manifest written"
    );

    Ok(JobResult {
        root: job.root.to_string_lossy().to_string(),
        output_file: job.output_file.to_string_lossy().to_string(),
        entries,
    })
}

/// Builds the manifest entries for `job` in traversal order.
pub fn collect_resources(job: &Job) -> Result<Vec<String>> {
    check_root(&job.root)?;

    let opts = WalkOptions {
        follow_links: job.follow_links,
        respect_ignore: job.respect_ignore,
    };

    let mut entries = Vec::new();
    for file in scanner::find_files(&job.root, opts) {
        let file = file?;
        let name = match file.file_name() {
            Some(n) => n.to_string_lossy(),
            None => continue,
        };

        if !extension::is_allowed(&name, &job.allowed_extensions) {
            debug!(path = %file.display(), "skipped");
            continue;
        }

        if let Some(entry) = relative_entry(&job.root, &file) {
            entries.push(entry);
        }
    }

    Ok(entries)
}

fn check_root(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::RootNotDirectory(root.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::RootNotFound(root.to_path_buf())),
        Err(e) => Err(Error::io(root, e)),
    }
}

/// Path of `file` relative to `root`, joined with `/`.
fn relative_entry(root: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?;

    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s),
            _ => None,
        })
        .map(|s| match s.to_str() {
            Some(s) => s.to_string(),
            None => {
                warn!(path = %file.display(), "non UTF-8 path component, using lossy name");
                s.to_string_lossy().to_string()
            }
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
