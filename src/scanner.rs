use crate::error::{Error, Result};
use ignore::WalkBuilder;
use std::fs::{self, FileType};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, Default)]
pub struct WalkOptions {
    pub follow_links: bool,
    pub respect_ignore: bool,
}

/// Yields every regular file under `root`, depth-first and sorted by file name.
///
/// Symlinks that resolve to a file are yielded even when links are not followed;
/// symlinked directories are only descended into with `follow_links`.
/// Entry errors are yielded rather than skipped so callers can stop on the first one.
pub fn find_files(root: &Path, opts: WalkOptions) -> Box<dyn Iterator<Item = Result<PathBuf>>> {
    let root_buf = root.to_path_buf();

    if opts.respect_ignore {
        let walker = WalkBuilder::new(root)
            .follow_links(opts.follow_links)
            .require_git(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        Box::new(walker.filter_map(move |entry| match entry {
            Ok(e) if e.file_type().is_some_and(|t| is_file_like(e.path(), t)) => {
                Some(Ok(e.into_path()))
            }
            Ok(_) => None,
            Err(source) => Some(Err(Error::Ignore {
                root: root_buf.clone(),
                source,
            })),
        }))
    } else {
        let walker = WalkDir::new(root)
            .follow_links(opts.follow_links)
            .sort_by_file_name();

        Box::new(walker.into_iter().filter_map(move |entry| match entry {
            Ok(e) if is_file_like(e.path(), e.file_type()) => Some(Ok(e.into_path())),
            Ok(_) => None,
            Err(source) => Some(Err(Error::Walk {
                root: root_buf.clone(),
                source,
            })),
        }))
    }
}

fn is_file_like(path: &Path, file_type: FileType) -> bool {
    if file_type.is_file() {
        return true;
    }
    // Dangling links have no metadata and are skipped.
    file_type.is_symlink() && fs::metadata(path).is_ok_and(|m| m.is_file())
}
