use crate::config::WriteMode;
use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// Serializes `entries` as a compact JSON array and replaces the contents of `path`.
///
/// Missing parent directories are not created.
pub fn write_manifest(path: &Path, entries: &[String], mode: WriteMode) -> Result<()> {
    let json = serde_json::to_string(entries)?;

    match mode {
        WriteMode::Direct => {
            let mut file = File::create(path).map_err(|e| Error::io(path, e))?;
            file.write_all(json.as_bytes())
                .map_err(|e| Error::io(path, e))?;
        }
        WriteMode::Atomic => {
            // Same directory as the target so the rename stays on one filesystem.
            let dir = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            let mut tmp = temp_file_in(dir)?;
            tmp.write_all(json.as_bytes())
                .map_err(|e| Error::io(tmp.path(), e))?;

            // The rename replaces the inode, so carry the target's mode across.
            if let Ok(meta) = fs::metadata(path) {
                tmp.as_file()
                    .set_permissions(meta.permissions())
                    .map_err(|e| Error::io(tmp.path(), e))?;
            }
            tmp.as_file()
                .sync_all()
                .map_err(|e| Error::io(tmp.path(), e))?;
            tmp.persist(path).map_err(|e| Error::io(path, e.error))?;
        }
    }

    Ok(())
}

/// Temp file created with the same default mode as `File::create` (0666 less umask),
/// instead of tempfile's owner-only default.
#[allow(unused_mut)]
fn temp_file_in(dir: &Path) -> Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir).map_err(|e| Error::io(dir, e))
}
