//! All-or-nothing file writes (temp file + rename).

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};

/// Writes `path` through `fill`, creating parent directories as needed.
///
/// Content is streamed into `.<name>.tmp` next to the target and renamed
/// once flushed and synced. On failure the temp file is removed and the
/// target is left untouched.
pub(crate) fn write_atomic<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| OutputError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = temp_path_for(path);
    let result = write_temp(&temp_path, fill).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| OutputError::AtomicRename {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source: e,
        })
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_temp<F>(temp_path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let io_error = |operation: &'static str| {
        move |e: io::Error| OutputError::Io {
            operation,
            path: temp_path.to_path_buf(),
            source: e,
        }
    };

    let file = File::create(temp_path).map_err(io_error("create"))?;
    let mut writer = BufWriter::new(file);
    fill(&mut writer).map_err(io_error("write"))?;
    writer.flush().map_err(io_error("flush"))?;
    let file = writer
        .into_inner()
        .map_err(|e| io_error("flush")(e.into_error()))?;
    file.sync_all().map_err(io_error("sync"))?;
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}
