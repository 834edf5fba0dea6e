//! Output writing.

use declforge_codegen::Output;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Writes every generated file under `root`, creating directories as needed.
///
/// Entity files are written first, then support files. Every target path is
/// checked before the first write, so a rejected filename leaves `root`
/// untouched.
///
/// # Errors
/// Returns `InvalidInput` if a filename would land outside `root`, otherwise
/// the first IO error encountered.
pub fn write_output(output: &Output, root: &Path) -> io::Result<Vec<PathBuf>> {
    let targets = output
        .all_files()
        .map(|file| -> io::Result<_> {
            Ok((target_path(root, &file.filename)?, &file.content))
        })
        .collect::<io::Result<Vec<_>>>()?;

    let mut written = Vec::with_capacity(output.file_count());
    for (path, content) in targets {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        tracing::debug!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

/// Joins a generated filename onto the output root.
///
/// Only plain relative components are accepted.
fn target_path(root: &Path, filename: &str) -> io::Result<PathBuf> {
    let relative = Path::new(filename.trim_start_matches("./"));
    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes || relative.as_os_str().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("generated file {filename} is outside the output directory"),
        ));
    }
    Ok(root.join(relative))
}
