use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::errors::GenError;

/// Where the rendered document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// `-` means standard output, anything else a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Destination::Stdout
        } else {
            Destination::File(PathBuf::from(arg))
        }
    }
}

/// Writes the fully rendered `contents` to `dest`.
///
/// Files are written to a temporary sibling and renamed into place, so the
/// destination either holds the complete document or is left untouched.
pub fn write_output(dest: &Destination, contents: &str) -> Result<(), GenError> {
    match dest {
        Destination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|source| GenError::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                })?;
            debug!("Wrote {} bytes to stdout", contents.len());
        }
        Destination::File(path) => {
            write_atomic(path, contents)?;
            info!("Wrote {} bytes to {}", contents.len(), path.display());
        }
    }
    Ok(())
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), GenError> {
    let write_err = |source: std::io::Error| GenError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
