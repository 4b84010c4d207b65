//! Streaming download of release assets
//!
//! The response body is copied to disk through a fixed-size buffer, so
//! memory use does not depend on the asset size. An optional progress sink
//! receives the byte length of every chunk as it is written; callers that
//! want a total or a percentage accumulate it themselves.
//!
//! ```no_run
//! use release_dl::download_asset;
//! use std::path::Path;
//!
//! let agent = ureq::agent();
//! let mut received = 0usize;
//! let mut on_chunk = |len: usize| received += len;
//! let path = download_asset(
//!     &agent,
//!     "https://example.com/app-linux-x64.tar.gz",
//!     "app-linux-x64.tar.gz",
//!     Some(Path::new("/tmp")),
//!     Some(&mut on_chunk),
//! )?;
//! # Ok::<(), release_dl::Error>(())
//! ```

use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

const CHUNK_SIZE: usize = 8192;

/// A freshly created download target, removed on drop unless completed.
///
/// The entry is only owned once `create` succeeds, so a failed create never
/// removes whatever was already at `path`.
struct PartialFile<'a> {
    path: &'a Path,
    file: Option<File>,
    completed: bool,
}

impl<'a> PartialFile<'a> {
    fn create(path: &'a Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path,
            file: Some(file),
            completed: false,
        })
    }

    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };
        file.write_all(buf).map_err(|source| Error::Io {
            path: self.path.to_path_buf(),
            source,
        })
    }

    /// Flush and close the file, keeping it on disk.
    fn complete(mut self) -> Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush().map_err(|source| Error::Io {
                path: self.path.to_path_buf(),
                source,
            })?;
        }
        self.completed = true;
        Ok(())
    }
}

impl Drop for PartialFile<'_> {
    fn drop(&mut self) {
        // Close before removing
        self.file.take();
        if !self.completed {
            let _ = std::fs::remove_file(self.path);
        }
    }
}

/// Check every argument before touching the network or the filesystem.
fn validate_target(url: &str, file_name: &str, directory: &Path) -> Result<()> {
    if url.trim().is_empty() {
        return Err(Error::InvalidArgument("download url is empty".to_string()));
    }
    if file_name.is_empty() {
        return Err(Error::InvalidArgument("file name is empty".to_string()));
    }

    let mut components = Path::new(file_name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_normal || file_name.contains('/') || file_name.contains('\\') {
        return Err(Error::InvalidArgument(format!(
            "file name '{}' must be a plain file name",
            file_name
        )));
    }

    if !directory.is_dir() {
        return Err(Error::InvalidArgument(format!(
            "download directory {} does not exist",
            directory.display()
        )));
    }

    Ok(())
}

/// Stream `url` into `directory/file_name` and return that path.
///
/// `directory` defaults to the current working directory. On any failure
/// the partially written file is removed.
pub fn download_asset(
    agent: &ureq::Agent,
    url: &str,
    file_name: &str,
    directory: Option<&Path>,
    mut progress: Option<&mut dyn FnMut(usize)>,
) -> Result<PathBuf> {
    let directory = match directory {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().map_err(|source| Error::Io {
            path: PathBuf::from("."),
            source,
        })?,
    };
    validate_target(url, file_name, &directory)?;

    let dest = directory.join(file_name);
    let download_error = |cause: String| Error::Download {
        file_name: file_name.to_string(),
        url: url.to_string(),
        cause,
    };

    let mut partial = PartialFile::create(&dest)?;

    let response = agent
        .get(url)
        .set("Accept", "application/octet-stream")
        .call()
        .map_err(|e| download_error(e.to_string()))?;

    let mut reader = response.into_reader();
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(download_error(e.to_string())),
        };

        partial.write_all(&buffer[..bytes_read])?;

        if let Some(report) = progress.as_deref_mut() {
            report(bytes_read);
        }
    }

    partial.complete()?;

    Ok(dest)
}
