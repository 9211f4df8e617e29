//! Rotating file writer with size-based rotation and backup retention.
//!
//! The writer implements [`std::io::Write`] and is cheap to clone, so it can
//! be handed to `tracing_subscriber::fmt` as a `MakeWriter` closure. All
//! clones share one file handle behind a mutex.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// Before each write the current file size is checked. Once it exceeds the
/// limit the file is renamed to `<name>.<UTC timestamp>`, a new file is
/// started, and all but the newest three backups are removed.
///
/// ```no_run
/// use autocomplete::observability::FileWriter;
/// use std::io::Write;
///
/// let mut writer = FileWriter::new("/tmp/autocomplete.log");
/// writeln!(writer, "plugin loaded")?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct FileWriter {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    file_path: PathBuf,
    max_bytes: u64,
    /// Lazily opened on first write.
    file: Option<File>,
}

impl FileWriter {
    /// Creates a writer for `file_path` with the default 10 MB limit.
    ///
    /// The file is not opened until the first write, so construction never
    /// fails.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self::with_max_bytes(file_path, MAX_FILE_SIZE_BYTES)
    }

    /// Creates a writer that rotates once the file exceeds `max_bytes`.
    pub fn with_max_bytes(file_path: impl Into<PathBuf>, max_bytes: u64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                file_path: file_path.into(),
                max_bytes,
                file: None,
            })),
        }
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))
    }
}

impl Write for FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self.lock()?;
        inner.check_and_rotate()?;

        if inner.file.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&inner.file_path)?;
            inner.file = Some(file);
        }

        let file = inner
            .file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;
        file.write_all(buf)?;
        file.flush()?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut inner = self.lock()?;
        match inner.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl Inner {
    fn check_and_rotate(&mut self) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                self.file = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Renames the current file to a timestamped backup and prunes old ones.
    fn rotate_files(&self) -> io::Result<()> {
        let file_name = file_name(&self.file_path)?;
        let timestamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.9fZ");
        let backup_path = self.file_path.with_file_name(format!("{file_name}.{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// Keeps the newest [`MAX_BACKUP_FILES`] backups.
    ///
    /// Timestamps sort lexicographically, so backups are ordered by name.
    /// Individual removal failures are ignored.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;
        let prefix = format!("{}.", file_name(&self.file_path)?);

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        backups.sort_unstable_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

fn file_name(path: &Path) -> io::Result<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("FileWriter");
        if let Ok(inner) = self.inner.lock() {
            debug.field("file_path", &inner.file_path);
        }
        debug.finish_non_exhaustive()
    }
}
