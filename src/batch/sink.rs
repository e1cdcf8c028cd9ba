//! Output sinks for extracted texts: one line per text.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::error::BatchError;

/// Where extracted texts go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Every input's texts to one stream, in input order
    Stream,
    /// One `<stem>.txt` per input file in this directory
    Directory(PathBuf),
}

impl OutputTarget {
    pub fn from_destdir(destdir: Option<PathBuf>) -> Self {
        match destdir {
            Some(dir) => OutputTarget::Directory(dir),
            None => OutputTarget::Stream,
        }
    }
}

/// Output path for `source` inside `destdir`: same stem, `.txt` extension.
pub fn output_path(destdir: &Path, source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "tweets".to_string());
    destdir.join(format!("{}.txt", stem))
}

/// Write each text on its own line. Returns the number of lines written.
pub fn write_lines<W, I, S>(writer: &mut W, texts: I) -> std::io::Result<usize>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut count = 0;
    for text in texts {
        writeln!(writer, "{}", text.as_ref())?;
        count += 1;
    }
    Ok(count)
}

/// Create `destdir` and any missing parents.
pub fn ensure_dir(destdir: &Path) -> Result<(), BatchError> {
    fs::create_dir_all(destdir).map_err(|source| BatchError::Write {
        path: destdir.to_path_buf(),
        source,
    })
}

/// Write texts to `path`, replacing any existing file.
pub fn write_file<I, S>(path: &Path, texts: I) -> Result<usize, BatchError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let to_err = |source| BatchError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_err)?;
    let mut writer = BufWriter::new(file);
    let count = write_lines(&mut writer, texts).map_err(to_err)?;
    writer.flush().map_err(to_err)?;
    Ok(count)
}
