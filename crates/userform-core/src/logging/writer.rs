//! Append-only JSONL writer for the diagnostic log.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::entry::DiagnosticEntry;

/// Appends entries to `<dir>/<date>_<session>.jsonl`.
pub struct DiagnosticWriter {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl DiagnosticWriter {
    /// Open (or create) today's log file for `session`, creating `dir` if needed.
    pub fn new(dir: impl AsRef<Path>, session: impl Into<String>) -> std::io::Result<Self> {
        let session = session.into();
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let date = chrono::Local::now().format("%Y-%m-%d");
        let path = dir.join(format!("{}_{}.jsonl", date, session));

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one entry as a line and flush it.
    pub fn write(&self, entry: &DiagnosticEntry) -> std::io::Result<()> {
        let json = serde_json::to_string(entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        writer.flush()
    }
}

/// Read every entry from a JSONL file, skipping lines that do not parse.
pub fn read_entries(path: impl AsRef<Path>) -> std::io::Result<Vec<DiagnosticEntry>> {
    let file = File::open(path)?;
    let mut entries = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(entry) = serde_json::from_str::<DiagnosticEntry>(&line) {
            entries.push(entry);
        }
    }
    Ok(entries)
}
