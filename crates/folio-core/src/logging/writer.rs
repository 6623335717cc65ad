//! JSONL file writer for diagnostic records.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::entry::DiagnosticEntry;

/// Appends diagnostic records to `logs/<date>_diagnostics.jsonl`.
pub struct DiagnosticWriter {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl DiagnosticWriter {
    /// Open today's diagnostics file under `logs_dir`, creating it if needed.
    pub fn new(logs_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let logs_dir = logs_dir.as_ref();
        fs::create_dir_all(logs_dir)?;

        let date = chrono::Local::now().format("%Y-%m-%d");
        let path = logs_dir.join(format!("{}_diagnostics.jsonl", date));

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record as a line and flush.
    pub fn write(&self, entry: &DiagnosticEntry) -> std::io::Result<()> {
        let json = entry
            .to_json_line()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        writer.flush()
    }
}

impl Drop for DiagnosticWriter {
    fn drop(&mut self) {
        let _ = self.writer.lock().flush();
    }
}

/// Read every record from a diagnostics file, skipping malformed lines.
pub fn read_entries(path: impl AsRef<Path>) -> std::io::Result<Vec<DiagnosticEntry>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| DiagnosticEntry::from_json_line(line).ok())
        .collect())
}
