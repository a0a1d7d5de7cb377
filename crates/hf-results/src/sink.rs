//! Append-only CSV sink for step records.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use hf_sim::StepRecord;

use crate::ResultsResult;

/// Per-step CSV output with the narrow column subset
/// `time, hot_temp_k, cold_temp_k, heat_flow_j` (the console line carries
/// the full record; the file deliberately does not).
///
/// The file is opened once per run in append mode, so rows from repeated
/// runs against the same path accumulate. Buffered writes are flushed on
/// drop as well as via [`CsvSink::flush`].
pub struct CsvSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl CsvSink {
    /// Open (or create) the sink. A header row is written only when the
    /// file starts out empty.
    pub fn open(path: &Path) -> ResultsResult<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let fresh = file.metadata()?.len() == 0;
        let mut writer = BufWriter::new(file);
        if fresh {
            writeln!(writer, "time,hot_temp_k,cold_temp_k,heat_flow_j")?;
        }
        Ok(Self {
            path: path.to_path_buf(),
            writer,
        })
    }

    /// Append one row. Values are written at full precision; fixed-width
    /// rounding is a console concern only.
    pub fn append(&mut self, record: &StepRecord) -> ResultsResult<()> {
        writeln!(
            self.writer,
            "{},{},{},{}",
            record.time, record.hot_temp_k, record.cold_temp_k, record.heat_flow_j
        )?;
        Ok(())
    }

    pub fn flush(&mut self) -> ResultsResult<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for CsvSink {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
