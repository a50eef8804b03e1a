use crate::error::{CleanError, CleanResult};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes each clean table to its own pretty-printed JSON file in a directory
pub struct TableWriter {
    output_dir: PathBuf,
    indent: Vec<u8>,
}

impl TableWriter {
    /// Create a writer for `output_dir`, creating the directory if needed
    pub fn new_file_writer<P: AsRef<Path>>(output_dir: P, indent: usize) -> CleanResult<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&output_dir).map_err(|source| CleanError::CreateDir {
            path: output_dir.clone(),
            source,
        })?;

        Ok(TableWriter {
            output_dir,
            indent: vec![b' '; indent],
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `records` to `file_name`, replacing any existing file. Returns
    /// the record count.
    pub fn write_table<T: Serialize>(&self, file_name: &str, records: &[T]) -> CleanResult<usize> {
        let path = self.output_dir.join(file_name);
        let write_err = |source| CleanError::Write {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(write_err)?;
        let mut out = BufWriter::new(file);
        write_pretty(&mut out, records, &self.indent)?;
        out.flush().map_err(write_err)?;

        info!("✓ {}: {} records", file_name, records.len());
        Ok(records.len())
    }
}

/// Serialize `records` as an indented JSON array. Non-ASCII text is written
/// as-is, not escaped.
pub fn write_pretty<W: Write, T: Serialize>(
    writer: W,
    records: &[T],
    indent: &[u8],
) -> CleanResult<()> {
    let formatter = PrettyFormatter::with_indent(indent);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    records.serialize(&mut serializer)?;
    Ok(())
}
