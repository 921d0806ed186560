//! Tab-separated time series with a header emitted once per stream

use crate::io::configuration::COLUMN_DELIMITER;
use crate::io::error::{Result, file_system, invalid_parameter};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// One value in an output row
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    /// Cell index or count
    Index(usize),
    /// Real-valued quantity
    Real(f64),
    /// Boolean flag, written as 0 or 1
    Flag(bool),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{value}"),
            Self::Flag(value) => write!(f, "{}", u8::from(*value)),
        }
    }
}

/// Appends simulation-time-indexed rows to a sink
///
/// Every row starts with the sample time, followed by one field per
/// configured column. The header line is written before the first row;
/// file series write it on creation so an empty series still names its
/// columns.
#[derive(Debug)]
pub struct SeriesWriter<W: Write> {
    sink: W,
    columns: &'static [&'static str],
    header_written: bool,
    /// Destination reported in I/O errors
    path: PathBuf,
}

impl<W: Write> SeriesWriter<W> {
    /// Wrap a sink with the given column names
    pub fn new(sink: W, columns: &'static [&'static str]) -> Self {
        Self {
            sink,
            columns,
            header_written: false,
            path: PathBuf::from("<stream>"),
        }
    }

    /// Column names, excluding the leading time column
    pub const fn columns(&self) -> &'static [&'static str] {
        self.columns
    }

    /// Whether the header has been emitted
    pub const fn header_written(&self) -> bool {
        self.header_written
    }

    fn write_header(&mut self) -> Result<()> {
        let mut line = String::from("time");
        for column in self.columns {
            line.push(COLUMN_DELIMITER);
            line.push_str(column);
        }
        writeln!(self.sink, "{line}")
            .map_err(|e| file_system(self.path.clone(), "write header", e))?;
        self.header_written = true;
        Ok(())
    }

    /// Append one row at simulation time `time`
    ///
    /// # Errors
    ///
    /// Returns an error if the field count does not match the columns or the
    /// sink rejects the write
    pub fn write_row(&mut self, time: f64, fields: &[Field]) -> Result<()> {
        if fields.len() != self.columns.len() {
            return Err(invalid_parameter(
                "fields",
                &fields.len(),
                &format!("expected {} fields", self.columns.len()),
            ));
        }
        if !self.header_written {
            self.write_header()?;
        }

        let mut line = time.to_string();
        for field in fields {
            line.push(COLUMN_DELIMITER);
            line.push_str(&field.to_string());
        }
        writeln!(self.sink, "{line}").map_err(|e| file_system(self.path.clone(), "write row", e))
    }

    /// Flush buffered rows to the sink
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails to flush
    pub fn flush(&mut self) -> Result<()> {
        self.sink
            .flush()
            .map_err(|e| file_system(self.path.clone(), "flush", e))
    }

    /// Recover the underlying sink
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl SeriesWriter<BufWriter<File>> {
    /// Create or truncate a file series and write its header
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created or the
    /// header cannot be written
    pub fn create(path: &Path, columns: &'static [&'static str]) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system(parent, "create directory", e))?;
        }
        let file = File::create(path).map_err(|e| file_system(path, "create file", e))?;
        let mut writer = Self::new(BufWriter::new(file), columns);
        writer.path = path.to_path_buf();
        writer.write_header()?;
        Ok(writer)
    }
}
