use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::models::Error;

/// Emits report sections to standard output and to a single report file.
///
/// The destination file is opened once per run; each section is appended in
/// emission order.
pub struct ReportWriter {
    out: BufWriter<File>,
}

impl ReportWriter {
    /// Creates (truncating if present) the report file at `path`.
    pub fn create(path: &Path) -> Result<Self, Error> {
        let file = File::create(path)?;

        Ok(Self {
            out: BufWriter::new(file),
        })
    }

    /// Prints the section to standard output and appends it to the report
    /// file, byte for byte identical in both destinations.
    pub fn emit_section(&mut self, section: &str) -> Result<(), Error> {
        print!("{}", section);
        self.out.write_all(section.as_bytes())?;

        Ok(())
    }

    /// Flushes buffered report content to disk.
    pub fn finish(mut self) -> Result<(), Error> {
        self.out.flush()?;

        Ok(())
    }
}
