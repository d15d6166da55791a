use std::fs::File;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::info;

use crate::error::DatagenError;
use crate::error::Result;

/// CSV dialect shared by the generators and the loader: `,` delimiter,
/// `\` quote character, minimal quoting, no headers.
pub fn csv_writer<W: io::Write>(wtr: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .quote(b'\\')
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(wtr)
}

pub fn csv_reader<R: io::Read>(rdr: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .quote(b'\\')
        .from_reader(rdr)
}

/// Writes rows across a numbered sequence of gzip CSV files named
/// `<base>-<n>.csv.gz`, starting a new file once the current one holds
/// `max_lines` rows. With `max_lines <= 0` every write rotates first, so
/// each row lands in its own file.
pub struct RollingWriter {
    dir: PathBuf,
    base: String,
    max_lines: i64,
    file_no: u32,
    lines_written: i64,
    writer: Option<csv::Writer<GzEncoder<File>>>,
}

impl RollingWriter {
    pub fn try_new(dir: &Path, base: &str, max_lines: i64) -> Result<Self> {
        let mut w = RollingWriter {
            dir: dir.to_path_buf(),
            base: base.to_string(),
            max_lines,
            file_no: 0,
            lines_written: 0,
            writer: None,
        };
        w.writer = Some(w.open_file()?);

        Ok(w)
    }

    pub fn file_name(&self) -> String {
        format!("{}-{}.csv.gz", self.base, self.file_no)
    }

    fn open_file(&self) -> Result<csv::Writer<GzEncoder<File>>> {
        let path = self.dir.join(self.file_name());
        info!("saving {:?}", path);
        let file = File::create(path)?;

        Ok(csv_writer(GzEncoder::new(file, Compression::default())))
    }

    fn rotate(&mut self) -> Result<()> {
        if let Some(w) = self.writer.take() {
            finish(w)?;
        }
        self.file_no += 1;
        self.lines_written = 0;
        self.writer = Some(self.open_file()?);

        Ok(())
    }

    pub fn write_record<I, T>(&mut self, record: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        if self.lines_written >= self.max_lines {
            self.rotate()?;
        }
        match &mut self.writer {
            Some(w) => w.write_record(record)?,
            None => return Err(DatagenError::Internal("writer is closed".to_string())),
        }
        self.lines_written += 1;

        Ok(())
    }

    /// Flushes and finishes the current gzip stream. Safe to call more than
    /// once; writes after a close fail.
    pub fn close(&mut self) -> Result<()> {
        match self.writer.take() {
            Some(w) => finish(w),
            None => Ok(()),
        }
    }
}

pub(crate) fn finish<W: io::Write>(wtr: csv::Writer<GzEncoder<W>>) -> Result<()> {
    let encoder = wtr
        .into_inner()
        .map_err(|err| DatagenError::Internal(format!("csv flush failed: {err}")))?;
    encoder.finish()?;

    Ok(())
}
