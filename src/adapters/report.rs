use crate::core::{ReportEntry, ReportSink, ValidatorKind};
use crate::domain::model::NO_DATA_MESSAGE;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

/// Builds the sink for `format` on top of `writer`.
pub fn report_sink<'a, W: Write + 'a>(
    format: OutputFormat,
    kind: ValidatorKind,
    writer: W,
) -> Box<dyn ReportSink + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextReport::new(kind, writer)),
        OutputFormat::Json => Box::new(JsonLinesReport::new(writer)),
        OutputFormat::Csv => Box::new(CsvReport::new(writer)),
    }
}

/// The budget program's console format: the message right-aligned to the
/// validator's longest message, an arrow, then the input exactly as typed.
///
/// ```text
///  Integer part not a positive integer or zero --> $-1.00
///                                  Test passes --> $123.45
/// ```
pub struct TextReport<W: Write> {
    width: usize,
    writer: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(kind: ValidatorKind, writer: W) -> Self {
        Self {
            width: kind.message_width(),
            writer,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for TextReport<W> {
    fn record(&mut self, entry: &ReportEntry) -> Result<()> {
        writeln!(
            self.writer,
            "{:>width$} --> {}",
            entry.message,
            entry.input,
            width = self.width
        )?;
        Ok(())
    }

    fn no_data(&mut self) -> Result<()> {
        writeln!(self.writer, "{}", NO_DATA_MESSAGE)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// One JSON object per input line.
pub struct JsonLinesReport<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesReport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonLinesReport<W> {
    fn record(&mut self, entry: &ReportEntry) -> Result<()> {
        serde_json::to_writer(&mut self.writer, entry)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn no_data(&mut self) -> Result<()> {
        let notice = serde_json::json!({ "error": NO_DATA_MESSAGE });
        serde_json::to_writer(&mut self.writer, &notice)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub struct CsvReport<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvReport<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }
}

impl<W: Write> ReportSink for CsvReport<W> {
    fn record(&mut self, entry: &ReportEntry) -> Result<()> {
        self.writer.serialize(entry)?;
        Ok(())
    }

    // 沒有資料時不輸出任何列，提示訊息交給 stderr
    fn no_data(&mut self) -> Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
