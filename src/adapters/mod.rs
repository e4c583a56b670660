// Adapters layer: concrete implementations of the report sink port.

pub mod report;

pub use report::{report_sink, CsvReport, JsonLinesReport, OutputFormat, TextReport};
