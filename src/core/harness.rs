use crate::domain::model::{ReportEntry, RunSummary};
use crate::domain::ports::{ReportSink, Validator};
use crate::utils::error::{Result, ValidateError};
use std::io::BufRead;

/// Feeds every line of an input stream through one validator and hands each
/// verdict to a report sink.
pub struct ValidationHarness<V: Validator, S: ReportSink> {
    validator: V,
    sink: S,
}

impl<V: Validator, S: ReportSink> ValidationHarness<V, S> {
    pub fn new(validator: V, sink: S) -> Self {
        Self { validator, sink }
    }

    pub fn run<R: BufRead>(&mut self, mut reader: R) -> Result<RunSummary> {
        let kind = self.validator.kind();
        let mut summary = RunSummary::default();
        let mut buf = Vec::new();

        tracing::info!("Validating {} input", kind);

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = String::from_utf8_lossy(strip_line_ending(&buf));
            let verdict = self.validator.validate(&line);
            let normalized = if verdict.is_pass() {
                self.validator.normalize(&line)
            } else {
                None
            };

            summary.record(&verdict);
            tracing::debug!(
                "line {}: {:?} -> {}",
                summary.lines,
                line,
                verdict.message()
            );

            let entry = ReportEntry::new(summary.lines, kind, &line, verdict, normalized);
            self.sink.record(&entry)?;
        }

        if summary.lines == 0 {
            tracing::warn!("Input stream was empty");
            self.sink.no_data()?;
            self.sink.finish()?;
            return Err(ValidateError::NoData);
        }

        self.sink.finish()?;

        tracing::info!(
            "Validated {} line(s): {} passed, {} failed",
            summary.lines,
            summary.passed,
            summary.failed
        );

        Ok(summary)
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu::{MenuValidator, MAIN_MENU_OPTIONS};
    use crate::domain::model::{Field, FailureKind};

    #[derive(Default)]
    struct CollectingSink {
        entries: Vec<ReportEntry>,
        no_data: bool,
        finished: bool,
    }

    impl ReportSink for CollectingSink {
        fn record(&mut self, entry: &ReportEntry) -> Result<()> {
            self.entries.push(entry.clone());
            Ok(())
        }

        fn no_data(&mut self) -> Result<()> {
            self.no_data = true;
            Ok(())
        }

        fn finish(&mut self) -> Result<()> {
            self.finished = true;
            Ok(())
        }
    }

    fn harness() -> ValidationHarness<MenuValidator, CollectingSink> {
        ValidationHarness::new(
            MenuValidator::main_menu(MAIN_MENU_OPTIONS),
            CollectingSink::default(),
        )
    }

    #[test]
    fn test_run_records_one_entry_per_line() {
        let mut harness = harness();
        let summary = harness.run("1\n6\nabc\n\n5".as_bytes()).unwrap();

        assert_eq!(summary.lines, 5);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 3);

        let sink = harness.into_sink();
        assert!(sink.finished);
        assert!(!sink.no_data);

        let inputs: Vec<&str> = sink.entries.iter().map(|e| e.input.as_str()).collect();
        assert_eq!(inputs, vec!["1", "6", "abc", "", "5"]);
        assert_eq!(sink.entries[1].failure, Some(FailureKind::OutOfRange));
        assert_eq!(sink.entries[3].failure, Some(FailureKind::EmptyOrNonDigit));
        assert_eq!(sink.entries[3].field, Some(Field::Selection));
        assert_eq!(sink.entries[4].line, 5);
        assert_eq!(sink.entries[4].normalized.as_deref(), Some("5"));
    }

    #[test]
    fn test_run_on_empty_input_reports_no_data() {
        let mut harness = harness();
        let err = harness.run("".as_bytes()).unwrap_err();

        assert!(matches!(err, ValidateError::NoData));
        let sink = harness.into_sink();
        assert!(sink.no_data);
        assert!(sink.finished);
        assert!(sink.entries.is_empty());
    }

    #[test]
    fn test_single_newline_is_one_empty_line() {
        let mut harness = harness();
        let summary = harness.run("\n".as_bytes()).unwrap();
        assert_eq!(summary.lines, 1);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn test_crlf_line_endings_are_stripped() {
        let mut harness = harness();
        let summary = harness.run("1\r\n2\r\n".as_bytes()).unwrap();
        assert_eq!(summary.passed, 2);
    }

    #[test]
    fn test_invalid_utf8_is_reported_not_fatal() {
        let mut harness = harness();
        let summary = harness.run(&b"\xff\n3\n"[..]).unwrap();
        assert_eq!(summary.lines, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.passed, 1);
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending(b"abc\n"), b"abc");
        assert_eq!(strip_line_ending(b"abc\r\n"), b"abc");
        assert_eq!(strip_line_ending(b"abc"), b"abc");
        assert_eq!(strip_line_ending(b"\n"), b"");
    }
}
