//! Calculation history
//!
//! An append-only log of completed evaluations. Entries are never edited;
//! the whole log is emptied by the engine's clear operation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::format_number;
use crate::operator::Operator;

/// Shown in place of an empty history
pub const NO_RECORDS: &str = "no records";

/// One completed evaluation.
///
/// Serialized with plain JSON numbers, except that NaN and the infinities
/// (which JSON cannot hold) are written as the strings the display shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(with = "computed")]
    pub first: f64,
    pub operator: Operator,
    #[serde(with = "computed")]
    pub second: f64,
    #[serde(with = "computed")]
    pub result: f64,
}

/// Serde adapter for values that may be NaN or infinite
mod computed {
    use serde::de::{self, Unexpected, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    use crate::format::format_number;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&format_number(*value))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(ComputedVisitor)
    }

    struct ComputedVisitor;

    impl<'de> Visitor<'de> for ComputedVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number, \"NaN\", \"Infinity\" or \"-Infinity\"")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            match v {
                "NaN" => Ok(f64::NAN),
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
            }
        }
    }
}

impl HistoryEntry {
    pub fn new(first: f64, operator: Operator, second: f64, result: f64) -> Self {
        Self {
            first,
            operator,
            second,
            result,
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format_number(self.first),
            self.operator,
            format_number(self.second),
            format_number(self.result)
        )
    }
}

/// Chronological list of [`HistoryEntry`] values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);

        if !tracing::enabled!(tracing::Level::DEBUG) {
            return;
        }
        match serde_json::to_string(&self.entries) {
            Ok(json) => tracing::debug!(history = %json, "Calculation recorded"),
            Err(e) => tracing::debug!(error = %e, "Calculation recorded (history not serializable)"),
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Display lines, oldest first.
    ///
    /// An empty log yields exactly one line: `sentinel`. The iterator is
    /// lazy; call again to start over.
    pub fn lines<'a>(&'a self, sentinel: &'a str) -> impl Iterator<Item = String> + 'a {
        let placeholder = self.entries.is_empty().then(|| sentinel.to_string());
        placeholder
            .into_iter()
            .chain(self.entries.iter().map(HistoryEntry::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn test_entry_display() {
        let entry = HistoryEntry::new(5.0, Operator::Add, 3.0, 8.0);
        assert_eq!(entry.to_string(), "5 + 3 = 8");

        let entry = HistoryEntry::new(1.0, Operator::Divide, 4.0, 0.25);
        assert_eq!(entry.to_string(), "1 ÷ 4 = 0.25");
    }

    #[test]
    fn test_empty_log_yields_sentinel() {
        let log = HistoryLog::new();
        let lines: Vec<String> = log.lines(NO_RECORDS).collect();
        assert_eq!(lines, vec![NO_RECORDS.to_string()]);
    }

    #[test]
    fn test_lines_are_chronological() {
        let mut log = HistoryLog::new();
        log.push(HistoryEntry::new(2.0, Operator::Add, 3.0, 5.0));
        log.push(HistoryEntry::new(5.0, Operator::Multiply, 4.0, 20.0));

        let lines: Vec<String> = log.lines(NO_RECORDS).collect();
        assert_eq!(lines, vec!["2 + 3 = 5", "5 × 4 = 20"]);
    }

    #[test]
    fn test_lines_restartable() {
        let mut log = HistoryLog::new();
        log.push(HistoryEntry::new(1.0, Operator::Subtract, 3.0, -2.0));

        assert_eq!(log.lines(NO_RECORDS).count(), 1);
        assert_eq!(log.lines(NO_RECORDS).next().as_deref(), Some("1 − 3 = -2"));
    }

    #[test]
    fn test_clear_empties_log() {
        let mut log = HistoryLog::new();
        log.push(HistoryEntry::new(2.0, Operator::Power, 3.0, 8.0));
        log.clear();
        assert!(log.is_empty());
        assert!(log.last().is_none());
    }

    #[test]
    fn test_non_finite_entry_round_trips() {
        let entry = HistoryEntry::new(-8.0, Operator::Power, 0.5, f64::NAN);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""result":"NaN""#), "{}", json);

        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.first, -8.0);
        assert_eq!(back.operator, Operator::Power);
        assert_eq!(back.second, 0.5);
        assert!(back.result.is_nan());

        let entry = HistoryEntry::new(f64::NEG_INFINITY, Operator::Add, 1.0, f64::NEG_INFINITY);
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["first"], "-Infinity");
        let back: HistoryEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_unknown_number_string_rejected() {
        let json = r#"{"first":1,"operator":"+","second":"two","result":3}"#;
        let err = serde_json::from_str::<HistoryEntry>(json).unwrap_err();
        assert!(err.to_string().contains("two"));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn push_with_level(level: tracing::Level) -> String {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(captured.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut log = HistoryLog::new();
            log.push(HistoryEntry::new(2.0, Operator::Add, 2.0, 4.0));
            assert_eq!(log.len(), 1);
        });

        captured.text()
    }

    #[test]
    fn test_history_json_logged_at_debug() {
        let output = push_with_level(tracing::Level::DEBUG);
        assert!(output.contains("Calculation recorded"), "{}", output);
        assert!(output.contains(r#""result":4.0"#), "{}", output);
    }

    #[test]
    fn test_history_json_skipped_above_debug() {
        let output = push_with_level(tracing::Level::INFO);
        assert!(!output.contains("Calculation recorded"), "{}", output);
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = HistoryEntry::new(5.0, Operator::Add, 3.0, 8.0);
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["first"], 5.0);
        assert_eq!(json["operator"], "+");
        assert_eq!(json["second"], 3.0);
        assert_eq!(json["result"], 8.0);
    }
}
