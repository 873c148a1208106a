//! Writers for generated records.

use clap::ValueEnum;
use record_core::Record;
use std::io::{self, BufWriter, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for record writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Serialization format for a batch of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    #[default]
    Json,
    /// One JSON object per line
    Jsonl,
    /// YAML sequence
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Jsonl => write!(f, "jsonl"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct OutputMetrics {
    /// Number of records written.
    pub records_written: u64,
    /// Bytes handed to the underlying writer.
    pub bytes_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl OutputMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Counts bytes on their way to the inner writer.
struct CountingWriter<W> {
    inner: W,
    bytes: u64,
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bytes += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Serialize `records` in `format` to `writer`.
pub fn write_records<W: Write>(
    records: &[Record],
    format: OutputFormat,
    writer: W,
) -> anyhow::Result<OutputMetrics> {
    let start_time = Instant::now();
    let mut counter = CountingWriter {
        inner: writer,
        bytes: 0,
    };

    {
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, &mut counter);
        match format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, records)?;
                writeln!(writer)?;
            }
            OutputFormat::Jsonl => {
                for (i, record) in records.iter().enumerate() {
                    serde_json::to_writer(&mut writer, record)?;
                    writeln!(writer)?;

                    if (i + 1) % 10000 == 0 {
                        debug!("Written {} records", i + 1);
                    }
                }
            }
            OutputFormat::Yaml => serde_yaml::to_writer(&mut writer, records)?,
        }
        writer.flush()?;
    }

    let metrics = OutputMetrics {
        records_written: records.len() as u64,
        bytes_written: counter.bytes,
        total_duration: start_time.elapsed(),
    };

    info!(
        "Output complete: {} records as {}, {} bytes in {:?} ({:.2} records/sec)",
        metrics.records_written,
        format,
        metrics.bytes_written,
        metrics.total_duration,
        metrics.records_per_second()
    );

    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use record_core::Value;

    fn records() -> Vec<Record> {
        (0..3)
            .map(|i| {
                [
                    ("id", Value::Int(i)),
                    ("title", Value::from("pork loin")),
                ]
                .into_iter()
                .collect()
            })
            .collect()
    }

    #[test]
    fn test_write_jsonl() {
        let mut out = Vec::new();
        let metrics = write_records(&records(), OutputFormat::Jsonl, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], r#"{"id":1,"title":"pork loin"}"#);
        assert_eq!(metrics.records_written, 3);
        assert_eq!(metrics.bytes_written, text.len() as u64);
    }

    #[test]
    fn test_write_json_array() {
        let mut out = Vec::new();
        write_records(&records(), OutputFormat::Json, &mut out).unwrap();

        let parsed: Vec<Record> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, records());
    }

    #[test]
    fn test_write_yaml() {
        let mut out = Vec::new();
        write_records(&records(), OutputFormat::Yaml, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("- id: 0\n  title: pork loin\n"));
    }

    #[test]
    fn test_write_empty_batch() {
        let mut out = Vec::new();
        let metrics = write_records(&[], OutputFormat::Jsonl, &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(metrics.records_written, 0);
    }
}
