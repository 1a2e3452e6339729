//! Output formatting for address records.
//!
//! Renders records in table, CSV, or JSON Lines format. Token sequences are
//! joined with `.` for table and CSV output, so the `reversed` column reads
//! like the label part of a reverse-lookup name; JSON keeps them as arrays.

use std::io::Write;

use clap::ValueEnum;

use crate::record::{columns, AddressRecord, FieldValue};

/// How address records are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Boxed table, one address per row (default)
    Table,
    /// Header line plus one comma-separated row per address
    Csv,
    /// One JSON object per address, sequences as arrays
    Json,
}

/// Renders address records with a fixed column set.
pub struct OutputFormatter {
    format: OutputFormat,
    with_dnsbl: bool,
}

impl OutputFormatter {
    /// Formatter for the base columns, without `dnsbl`.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            with_dnsbl: false,
        }
    }

    /// Include the `dnsbl` column, whether or not any record fills it.
    pub fn with_dnsbl(mut self, with_dnsbl: bool) -> Self {
        self.with_dnsbl = with_dnsbl;
        self
    }

    /// Write every record, headed by the column names where the format has a header.
    pub fn write<W: Write>(
        &self,
        records: &[AddressRecord],
        writer: &mut W,
    ) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Table => self.write_table(records, writer),
            OutputFormat::Csv => self.write_csv(records, writer),
            OutputFormat::Json => self.write_json(records, writer),
        }
    }

    fn header(&self) -> Vec<&'static str> {
        columns(self.with_dnsbl)
    }

    /// Format a single cell value as text.
    fn format_value(value: &FieldValue) -> String {
        match value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Octets(octets) => octets
                .iter()
                .map(|b| b.to_string())
                .collect::<Vec<_>>()
                .join("."),
            FieldValue::Tokens(tokens) => tokens.join("."),
        }
    }

    /// Convert a single cell value to JSON, keeping sequences as arrays.
    fn json_value(value: &FieldValue) -> serde_json::Value {
        match value {
            FieldValue::Text(s) => serde_json::Value::String(s.clone()),
            FieldValue::Octets(octets) => octets
                .iter()
                .map(|&b| serde_json::Value::Number(b.into()))
                .collect(),
            FieldValue::Tokens(tokens) => tokens
                .iter()
                .map(|t| serde_json::Value::String(t.to_string()))
                .collect(),
        }
    }

    /// A record's cells cut or padded to the header width.
    fn row_values(record: &AddressRecord, width: usize) -> Vec<String> {
        let mut values: Vec<String> = record.fields().iter().map(Self::format_value).collect();
        values.resize(width, String::new());
        values
    }

    fn write_table<W: Write>(
        &self,
        records: &[AddressRecord],
        writer: &mut W,
    ) -> std::io::Result<()> {
        use comfy_table::{Cell, Table};

        let header = self.header();
        let mut table = Table::new();
        table.set_header(header.iter().map(|name| Cell::new(*name)).collect::<Vec<_>>());

        for record in records {
            let row: Vec<Cell> = Self::row_values(record, header.len())
                .into_iter()
                .map(Cell::new)
                .collect();
            table.add_row(row);
        }

        writeln!(writer, "{table}")
    }

    fn write_csv<W: Write>(
        &self,
        records: &[AddressRecord],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let header = self.header();
        writeln!(writer, "{}", header.join(","))?;

        for record in records {
            let values: Vec<String> = Self::row_values(record, header.len())
                .into_iter()
                .map(|value| {
                    // Escape commas and quotes
                    if value.contains(',') || value.contains('"') || value.contains('\n') {
                        format!("\"{}\"", value.replace('"', "\"\""))
                    } else {
                        value
                    }
                })
                .collect();
            writeln!(writer, "{}", values.join(","))?;
        }

        Ok(())
    }

    fn write_json<W: Write>(
        &self,
        records: &[AddressRecord],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let header = self.header();
        for record in records {
            let mut obj = serde_json::Map::new();
            let mut fields = record.fields().into_iter();
            for name in &header {
                let value = fields
                    .next()
                    .map_or(serde_json::Value::Null, |v| Self::json_value(&v));
                obj.insert(name.to_string(), value);
            }
            writeln!(writer, "{}", serde_json::Value::Object(obj))?;
        }

        Ok(())
    }
}
