//! CSV row codec for the quote log
//!
//! Format:
//! - Fields separated by `,`, rows terminated by `\n`, UTF-8 text
//! - A field is wrapped in `"` (internal quotes doubled) iff it contains
//!   `,`, `"` or `\n`; otherwise it is written verbatim
//! - Column order: date, time, name, company, email, phone, notes,
//!   productName, ipAddress

use std::borrow::Cow;

use crate::error::CodecError;
use crate::record::submission::CanonicalRecord;

/// Header row written once when the log file is created
pub const HEADER: &str =
    "Tarih,Saat,İsim Soyisim,Firma Adı,E-posta,Telefon,Notlar,Ürün Adı,IP Adresi\n";

/// Number of columns in every row
pub const FIELD_COUNT: usize = 9;

/// A committed quote request as it appears in the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Commit date (writer's clock at append time)
    pub date: String,

    /// Commit time (writer's clock at append time)
    pub time: String,

    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
    pub product_name: String,

    /// Client network address, empty if unknown
    pub ip_address: String,
}

impl LogEntry {
    /// Stamp a canonical record with its commit date and time
    pub fn new(record: CanonicalRecord, date: String, time: String) -> Self {
        let (name, company, email, phone, notes, product_name, ip_address) = record.into_parts();
        Self {
            date,
            time,
            name,
            company,
            email,
            phone,
            notes,
            product_name,
            ip_address,
        }
    }

    /// Rebuild an entry from a decoded row
    ///
    /// # Errors
    ///
    /// Returns `CodecError::FieldCount` if the row does not have nine columns.
    pub fn from_fields(fields: Vec<String>) -> Result<Self, CodecError> {
        let fields: [String; FIELD_COUNT] =
            fields
                .try_into()
                .map_err(|fields: Vec<String>| CodecError::FieldCount {
                    expected: FIELD_COUNT,
                    actual: fields.len(),
                })?;
        let [date, time, name, company, email, phone, notes, product_name, ip_address] = fields;

        Ok(Self {
            date,
            time,
            name,
            company,
            email,
            phone,
            notes,
            product_name,
            ip_address,
        })
    }

    /// Fields in column order
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            &self.date,
            &self.time,
            &self.name,
            &self.company,
            &self.email,
            &self.phone,
            &self.notes,
            &self.product_name,
            &self.ip_address,
        ]
    }
}

/// Escape a single field
pub fn encode_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Encode an entry as one newline-terminated row
pub fn encode_entry(entry: &LogEntry) -> String {
    let mut row = entry
        .fields()
        .iter()
        .map(|f| encode_field(f))
        .collect::<Vec<_>>()
        .join(",");
    row.push('\n');
    row
}

/// Decode the full text of a log into rows of fields
///
/// Quoted fields may contain commas, doubled quotes and newlines. A `\r`
/// directly before a row terminator is dropped. Empty lines produce no row.
///
/// # Errors
///
/// Returns `CodecError::UnterminatedQuote` if the text ends inside a quoted
/// field.
pub fn decode_records(text: &str) -> Result<Vec<Vec<String>>, CodecError> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut row_started = false;
    let mut in_quotes = false;
    let mut line = 1;
    let mut quote_line = 1;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => {
                in_quotes = true;
                quote_line = line;
                row_started = true;
            }
            ',' => {
                record.push(std::mem::take(&mut field));
                row_started = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                line += 1;
                if row_started {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                    row_started = false;
                }
            }
            _ => {
                field.push(c);
                row_started = true;
            }
        }
    }

    if in_quotes {
        return Err(CodecError::UnterminatedQuote { line: quote_line });
    }
    if row_started {
        record.push(field);
        records.push(record);
    }

    Ok(records)
}

/// Decode a single row (trailing newline optional)
///
/// # Errors
///
/// Returns `CodecError::UnterminatedQuote` on an unclosed quoted field.
pub fn decode_line(line: &str) -> Result<Vec<String>, CodecError> {
    Ok(decode_records(line)?
        .into_iter()
        .next()
        .unwrap_or_else(|| vec![String::new()]))
}
