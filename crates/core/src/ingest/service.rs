//! Workbook ingestion service.
//!
//! Parses an uploaded spreadsheet (first sheet only) into a [`Dataset`].
//! Any coercion failure is fatal for the whole upload.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use super::error::IngestError;
use crate::dataset::{Dataset, Transaction};

const COL_DATE: &str = "Date";
const COL_CITY: &str = "City";
const COL_PRODUCT_LINE: &str = "Product line";
const COL_PAYMENT: &str = "Payment";
const COL_TOTAL: &str = "Total";
const COL_GROSS_INCOME: &str = "gross income";
const COL_QUANTITY: &str = "Quantity";

/// Columns the header row must contain, exact names.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_DATE,
    COL_CITY,
    COL_PRODUCT_LINE,
    COL_PAYMENT,
    COL_TOTAL,
    COL_GROSS_INCOME,
    COL_QUANTITY,
];

/// Textual date formats accepted for date cells stored as text.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"];

const EMPTY_CELL: Data = Data::Empty;

/// Service for parsing uploaded workbooks.
pub struct IngestService;

impl IngestService {
    /// Parses workbook bytes into a dataset.
    ///
    /// Only the first sheet is read. The header row must contain every
    /// column in [`REQUIRED_COLUMNS`]; rows whose cells are all empty are
    /// skipped; anything else that fails coercion fails the whole upload.
    ///
    /// # Errors
    ///
    /// Returns an [`IngestError`] describing the first failure encountered.
    pub fn parse_workbook(bytes: &[u8]) -> Result<Dataset, IngestError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

        let sheet_names = workbook.sheet_names().to_vec();
        let sheet_name = sheet_names.first().ok_or(IngestError::NoSheets)?;
        let range = workbook.worksheet_range(sheet_name)?;

        Self::parse_rows(range.rows())
    }

    /// Parses an iterator of sheet rows (header first) into a dataset.
    fn parse_rows<'a, I>(mut rows: I) -> Result<Dataset, IngestError>
    where
        I: Iterator<Item = &'a [Data]>,
    {
        let header = rows.next().ok_or(IngestError::NoRows)?;
        let columns = ColumnMap::resolve(header)?;

        let mut parsed = Vec::new();
        for (idx, row) in rows.enumerate() {
            // 1-based spreadsheet numbering, header is row 1.
            let row_number = idx + 2;
            if is_blank(row) {
                continue;
            }
            parsed.push(columns.coerce_row(row, row_number)?);
        }

        if parsed.is_empty() {
            return Err(IngestError::NoRows);
        }
        Ok(Dataset::new(parsed))
    }
}

/// Resolved indices of the required columns within the header row.
struct ColumnMap {
    date: usize,
    city: usize,
    product_line: usize,
    payment: usize,
    total: usize,
    gross_income: usize,
    quantity: usize,
}

impl ColumnMap {
    /// Locates every required column by exact (trimmed) name.
    fn resolve(header: &[Data]) -> Result<Self, IngestError> {
        let names: Vec<String> = header.iter().map(cell_text).collect();

        Ok(Self {
            date: find_column(&names, COL_DATE)?,
            city: find_column(&names, COL_CITY)?,
            product_line: find_column(&names, COL_PRODUCT_LINE)?,
            payment: find_column(&names, COL_PAYMENT)?,
            total: find_column(&names, COL_TOTAL)?,
            gross_income: find_column(&names, COL_GROSS_INCOME)?,
            quantity: find_column(&names, COL_QUANTITY)?,
        })
    }

    /// Coerces one data row into a transaction record.
    fn coerce_row(&self, row: &[Data], row_number: usize) -> Result<Transaction, IngestError> {
        Ok(Transaction {
            city: category_value(cell_at(row, self.city)),
            product_line: category_value(cell_at(row, self.product_line)),
            payment: category_value(cell_at(row, self.payment)),
            date: date_value(cell_at(row, self.date), row_number)?,
            total: decimal_value(cell_at(row, self.total), row_number, COL_TOTAL)?,
            gross_income: decimal_value(
                cell_at(row, self.gross_income),
                row_number,
                COL_GROSS_INCOME,
            )?,
            quantity: decimal_value(cell_at(row, self.quantity), row_number, COL_QUANTITY)?,
        })
    }
}

fn find_column(names: &[String], name: &'static str) -> Result<usize, IngestError> {
    names
        .iter()
        .position(|header| header == name)
        .ok_or(IngestError::MissingColumn(name))
}

fn cell_at(row: &[Data], idx: usize) -> &Data {
    row.get(idx).unwrap_or(&EMPTY_CELL)
}

/// Renders a header cell as a trimmed string.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Returns true if every cell in the row is empty or whitespace-only.
fn is_blank(row: &[Data]) -> bool {
    row.iter().all(|cell| match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    })
}

/// Coerces a category cell to its string value. Coercion, not validation:
/// an empty cell is an empty category value.
fn category_value(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Coerces a date cell to a calendar date.
fn date_value(cell: &Data, row: usize) -> Result<NaiveDate, IngestError> {
    let parsed = match cell {
        Data::DateTime(dt) => dt.as_datetime().map(|dt| dt.date()),
        Data::DateTimeIso(s) | Data::String(s) => parse_text_date(s),
        _ => None,
    };
    parsed.ok_or_else(|| IngestError::InvalidDate {
        row,
        value: cell.to_string(),
    })
}

/// Parses a textual date, with or without a time component.
fn parse_text_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .map(|dt| dt.date())
}

/// Coerces a measure cell to a decimal.
fn decimal_value(cell: &Data, row: usize, column: &'static str) -> Result<Decimal, IngestError> {
    let parsed = match cell {
        Data::Float(v) => Decimal::try_from(*v).ok(),
        Data::Int(v) => Some(Decimal::from(*v)),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| IngestError::InvalidNumber {
        row,
        column,
        value: cell.to_string(),
    })
}
