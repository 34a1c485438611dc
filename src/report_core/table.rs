//! Named summary tables and their scalar cells

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
    Empty,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(v) => write!(f, "{}", v),
            Cell::Float(v) => f.write_str(&float_text(*v)),
            Cell::Text(s) => f.write_str(s),
            Cell::Empty => Ok(()),
        }
    }
}

/// Shortest round-trip text for a float.
///
/// Plain values keep a fractional part ("50.0"); exponents carry a sign and at
/// least two digits ("1e+16", "1e-05").
pub fn float_text(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let text = format!("{:?}", value);
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<usize> for Cell {
    fn from(v: usize) -> Self {
        Cell::Int(v as i64)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

/// One summary view: CSV file stem, sheet name, headers and rows.
///
/// The sheet header can differ from the CSV header (some sheets use
/// abbreviated engagement column names).
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    pub file_stem: &'static str,
    pub sheet_name: &'static str,
    pub header: Vec<&'static str>,
    pub sheet_header: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl SummaryTable {
    pub fn new(file_stem: &'static str, sheet_name: &'static str, header: &[&'static str]) -> Self {
        Self {
            file_stem,
            sheet_name,
            header: header.to_vec(),
            sheet_header: header.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn with_sheet_header(mut self, sheet_header: &[&'static str]) -> Self {
        self.sheet_header = sheet_header.to_vec();
        self
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn file_name(&self) -> String {
        format!("{}.csv", self.file_stem)
    }

    /// First row whose first cell is the given text
    #[cfg(test)]
    pub fn row_by_label(&self, label: &str) -> Option<&[Cell]> {
        self.rows
            .iter()
            .find(|row| matches!(row.first(), Some(Cell::Text(s)) if s == label))
            .map(|row| row.as_slice())
    }
}
