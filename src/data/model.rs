use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring the dtypes a CSV column can take.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Guess the type of a raw text cell: integer, then float, then text.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        CellValue::Text(s.to_string())
    }

    /// Numeric view of the cell. Text and nulls have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the table
// ---------------------------------------------------------------------------

/// A single row: column name → value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub cells: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }
}

// ---------------------------------------------------------------------------
// SalesTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Strip the whitespace that spreadsheet exports like to leave in headers.
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_string()
}

/// The full parsed dataset, columns in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesTable {
    /// Normalized column names in header order.
    pub column_names: Vec<String>,
    /// All rows.
    pub records: Vec<Record>,
}

impl SalesTable {
    /// Build a table, normalizing every column name (header and cell keys).
    pub fn new(column_names: Vec<String>, records: Vec<Record>) -> Self {
        let mut names: Vec<String> = Vec::with_capacity(column_names.len());
        for name in column_names.iter().map(|n| normalize_column_name(n)) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        let records = records
            .into_iter()
            .map(|r| Record {
                cells: r
                    .cells
                    .into_iter()
                    .map(|(k, v)| (normalize_column_name(&k), v))
                    .collect(),
            })
            .collect();
        SalesTable {
            column_names: names,
            records,
        }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_names.iter().any(|c| c == name)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First `n` rows rendered as a plain-text preview.
    pub fn head(&self, n: usize) -> String {
        let mut out = self.column_names.join("\t");
        for record in self.records.iter().take(n) {
            out.push('\n');
            let row: Vec<String> = self
                .column_names
                .iter()
                .map(|c| record.get(c).map(|v| v.to_string()).unwrap_or_default())
                .collect();
            out.push_str(&row.join("\t"));
        }
        out
    }
}
