//! The TableData value object.

use std::cell::{OnceCell, Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use tabledata_cell::{CellValue, DefaultCoercer, ValueCoercer};

use crate::error::{Result, TableDataError};
use crate::row::{Row, RowCount};

/// An immutable snapshot of a table: name, ordered headers, and row data.
///
/// The typed value matrix is computed lazily through the injected
/// [`ValueCoercer`] and cached; all other observable state is fixed at
/// construction. Operations that derive tables ([`filter_column`],
/// normalization) return new instances.
///
/// Tables built from a one-shot row source ([`TableData::from_iter`]) report
/// their row count as [`RowCount::Unknown`] and drain the source only when
/// an operation actually needs the rows.
///
/// [`filter_column`]: TableData::filter_column
pub struct TableData {
    table_name: String,
    headers: Vec<String>,
    rows: RefCell<Vec<Row>>,
    pending: RefCell<Option<Box<dyn Iterator<Item = Row>>>>,
    one_shot: bool,
    matrix: OnceCell<Vec<Vec<CellValue>>>,
    coercer: Rc<dyn ValueCoercer>,
}

impl TableData {
    /// Build a table from materialized rows. Never fails; nothing is
    /// coerced or validated here.
    pub fn new<N, H, S>(table_name: N, headers: H, rows: Vec<Row>) -> Self
    where
        N: Into<String>,
        H: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table_name: table_name.into(),
            headers: headers.into_iter().map(Into::into).collect(),
            rows: RefCell::new(rows),
            pending: RefCell::new(None),
            one_shot: false,
            matrix: OnceCell::new(),
            coercer: Rc::new(DefaultCoercer),
        }
    }

    /// Build a table from a one-shot row source.
    ///
    /// The source is not consumed at construction; [`TableData::num_rows`]
    /// reports [`RowCount::Unknown`] for such tables.
    pub fn from_iter<N, H, S, I>(table_name: N, headers: H, rows: I) -> Self
    where
        N: Into<String>,
        H: IntoIterator<Item = S>,
        S: Into<String>,
        I: IntoIterator<Item = Row>,
        I::IntoIter: 'static,
    {
        Self {
            table_name: table_name.into(),
            headers: headers.into_iter().map(Into::into).collect(),
            rows: RefCell::new(Vec::new()),
            pending: RefCell::new(Some(Box::new(rows.into_iter()))),
            one_shot: true,
            matrix: OnceCell::new(),
            coercer: Rc::new(DefaultCoercer),
        }
    }

    /// Replace the coercer used for the typed matrix.
    ///
    /// Must be called before the matrix is first accessed to have any
    /// effect; derived tables inherit the coercer.
    #[must_use]
    pub fn with_coercer(mut self, coercer: Rc<dyn ValueCoercer>) -> Self {
        self.coercer = coercer;
        self
    }

    /// Name of the table. May be empty; not validated at construction.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Column headers, left to right.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The injected coercer.
    #[must_use]
    pub fn coercer(&self) -> Rc<dyn ValueCoercer> {
        Rc::clone(&self.coercer)
    }

    /// Number of columns.
    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    /// Number of rows, if it can be determined without consuming a one-shot
    /// source. Tables built with [`TableData::from_iter`] always report
    /// `Unknown`, even after the source has been drained elsewhere, so the
    /// answer does not depend on call order.
    #[must_use]
    pub fn num_rows(&self) -> RowCount {
        if self.one_shot {
            RowCount::Unknown
        } else {
            RowCount::Known(self.rows.borrow().len())
        }
    }

    /// Raw rows, exactly as supplied. Drains a one-shot source.
    pub fn rows(&self) -> Ref<'_, [Row]> {
        self.materialize();
        Ref::map(self.rows.borrow(), Vec::as_slice)
    }

    /// True iff the header list is empty.
    #[must_use]
    pub fn is_empty_header(&self) -> bool {
        self.headers.is_empty()
    }

    /// True iff the table has zero columns or zero rows.
    ///
    /// An undrained one-shot source counts as empty rows: answering
    /// otherwise would require consuming it.
    #[must_use]
    pub fn is_empty_rows(&self) -> bool {
        if self.headers.is_empty() {
            return true;
        }
        if self.pending.borrow().is_some() {
            return true;
        }
        self.rows.borrow().is_empty()
    }

    /// True iff the header list or the rows are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_empty_header() || self.is_empty_rows()
    }

    /// Whether the typed matrix has been computed yet.
    #[must_use]
    pub fn has_value_matrix(&self) -> bool {
        self.matrix.get().is_some()
    }

    /// The typed value matrix: one fixed-width row per record, aligned to
    /// the header list and coerced cell by cell.
    ///
    /// Computed on first access and cached; later calls return the cached
    /// matrix without recomputation.
    pub fn value_matrix(&self) -> &[Vec<CellValue>] {
        self.matrix.get_or_init(|| self.compute_matrix())
    }

    /// Check that every positional row matches the header width.
    ///
    /// Keyed rows are exempt: they are addressed by name, not position.
    pub fn validate_rows(&self) -> Result<()> {
        self.materialize();
        let expected = self.num_columns();
        for (index, row) in self.rows.borrow().iter().enumerate() {
            if let Some(actual) = row.width()
                && actual != expected
            {
                return Err(TableDataError::row_shape(index, expected, actual));
            }
        }
        Ok(())
    }

    /// Fail with [`TableDataError::EmptyData`] when the table is empty.
    ///
    /// Emptiness is a valid state for every operation in this crate; this
    /// guard exists for collaborators that require non-empty input.
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(TableDataError::EmptyData)
        } else {
            Ok(())
        }
    }

    /// Export as `{table_name: [row mapping, ...]}` with header order
    /// preserved. Null cells are omitted per row; a row whose cells are all
    /// null becomes an empty mapping, not an omitted row.
    #[must_use]
    pub fn as_dict(&self) -> serde_json::Value {
        let body: Vec<serde_json::Value> = self
            .value_matrix()
            .iter()
            .map(|row| {
                let mut mapping = serde_json::Map::new();
                for (header, cell) in self.headers.iter().zip(row) {
                    if !cell.is_null() {
                        mapping.insert(header.clone(), cell_to_json(cell));
                    }
                }
                serde_json::Value::Object(mapping)
            })
            .collect();

        let mut root = serde_json::Map::new();
        root.insert(self.table_name.clone(), serde_json::Value::Array(body));
        serde_json::Value::Object(root)
    }

    /// Loose or strict comparison against another table.
    ///
    /// Strict mode is `==`: table name, headers, and the raw rows must all
    /// match exactly, including value type and row representation. Loose
    /// mode compares only the typed values, tolerating numeric
    /// representation differences and ignoring the table name and row
    /// representation.
    #[must_use]
    pub fn equals(&self, other: &TableData, strict: bool) -> bool {
        if strict {
            return self == other;
        }
        let lhs = self.value_matrix();
        let rhs = other.value_matrix();
        lhs.len() == rhs.len()
            && lhs.iter().zip(rhs).all(|(lhs_row, rhs_row)| {
                lhs_row.len() == rhs_row.len()
                    && lhs_row
                        .iter()
                        .zip(rhs_row)
                        .all(|(lhs_cell, rhs_cell)| lhs_cell.loosely_equals(rhs_cell))
            })
    }

    /// True iff any candidate is [`equals`](TableData::equals)-equal to
    /// this table under the given strictness.
    #[must_use]
    pub fn in_tabledata_list(&self, candidates: &[TableData], strict: bool) -> bool {
        candidates
            .iter()
            .any(|candidate| self.equals(candidate, strict))
    }

    pub(crate) fn materialize(&self) {
        if let Some(source) = self.pending.borrow_mut().take() {
            self.rows.borrow_mut().extend(source);
        }
    }

    fn compute_matrix(&self) -> Vec<Vec<CellValue>> {
        self.materialize();
        self.rows
            .borrow()
            .iter()
            .map(|row| self.coerce_row(row))
            .collect()
    }

    fn coerce_row(&self, row: &Row) -> Vec<CellValue> {
        if self.headers.is_empty() {
            // Header-less table: positional rows coerce at their natural
            // width, keyed rows have no addressable columns.
            return match row {
                Row::Values(values) => values.iter().map(|value| self.coercer.coerce(value)).collect(),
                Row::Keyed(_) => Vec::new(),
            };
        }
        self.headers
            .iter()
            .enumerate()
            .map(|(index, header)| self.coercer.coerce(&row.cell(index, header)))
            .collect()
    }
}

impl fmt::Debug for TableData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableData")
            .field("table_name", &self.table_name)
            .field("headers", &self.headers)
            .field("num_rows", &self.num_rows())
            .field("has_value_matrix", &self.has_value_matrix())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for TableData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "table_name={}, header_list=[{}], rows=",
            self.table_name,
            self.headers.join(", ")
        )?;
        if let RowCount::Known(count) = self.num_rows() {
            write!(f, "{count}")?;
        }
        Ok(())
    }
}

/// Strict equality: table name, headers, and the raw rows must match
/// exactly. A keyed row is never equal to a positional one and `Int(2)` is
/// never equal to `Float(2.0)`; use [`TableData::equals`] with
/// `strict = false` for value-level comparison. Drains one-shot sources on
/// both sides.
impl PartialEq for TableData {
    fn eq(&self, other: &Self) -> bool {
        self.table_name == other.table_name
            && self.headers == other.headers
            && *self.rows() == *other.rows()
    }
}

fn cell_to_json(cell: &CellValue) -> serde_json::Value {
    match cell {
        CellValue::Null => serde_json::Value::Null,
        CellValue::Bool(value) => serde_json::Value::Bool(*value),
        CellValue::Int(value) => serde_json::Value::from(*value),
        CellValue::Float(value) => {
            // JSON has no NaN or infinity; export their display form.
            serde_json::Number::from_f64(*value)
                .map_or_else(|| serde_json::Value::from(value.to_string()), serde_json::Value::Number)
        }
        CellValue::Text(value) => serde_json::Value::from(value.clone()),
        CellValue::DateTime(value) => serde_json::Value::from(value.to_rfc3339()),
    }
}
