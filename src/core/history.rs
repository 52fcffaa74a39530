//! Bounded history of resolved operations.
//!
//! Keeps the last five resolved binary operations as rendered expression
//! records, oldest evicted first.

use super::format::format_number;
use super::ops::BinaryOp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of records kept.
pub const HISTORY_CAPACITY: usize = 5;

/// Record of a single resolved binary operation.
///
/// Records are immutable values created at the moment an operation
/// resolves; [`HistoryRecord::rendered`] produces the `"a OP b = c"` line
/// shown in the history panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Accumulator before the operation resolved.
    pub lhs: f64,
    /// The operator applied.
    pub op: BinaryOp,
    /// Second operand.
    pub rhs: f64,
    /// New accumulator.
    pub result: f64,
    /// When the operation resolved.
    pub timestamp: DateTime<Utc>,
}

impl HistoryRecord {
    /// Create a record stamped with the current time.
    pub fn new(lhs: f64, op: BinaryOp, rhs: f64, result: f64) -> Self {
        Self {
            lhs,
            op,
            rhs,
            result,
            timestamp: Utc::now(),
        }
    }

    /// Render as `"{lhs} {symbol} {rhs} = {result}"`.
    pub fn rendered(&self) -> String {
        format!(
            "{} {} {} = {}",
            format_number(self.lhs),
            self.op.symbol(),
            format_number(self.rhs),
            format_number(self.result)
        )
    }
}

/// Ordered history of resolved operations, capped at [`HISTORY_CAPACITY`].
///
/// Recording is pure: `record` returns a new history with the record
/// appended and the oldest entry evicted once the cap is reached.
///
/// # Example
///
/// ```rust
/// use deskcalc::core::{BinaryOp, History, HistoryRecord, HISTORY_CAPACITY};
///
/// let mut history = History::new();
/// for i in 0..7 {
///     let lhs = f64::from(i);
///     history = history.record(HistoryRecord::new(lhs, BinaryOp::Add, 1.0, lhs + 1.0));
/// }
///
/// let lines = history.rendered_lines();
/// assert_eq!(lines.len(), HISTORY_CAPACITY);
/// // The two oldest records were evicted.
/// assert_eq!(lines[0], "2 + 1 = 3");
/// assert_eq!(lines[4], "6 + 1 = 7");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    records: Vec<HistoryRecord>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a resolved operation, returning a new history.
    pub fn record(&self, record: HistoryRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        while records.len() > HISTORY_CAPACITY {
            records.remove(0);
        }
        Self { records }
    }

    /// All records in resolution order, oldest first.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Rendered expression lines, oldest first.
    pub fn rendered_lines(&self) -> Vec<String> {
        self.records.iter().map(HistoryRecord::rendered).collect()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing has resolved yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
