#![forbid(unsafe_code)]

//! Column model: the static table of board columns.
//!
//! Columns are defined once at startup and never change during a session.
//! Each column owns a set of statuses and names one of them as the default
//! applied when a card is dropped on the column as a whole.
//!
//! # Invariants
//!
//! 1. Column ids are unique; column order is the declaration order.
//! 2. Every status maps to at most one column (validated at construction).
//! 3. Each column's default status belongs to its own status set.
//! 4. `column_of` is total: a status no column claims resolves to the
//!    fallback column. This is policy, not an error path.

use ahash::AHashMap;
use thiserror::Error;

use crate::card::Status;

/// Opaque column identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnId(String);

impl ColumnId {
    /// Create an id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ColumnId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One board column: an ordered stage bucket.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// Identity, unique across the table.
    pub id: ColumnId,
    /// Display title.
    pub title: String,
    /// Statuses this column collects. Disjoint from every other column's.
    pub statuses: Vec<Status>,
    /// Status applied when a card is dropped on the column background.
    pub default_status: Status,
}

impl Column {
    /// Create a column.
    #[must_use]
    pub fn new(
        id: impl Into<ColumnId>,
        title: impl Into<String>,
        statuses: Vec<Status>,
        default_status: impl Into<Status>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            statuses,
            default_status: default_status.into(),
        }
    }
}

/// Validation failures when building a [`ColumnMap`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnMapError {
    #[error("column table is empty")]
    Empty,
    #[error("duplicate column id `{0}`")]
    DuplicateColumn(ColumnId),
    #[error("status `{status}` is claimed by both `{first}` and `{second}`")]
    DuplicateStatus {
        status: Status,
        first: ColumnId,
        second: ColumnId,
    },
    #[error("column `{column}` names default status `{status}` outside its own set")]
    ForeignDefault { column: ColumnId, status: Status },
    #[error("fallback column `{0}` is not in the table")]
    UnknownFallback(ColumnId),
}

/// The validated, immutable column table.
///
/// Iteration always follows declaration order; the `ahash` map is used for
/// reverse lookup only, so no behavior depends on hash iteration order.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    columns: Vec<Column>,
    by_status: AHashMap<Status, usize>,
    fallback: usize,
}

impl ColumnMap {
    /// Build the table, validating the invariants listed in the module doc.
    ///
    /// `fallback` names the column that collects statuses no column claims.
    pub fn new(columns: Vec<Column>, fallback: ColumnId) -> Result<Self, ColumnMapError> {
        if columns.is_empty() {
            return Err(ColumnMapError::Empty);
        }

        let mut by_id: AHashMap<ColumnId, usize> = AHashMap::with_capacity(columns.len());
        for (idx, column) in columns.iter().enumerate() {
            if by_id.insert(column.id.clone(), idx).is_some() {
                return Err(ColumnMapError::DuplicateColumn(column.id.clone()));
            }
        }

        let mut by_status: AHashMap<Status, usize> = AHashMap::new();
        for (idx, column) in columns.iter().enumerate() {
            for status in &column.statuses {
                if let Some(&first) = by_status.get(status) {
                    return Err(ColumnMapError::DuplicateStatus {
                        status: status.clone(),
                        first: columns[first].id.clone(),
                        second: column.id.clone(),
                    });
                }
                by_status.insert(status.clone(), idx);
            }
            if !column.statuses.contains(&column.default_status) {
                return Err(ColumnMapError::ForeignDefault {
                    column: column.id.clone(),
                    status: column.default_status.clone(),
                });
            }
        }

        let fallback = *by_id
            .get(&fallback)
            .ok_or(ColumnMapError::UnknownFallback(fallback))?;

        Ok(Self {
            columns,
            by_status,
            fallback,
        })
    }

    /// The column a status belongs to. Total: unmapped statuses resolve to
    /// the fallback column.
    #[must_use]
    pub fn column_of(&self, status: &Status) -> &ColumnId {
        let idx = self.by_status.get(status).copied().unwrap_or(self.fallback);
        &self.columns[idx].id
    }

    /// The status applied when a card is dropped on the column background.
    /// `None` for an id outside the table.
    #[must_use]
    pub fn default_status_for(&self, column: &ColumnId) -> Option<&Status> {
        self.columns
            .iter()
            .find(|c| &c.id == column)
            .map(|c| &c.default_status)
    }

    /// Whether the id names a column in the table.
    #[must_use]
    pub fn contains(&self, column: &ColumnId) -> bool {
        self.columns.iter().any(|c| &c.id == column)
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false: construction rejects an empty table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The fallback column's id.
    #[must_use]
    pub fn fallback(&self) -> &ColumnId {
        &self.columns[self.fallback].id
    }
}
