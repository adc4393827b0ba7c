// src/tables/definitions.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Number of empty rows every freshly created table starts with.
pub const DEFAULT_ROW_COUNT: usize = 3;

macro_rules! string_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generates a fresh random (UUID v4) identifier.
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(TableId);
string_id!(RowId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Slot key, e.g. "column1". Rows are keyed by this.
    pub id: String,
    /// Display name entered when the table was created.
    pub label: String,
}

impl ColumnDefinition {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        ColumnDefinition {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// One table row. The id lives beside `cells`, not inside it, so writing a
/// field named "id" creates an ordinary cell and never re-keys the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    /// Cell values keyed by header column id.
    pub cells: BTreeMap<String, String>,
}

impl Row {
    /// Builds a row holding an empty value for every column of `header`.
    pub fn empty_for(header: &[ColumnDefinition]) -> Self {
        Row {
            id: RowId::generate(),
            cells: header
                .iter()
                .map(|column| (column.id.clone(), String::new()))
                .collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.cells.get(field).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    pub header: Arc<[ColumnDefinition]>,
    pub data: Vec<Arc<Row>>,
}

impl Table {
    pub fn has_column(&self, field: &str) -> bool {
        self.header.iter().any(|column| column.id == field)
    }

    pub fn row_position(&self, row_id: &RowId) -> Option<usize> {
        self.data.iter().position(|row| &row.id == row_id)
    }

    #[cfg(test)]
    pub fn row(&self, row_id: &RowId) -> Option<&Row> {
        self.data.iter().find(|row| &row.id == row_id).map(Arc::as_ref)
    }

    /// Copy of this table under a fresh id, with every row re-identified.
    /// The header is shared, cell values are copied verbatim.
    pub fn duplicate(&self) -> Table {
        Table {
            id: TableId::generate(),
            header: Arc::clone(&self.header),
            data: self
                .data
                .iter()
                .map(|row| {
                    Arc::new(Row {
                        id: RowId::generate(),
                        cells: row.cells.clone(),
                    })
                })
                .collect(),
        }
    }
}

/// Ordered list of all tables. Order is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCollection {
    pub(crate) tables: Vec<Arc<Table>>,
}

impl TableCollection {
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter().map(Arc::as_ref)
    }

    pub fn as_slice(&self) -> &[Arc<Table>] {
        &self.tables
    }

    #[cfg(test)]
    pub fn get(&self, table_id: &TableId) -> Option<&Table> {
        self.tables
            .iter()
            .find(|table| &table.id == table_id)
            .map(Arc::as_ref)
    }

    pub fn position(&self, table_id: &TableId) -> Option<usize> {
        self.tables.iter().position(|table| &table.id == table_id)
    }
}

/// Labels submitted by the create-table form, one per column slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTableForm {
    pub column1: String,
    pub column2: String,
    pub column3: String,
    pub column4: String,
}

impl CreateTableForm {
    /// `(slot key, label)` pairs in column order.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("column1", self.column1.as_str()),
            ("column2", self.column2.as_str()),
            ("column3", self.column3.as_str()),
            ("column4", self.column4.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCellPayload {
    pub table_id: TableId,
    pub row_id: RowId,
    pub field: String,
    pub value: String,
}
