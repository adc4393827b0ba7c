// src/tables/error.rs

use thiserror::Error;

use super::definitions::{RowId, TableId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Table with id {table_id} not found")]
    TableNotFound { table_id: TableId },
    #[error("Row with id {row_id} not found in table {table_id}")]
    RowNotFound { table_id: TableId, row_id: RowId },
}

pub type TableResult<T> = Result<T, TableError>;
