// src/tables/systems/mod.rs

mod create_table;
mod duplicate_table;
mod update_cell;

pub use create_table::handle_add_table_request;
pub use duplicate_table::handle_duplicate_table_request;
pub use update_cell::handle_cell_update;
