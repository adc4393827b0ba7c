// src/ui/elements/mod.rs

pub mod create_table_dropdown;
pub mod create_table_form;
pub mod editor;
pub mod table_editable;
pub mod tables_list;
