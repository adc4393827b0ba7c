// src/tables/utils.rs
//! Pure helpers for building tables and laying them out.

use std::num::NonZeroUsize;
use std::sync::Arc;

use super::definitions::{
    ColumnDefinition, CreateTableForm, Row, Table, TableId, DEFAULT_ROW_COUNT,
};

/// Builds a new table from the submitted form: one header column per form
/// entry (column1..column4) and `DEFAULT_ROW_COUNT` empty rows.
pub fn create_table(form: &CreateTableForm) -> Table {
    let header: Arc<[ColumnDefinition]> = form
        .entries()
        .into_iter()
        .map(|(slot, label)| ColumnDefinition::new(slot, label))
        .collect();

    let data = (0..DEFAULT_ROW_COUNT)
        .map(|_| Arc::new(Row::empty_for(&header)))
        .collect();

    Table {
        id: TableId::generate(),
        header,
        data,
    }
}

/// Splits `items` into consecutive groups of `chunk_size`; the last group
/// holds the remainder. Empty input gives no groups.
pub fn make_table_chunks<T>(items: &[T], chunk_size: NonZeroUsize) -> Vec<&[T]> {
    items.chunks(chunk_size.get()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn form() -> CreateTableForm {
        CreateTableForm {
            column1: "Name".to_string(),
            column2: "Age".to_string(),
            column3: "City".to_string(),
            column4: "Country".to_string(),
        }
    }

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_create_table_header_follows_form_order() {
        let table = create_table(&form());
        let header: Vec<(&str, &str)> = table
            .header
            .iter()
            .map(|c| (c.id.as_str(), c.label.as_str()))
            .collect();
        assert_eq!(
            header,
            vec![
                ("column1", "Name"),
                ("column2", "Age"),
                ("column3", "City"),
                ("column4", "Country"),
            ]
        );
    }

    #[test]
    fn test_create_table_rows_are_empty_and_aligned() {
        let table = create_table(&form());
        assert_eq!(table.data.len(), DEFAULT_ROW_COUNT);
        for row in &table.data {
            assert_eq!(row.cells.len(), table.header.len());
            for column in table.header.iter() {
                assert_eq!(row.get(&column.id), Some(""));
            }
        }
    }

    #[test]
    fn test_create_table_ids_are_unique() {
        let tables: Vec<Table> = (0..20).map(|_| create_table(&form())).collect();

        let table_ids: HashSet<&TableId> = tables.iter().map(|t| &t.id).collect();
        assert_eq!(table_ids.len(), tables.len());

        let row_ids: HashSet<_> = tables
            .iter()
            .flat_map(|t| t.data.iter().map(|r| r.id.clone()))
            .collect();
        assert_eq!(row_ids.len(), tables.len() * DEFAULT_ROW_COUNT);
    }

    #[test]
    fn test_make_table_chunks_with_remainder() {
        let items = [1, 2, 3, 4, 5, 6, 7];
        let chunks = make_table_chunks(&items, size(3));
        assert_eq!(chunks, vec![&[1, 2, 3][..], &[4, 5, 6][..], &[7][..]]);
    }

    #[test]
    fn test_make_table_chunks_edge_cases() {
        let empty: [u8; 0] = [];
        assert!(make_table_chunks(&empty, size(3)).is_empty());

        let items = ["a", "b"];
        assert_eq!(make_table_chunks(&items, size(5)), vec![&items[..]]);
        assert_eq!(
            make_table_chunks(&items, size(1)),
            vec![&["a"][..], &["b"][..]]
        );
    }

    #[test]
    fn test_make_table_chunks_concatenation_reproduces_input() {
        let items: Vec<usize> = (0..23).collect();
        for chunk_size in 1..=25 {
            let chunks = make_table_chunks(&items, size(chunk_size));
            let flattened: Vec<usize> = chunks.iter().flat_map(|c| c.iter().copied()).collect();
            assert_eq!(flattened, items);

            let (last, rest) = chunks.split_last().unwrap();
            assert!(rest.iter().all(|c| c.len() == chunk_size));
            assert!(!last.is_empty() && last.len() <= chunk_size);
        }
    }
}
