//! Property tests for table equality and filtering.

use proptest::prelude::*;
use tabledata_model::{ColumnFilter, Row, TableData};

fn table_strategy() -> impl Strategy<Value = (String, Vec<Vec<i64>>)> {
    (
        "[a-z][a-z0-9_]{0,11}",
        prop::collection::vec(prop::collection::vec(any::<i64>(), 3), 0..8),
    )
}

fn build(name: &str, rows: &[Vec<i64>]) -> TableData {
    TableData::new(
        name,
        ["alpha", "beta", "gamma"],
        rows.iter()
            .map(|row| Row::values(row.iter().copied()))
            .collect(),
    )
}

proptest! {
    #[test]
    fn equality_is_reflexive((name, rows) in table_strategy()) {
        let lhs = build(&name, &rows);
        let rhs = build(&name, &rows);
        prop_assert_eq!(&lhs, &rhs);
        prop_assert!(lhs.equals(&rhs, true));
        prop_assert!(lhs.equals(&rhs, false));
    }

    #[test]
    fn empty_filter_is_identity((name, rows) in table_strategy()) {
        let table = build(&name, &rows);
        let filtered = table.filter_column(&ColumnFilter::default()).unwrap();
        prop_assert_eq!(&filtered, &table);
    }

    #[test]
    fn filtered_columns_are_a_subset(
        (name, rows) in table_strategy(),
        patterns in prop::collection::vec("[a-z]{1,5}", 1..3),
        invert in any::<bool>(),
    ) {
        let table = build(&name, &rows);
        let mut filter = ColumnFilter::new(patterns);
        if invert {
            filter = filter.invert();
        }
        let filtered = table.filter_column(&filter).unwrap();

        prop_assert!(filtered.headers().iter().all(|h| table.headers().contains(h)));
        let width = filtered.num_columns();
        for row in filtered.rows().iter() {
            prop_assert_eq!(row.width(), Some(width));
        }
        prop_assert_eq!(filtered.table_name(), table.table_name());
    }
}
