//! Code/slug keyed lookup maps for cross-table joins. Duplicate keys are
//! last-write-wins; the source data occasionally carries minor duplication.

use std::collections::HashMap;
use std::hash::Hash;

/// Map records by a key selector for O(1) joins against another table.
/// Borrows the records; no iteration-order guarantee.
pub fn index_by<'a, T, K, F>(records: &'a [T], key: F) -> HashMap<K, &'a T>
where
    K: Eq + Hash,
    F: Fn(&'a T) -> K,
{
    let mut map = HashMap::with_capacity(records.len());
    for record in records {
        map.insert(key(record), record);
    }
    map
}

/// Clone records into an owned map for caches that outlive the source list.
pub fn index_by_owned<T, K, F>(records: &[T], key: F) -> HashMap<K, T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut map = HashMap::with_capacity(records.len());
    for record in records {
        map.insert(key(record), record.clone());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::{index_by, index_by_owned};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        code: &'static str,
        cases: u64,
    }

    #[test]
    fn every_indexed_code_round_trips_to_its_own_record() {
        let rows = vec![
            Row { code: "GT", cases: 120 },
            Row { code: "HN", cases: 80 },
            Row { code: "MX", cases: 300 },
        ];

        let by_code = index_by(&rows, |r| r.code);
        for row in &rows {
            let found = by_code.get(row.code).expect("indexed code should resolve");
            assert_eq!(found.code, row.code);
        }
        assert_eq!(by_code.len(), rows.len());
    }

    #[test]
    fn duplicate_keys_keep_the_last_record() {
        let rows = vec![
            Row { code: "GT", cases: 1 },
            Row { code: "GT", cases: 2 },
        ];

        let by_code = index_by(&rows, |r| r.code);
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code["GT"].cases, 2);

        let owned = index_by_owned(&rows, |r| r.code);
        assert_eq!(owned["GT"].cases, 2);
    }
}
