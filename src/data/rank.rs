//! Top-N selection for tables and charts. Descending stable sort; ties keep
//! original index order so output is reproducible across builds.

use std::cmp::Ordering;

/// Top `n` records by an integer count field.
pub fn top_n_by_count<'a, T, F>(records: &'a [T], n: usize, key: F) -> Vec<&'a T>
where
    F: Fn(&T) -> u64,
{
    let mut ranked: Vec<&T> = records.iter().collect();
    ranked.sort_by(|left, right| key(right).cmp(&key(left)));
    ranked.truncate(n);
    ranked
}

/// Top `n` records by a derived rate. Records whose rate is unavailable
/// (zero denominator) sort after all rated records.
pub fn top_n_by_rate<'a, T, F>(records: &'a [T], n: usize, key: F) -> Vec<&'a T>
where
    F: Fn(&T) -> Option<f64>,
{
    let mut ranked: Vec<&T> = records.iter().collect();
    ranked.sort_by(|left, right| match (key(left), key(right)) {
        (Some(l), Some(r)) => r.total_cmp(&l),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    ranked.truncate(n);
    ranked
}
