//! Generic group-by-key-then-reduce utilities shared by the chart branches.

use std::collections::HashMap;
use std::hash::Hash;

/// Sum an extracted value per key. Keys with no rows are simply absent from
/// the output, a zero total is never synthesized.
pub fn sum_by<R, K, F, V>(rows: &[R], key: F, value: V) -> HashMap<K, u64>
where
    K: Eq + Hash,
    F: Fn(&R) -> K,
    V: Fn(&R) -> u64,
{
    let mut totals: HashMap<K, u64> = HashMap::new();
    for row in rows {
        *totals.entry(key(row)).or_insert(0) += value(row);
    }
    totals
}

/// Arithmetic mean of an extracted value per key. Only keys with at least
/// one row appear in the output, so the division is always well-defined.
pub fn mean_by<R, K, F, V>(rows: &[R], key: F, value: V) -> HashMap<K, f64>
where
    K: Eq + Hash,
    F: Fn(&R) -> K,
    V: Fn(&R) -> f64,
{
    let mut accumulators: HashMap<K, (f64, usize)> = HashMap::new();
    for row in rows {
        let entry = accumulators.entry(key(row)).or_insert((0.0, 0));
        entry.0 += value(row);
        entry.1 += 1;
    }

    accumulators
        .into_iter()
        .map(|(key, (sum, len))| (key, sum / len as f64))
        .collect()
}
