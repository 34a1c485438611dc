//! Group-by helpers over post slices
//!
//! Results are `BTreeMap`s so iteration order is the sorted key order used by
//! the output tables.

use super::normalizer::Post;
use std::collections::BTreeMap;

/// Arithmetic mean; an empty input is 0.0
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

pub fn grouped_counts<K, F>(posts: &[Post], key_fn: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: Fn(&Post) -> K,
{
    let mut counts = BTreeMap::new();
    for post in posts {
        *counts.entry(key_fn(post)).or_insert(0) += 1;
    }
    counts
}

pub fn grouped_means<K, F, V>(posts: &[Post], key_fn: F, value_fn: V) -> BTreeMap<K, f64>
where
    K: Ord,
    F: Fn(&Post) -> K,
    V: Fn(&Post) -> f64,
{
    let mut buckets: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for post in posts {
        buckets.entry(key_fn(post)).or_default().push(value_fn(post));
    }
    buckets
        .into_iter()
        .map(|(key, values)| (key, mean(values)))
        .collect()
}
