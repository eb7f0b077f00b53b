//! Group-by and join primitives shared by the metric functions.

use std::collections::HashMap;
use std::hash::Hash;

/// Relative change `(target - comparison) / comparison`.
///
/// Returns 0 when the comparison value is zero, negative or NaN.
pub fn growth_rate(target: f64, comparison: f64) -> f64 {
    if comparison > 0.0 {
        (target - comparison) / comparison
    } else {
        0.0
    }
}

/// Growth in percent between two possibly undefined values (e.g. means of
/// empty groups). Any undefined side yields 0.
pub fn growth_percentage(target: Option<f64>, comparison: Option<f64>) -> f64 {
    match (target, comparison) {
        (Some(target), Some(comparison)) if target.is_finite() => {
            growth_rate(target, comparison) * 100.0
        }
        _ => 0.0,
    }
}

/// Arithmetic mean, `None` for an empty input
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Sum values per key
pub fn group_sum<K, I>(items: I) -> HashMap<K, f64>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut totals: HashMap<K, f64> = HashMap::new();
    for (key, value) in items {
        *totals.entry(key).or_insert(0.0) += value;
    }
    totals
}

/// Order totals descending; equal totals are ordered by key ascending so
/// the output is deterministic.
pub fn sorted_desc<K: Ord>(totals: HashMap<K, f64>) -> Vec<(K, f64)> {
    let mut rows: Vec<(K, f64)> = totals.into_iter().collect();
    rows.sort_by(|(ka, va), (kb, vb)| vb.total_cmp(va).then_with(|| ka.cmp(kb)));
    rows
}

/// Build a lookup from key to every row carrying that key
pub fn index_by<'a, T, F>(rows: &'a [T], key: F) -> HashMap<&'a str, Vec<&'a T>>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut index: HashMap<&'a str, Vec<&'a T>> = HashMap::with_capacity(rows.len());
    for row in rows {
        index.entry(key(row)).or_default().push(row);
    }
    index
}

/// Inner join on a string key.
///
/// The lookup is built over the smaller side. Rows without a partner are
/// dropped and keys matching several rows produce one pair per match, the
/// same as a relational inner join.
pub fn inner_join<'a, L, R, FL, FR>(
    left: &[L],
    right: &'a [R],
    left_key: FL,
    right_key: FR,
) -> Vec<(L, &'a R)>
where
    L: Copy,
    FL: Fn(L) -> &'a str,
    FR: Fn(&'a R) -> &'a str,
{
    let mut joined = Vec::new();

    if right.len() <= left.len() {
        let lookup = index_by(right, right_key);
        for l in left {
            if let Some(matches) = lookup.get(left_key(*l)) {
                joined.extend(matches.iter().map(|r| (*l, *r)));
            }
        }
    } else {
        let mut lookup: HashMap<&'a str, Vec<L>> = HashMap::with_capacity(left.len());
        for l in left {
            lookup.entry(left_key(*l)).or_default().push(*l);
        }
        for r in right {
            if let Some(matches) = lookup.get(right_key(r)) {
                joined.extend(matches.iter().map(|l| (*l, r)));
            }
        }
    }

    joined
}
