use std::collections::BTreeMap;

pub fn mean(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let total: f64 = values.iter().map(|&v| v as f64).sum();
    total / values.len() as f64
}

/// Middle value of a sorted copy; even lengths average the two middle values.
pub fn median(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}

/// Most frequent value. Ties go to the smallest value; when nothing repeats
/// there is no mode and the result is 0.
pub fn mode(values: &[u64]) -> u64 {
    let mut counts: BTreeMap<u64, usize> = BTreeMap::new();
    for &value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut best: Option<(u64, usize)> = None;
    for (value, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }

    match best {
        Some((value, count)) if count > 1 => value,
        _ => 0,
    }
}
