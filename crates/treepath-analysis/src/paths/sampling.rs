//! Uniform subsampling and tiered quota filling.

use rand::Rng;

/// Keep at most `amount` items, chosen uniformly without replacement.
/// Survivors keep their relative order; a bucket that already fits
/// is returned untouched and consumes no randomness.
pub fn sample_up_to<T, R: Rng + ?Sized>(bucket: Vec<T>, amount: usize, rng: &mut R) -> Vec<T> {
    if bucket.len() <= amount {
        return bucket;
    }
    let mut keep = vec![false; bucket.len()];
    for index in rand::seq::index::sample(rng, bucket.len(), amount) {
        keep[index] = true;
    }
    bucket
        .into_iter()
        .zip(keep)
        .filter_map(|(item, kept)| kept.then_some(item))
        .collect()
}

/// Fill up to `threshold` slots from `tiers` in priority order, subsampling
/// whichever tier overflows the remaining margin.
pub fn fill_quota<T, R: Rng + ?Sized>(tiers: Vec<Vec<T>>, threshold: usize, rng: &mut R) -> Vec<T> {
    let mut selected: Vec<T> = Vec::with_capacity(threshold);
    for tier in tiers {
        let margin = threshold.saturating_sub(selected.len());
        if margin == 0 {
            break;
        }
        selected.extend(sample_up_to(tier, margin, rng));
    }
    selected
}
