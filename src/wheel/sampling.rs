use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::MenuItem;

/// Draw an unordered random sample of up to `max` items.
///
/// Shuffle-and-truncate, so every item is equally likely to appear.
/// Generic over the RNG so tests can seed a `StdRng` while production
/// passes `thread_rng`.
pub fn sample_display_items<R: Rng>(rng: &mut R, items: &[MenuItem], max: usize) -> Vec<MenuItem> {
    let mut pool: Vec<MenuItem> = items.to_vec();
    pool.shuffle(rng);
    pool.truncate(max);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_menu;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_caps_at_max() {
        let menu = builtin_menu();
        let mut rng = StdRng::seed_from_u64(42);
        let sample = sample_display_items(&mut rng, &menu, 12);
        assert_eq!(sample.len(), 12);
    }

    #[test]
    fn test_sample_returns_all_when_small() {
        let menu: Vec<_> = builtin_menu().into_iter().take(5).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let sample = sample_display_items(&mut rng, &menu, 12);
        assert_eq!(sample.len(), 5);
    }

    #[test]
    fn test_sample_draws_from_source_without_duplicates() {
        let menu = builtin_menu();
        let mut rng = StdRng::seed_from_u64(7);
        let sample = sample_display_items(&mut rng, &menu, 12);

        let mut ids: Vec<u32> = sample.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), sample.len());
        assert!(sample.iter().all(|s| menu.iter().any(|m| m.id == s.id)));
    }

    #[test]
    fn test_sample_is_deterministic_under_seed() {
        let menu = builtin_menu();
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);

        let sample_a = sample_display_items(&mut rng_a, &menu, 12);
        let sample_b = sample_display_items(&mut rng_b, &menu, 12);

        let ids_a: Vec<u32> = sample_a.iter().map(|i| i.id).collect();
        let ids_b: Vec<u32> = sample_b.iter().map(|i| i.id).collect();
        assert_eq!(ids_a, ids_b);
    }
}
