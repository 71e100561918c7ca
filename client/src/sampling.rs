//! Random id selection for batches

use std::collections::HashSet;

use rand::Rng;

use crate::error::FetchError;

/// Pick `count` distinct ids in `[1, catalog_size]` by rejection sampling.
///
/// `draw` yields candidate ids; duplicates are skipped, so it is called until
/// `count` distinct values have been seen. Ids come back in first-draw order.
pub fn pick_unique_ids<F>(
    count: usize,
    catalog_size: u32,
    mut draw: F,
) -> Result<Vec<u32>, FetchError>
where
    F: FnMut() -> u32,
{
    if count as u64 > u64::from(catalog_size) {
        return Err(FetchError::InvalidBatch {
            count,
            catalog_size,
        });
    }

    let mut seen = HashSet::with_capacity(count);
    let mut ids = Vec::with_capacity(count);

    while ids.len() < count {
        let id = draw();
        debug_assert!((1..=catalog_size).contains(&id));
        if seen.insert(id) {
            ids.push(id);
        }
    }

    Ok(ids)
}

/// [`pick_unique_ids`] driven by the thread-local RNG
pub fn random_ids(count: usize, catalog_size: u32) -> Result<Vec<u32>, FetchError> {
    let mut rng = rand::thread_rng();
    pick_unique_ids(count, catalog_size, || rng.gen_range(1..=catalog_size))
}
