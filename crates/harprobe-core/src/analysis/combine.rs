use super::{CaptureResults, CombinedResults};
use crate::{Error, Result};
use std::collections::BTreeSet;

/// Values reported by every capture.
///
/// A single capture yields its own lists unchanged.
pub fn combine_results(results: &[CaptureResults]) -> Result<CombinedResults> {
    if results.is_empty() {
        return Err(Error::Analysis("no captures to combine".to_string()));
    }

    tracing::debug!("Combining results of {} captures", results.len());

    Ok(CombinedResults {
        common_third_party_domains: intersect(results, |r| r.third_party_domains.as_slice()),
        common_third_party_entities: intersect(results, |r| r.third_party_entities.as_slice()),
        common_cookies: intersect(results, |r| r.potential_tracking_cookies.as_slice()),
    })
}

fn intersect<T, F>(results: &[CaptureResults], field: F) -> Vec<T>
where
    T: Ord + Clone,
    F: Fn(&CaptureResults) -> &[T],
{
    let Some((first, rest)) = results.split_first() else {
        return Vec::new();
    };

    let mut common: BTreeSet<T> = field(first).iter().cloned().collect();
    for other in rest {
        let values: BTreeSet<&T> = field(other).iter().collect();
        common.retain(|value| values.contains(value));
    }

    common.into_iter().collect()
}
