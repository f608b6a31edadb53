//! Parallel, all-or-nothing profile retrieval.

use crate::{ElevProfError, ProfileSeries};
use log::warn;

/// Runs `fetch` once per source, in parallel, and collects the
/// resulting series in source order.
///
/// The batch succeeds or fails as a whole: every request runs to
/// completion, then the first failure (if any) is returned, so a
/// chart is never built from a partial set of sources.
pub fn batch<F>(sources: &[String], fetch: F) -> Result<Vec<ProfileSeries>, ElevProfError>
where
    F: Fn(&str) -> Result<ProfileSeries, ElevProfError> + Sync,
{
    if sources.is_empty() {
        return Err(ElevProfError::NoSources);
    }

    let fetch = &fetch;
    let results: Vec<Result<ProfileSeries, ElevProfError>> = std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|source| scope.spawn(move || fetch(source)))
            .collect();
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    });

    let mut series = Vec::with_capacity(results.len());
    for (source, result) in sources.iter().zip(results) {
        match result {
            Ok(profile) => series.push(profile),
            Err(error) => {
                warn!("profile batch failed on {source}: {error}");
                return Err(error);
            }
        }
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::batch;
    use crate::{ElevProfError, ProfileSeries};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn series(source: &str) -> ProfileSeries {
        ProfileSeries {
            source: source.to_string(),
            points: vec![(0.0, 512.3), (90.0, 520.1)],
        }
    }

    #[test]
    fn test_empty_batch_is_rejected() {
        let result = batch(&[], |source| Ok(series(source)));
        assert!(matches!(result, Err(ElevProfError::NoSources)));
    }

    #[test]
    fn test_series_come_back_in_source_order() {
        let sources = ["dem_post_cog.tif", "dem_pre_cog.tif"].map(String::from);
        let profiles = batch(&sources, |source| Ok(series(source))).unwrap();
        let order: Vec<&str> = profiles.iter().map(|p| p.source.as_str()).collect();
        assert_eq!(order, ["dem_post_cog.tif", "dem_pre_cog.tif"]);
    }

    #[test]
    fn test_one_failure_fails_the_whole_batch() {
        let sources = ["pre", "post", "diff"].map(String::from);
        let attempts = AtomicUsize::new(0);
        let result = batch(&sources, |source| {
            attempts.fetch_add(1, Ordering::SeqCst);
            if source == "post" {
                Err(ElevProfError::ShortPath(1))
            } else {
                Ok(series(source))
            }
        });
        assert!(matches!(result, Err(ElevProfError::ShortPath(1))));
        // Every request still ran; failure is reported only once the
        // whole batch has settled.
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }
}
