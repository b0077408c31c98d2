use std::cmp::Ordering;

use tracing::{debug, trace, warn};

use crate::core::PricePoint;

/// Drops non-finite samples, sorts ascending by time and deduplicates equal
/// timestamps keeping the later sample.
///
/// Feeds occasionally deliver unsorted or duplicated rows; rendering code
/// downstream assumes strictly ascending unique times.
#[must_use]
pub fn canonicalize(mut points: Vec<PricePoint>) -> Vec<PricePoint> {
    let original_len = points.len();
    points.retain(|point| point.time.is_finite() && point.close.is_finite());
    points.sort_by(|a, b| a.time.total_cmp(&b.time));

    let mut deduped: Vec<PricePoint> = Vec::with_capacity(points.len());
    let mut duplicate_count = 0_usize;
    for point in points {
        if let Some(last) = deduped.last_mut() {
            if point.time.total_cmp(&last.time) == Ordering::Equal {
                *last = point;
                duplicate_count += 1;
                continue;
            }
        }
        deduped.push(point);
    }

    let filtered_count = original_len.saturating_sub(deduped.len() + duplicate_count);
    if filtered_count > 0 || duplicate_count > 0 {
        warn!(
            filtered_count,
            duplicate_count,
            canonical_count = deduped.len(),
            "canonicalized series samples"
        );
    }
    deduped
}

/// Merges a historical segment with a live tail.
///
/// A non-empty live tail continues the most recent still-forming bar, so it
/// replaces the last historical sample; an empty historical segment yields
/// the live tail verbatim. A historical segment delivered newest-first is
/// reversed before merging. The merged result may be empty.
#[must_use]
pub fn merge_live_tail(historical: &[PricePoint], live_tail: &[PricePoint]) -> Vec<PricePoint> {
    let descending = historical.len() > 1
        && historical[0].time > historical[historical.len() - 1].time;

    let ordered: Vec<PricePoint> = if descending {
        historical.iter().rev().copied().collect()
    } else {
        historical.to_vec()
    };

    if live_tail.is_empty() {
        return ordered;
    }
    if ordered.is_empty() {
        return live_tail.to_vec();
    }

    let mut merged = Vec::with_capacity(ordered.len() - 1 + live_tail.len());
    merged.extend_from_slice(&ordered[..ordered.len() - 1]);
    merged.extend_from_slice(live_tail);
    merged
}

/// Returns the contiguous sub-sequence `[start, start + count)`.
///
/// Callers clamp `start`/`count` against the series length; out-of-range
/// inputs are saturated rather than panicking.
#[must_use]
pub fn visible_slice(series: &[PricePoint], start: usize, count: usize) -> &[PricePoint] {
    let start = start.min(series.len());
    let end = start.saturating_add(count).min(series.len());
    &series[start..end]
}

/// Owns the historical segment and the live tail of one chart series.
///
/// The merged view is materialized on mutation so gesture-driven reads stay
/// slice-cheap.
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    historical: Vec<PricePoint>,
    live_tail: Vec<PricePoint>,
    merged: Vec<PricePoint>,
}

impl SeriesStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the historical segment (series identity change).
    ///
    /// The live tail is discarded: a new symbol or period selection starts a
    /// fresh still-forming bar.
    pub fn replace_historical(&mut self, points: Vec<PricePoint>) {
        let canonical = canonicalize(points);
        debug!(count = canonical.len(), "replace historical series");
        self.historical = canonical;
        self.live_tail.clear();
        self.rebuild_merged();
    }

    /// Applies one live tick using realtime-update semantics:
    /// - appends when `point.time` is newer than the newest merged sample
    /// - overwrites the still-forming bar when `point.time` is equal
    /// - drops out-of-order ticks (`point.time` older than the newest sample)
    ///
    /// Returns `true` when the merged series grew by one sample.
    pub fn push_live(&mut self, point: PricePoint) -> bool {
        if !point.time.is_finite() || !point.close.is_finite() {
            warn!("dropping non-finite live sample");
            return false;
        }

        let ordering = self
            .merged
            .last()
            .map_or(Ordering::Greater, |last| point.time.total_cmp(&last.time));

        match ordering {
            Ordering::Less => {
                trace!(time = point.time, "dropping out-of-order live sample");
                false
            }
            Ordering::Equal => {
                match self.live_tail.last_mut() {
                    Some(last) if last.time == point.time => *last = point,
                    _ => self.live_tail.push(point),
                }
                self.rebuild_merged();
                false
            }
            Ordering::Greater => {
                self.live_tail.push(point);
                self.rebuild_merged();
                true
            }
        }
    }

    #[must_use]
    pub fn merged(&self) -> &[PricePoint] {
        &self.merged
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.merged.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
    }

    fn rebuild_merged(&mut self) {
        self.merged = merge_live_tail(&self.historical, &self.live_tail);
    }
}
