//! Gap to the car ahead at the start of every lap.
//!
//! The dataset is sorted by (lap, position) so that, within a lap, the row
//! right before position `p` is position `p - 1`. The gap is then the
//! difference between the two lap start times. There is no lookup on
//! `position - 1`: with a hole in the running order (retirement) the gap is
//! taken to whichever car precedes in the sort.

use crate::models::gap::LapGap;
use crate::models::lap::LapRecord;
use crate::utils::time::delta_to_seconds;
use std::cmp::Ordering;

/// Sort key: lap ascending, position ascending, unknown positions last.
fn running_order(a: &LapRecord, b: &LapRecord) -> Ordering {
    a.lap_number
        .cmp(&b.lap_number)
        .then_with(|| match (a.position, b.position) {
            (Some(pa), Some(pb)) => pa.cmp(&pb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

/// Compute `GapInSeconds` for every lap.
///
/// Returns the laps re-ordered by (lap, position), each paired with its gap:
/// - unknown position → `None`
/// - lap 1 → `0.0`
/// - position 1 → `0.0`
/// - otherwise start time minus the start time of the previous row.
pub fn compute_gaps(laps: &[LapRecord]) -> Vec<LapGap> {
    let mut sorted = laps.to_vec();
    sorted.sort_by(running_order);

    let gaps: Vec<Option<f64>> = (0..sorted.len()).map(|i| gap_at(&sorted, i)).collect();

    sorted
        .into_iter()
        .zip(gaps)
        .map(|(lap, gap_in_seconds)| LapGap {
            lap,
            gap_in_seconds,
        })
        .collect()
}

fn gap_at(sorted: &[LapRecord], i: usize) -> Option<f64> {
    let lap = &sorted[i];

    let Some(position) = lap.position else {
        log::debug!(
            "{} lap {}: position not found, gap left empty",
            lap.driver,
            lap.lap_number
        );
        return None;
    };

    if lap.lap_number == 1 || position == 1 {
        return Some(0.0);
    }

    let Some(ahead) = i.checked_sub(1).map(|j| &sorted[j]) else {
        log::warn!(
            "{} lap {} P{}: no car ahead in the dataset",
            lap.driver,
            lap.lap_number,
            position
        );
        return None;
    };

    match (lap.lap_start_time, ahead.lap_start_time) {
        (Some(start), Some(ahead_start)) => {
            let gap = delta_to_seconds(start - ahead_start);
            log::debug!(
                "lap {}: {} P{} is {:.3}s behind {} ({:?})",
                lap.lap_number,
                lap.driver,
                position,
                gap,
                ahead.driver,
                ahead.position
            );
            Some(gap)
        }
        _ => {
            log::warn!(
                "{} lap {} P{}: missing lap start time for gap to {}",
                lap.driver,
                lap.lap_number,
                position,
                ahead.driver
            );
            None
        }
    }
}
