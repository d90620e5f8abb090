use super::event::TimelineEntry;

/// Merge back-to-back intervals of the same slot. A gap between two intervals
/// of one process is a real interruption and is kept.
pub fn consolidate(raw: &[TimelineEntry]) -> Vec<TimelineEntry> {
    let mut merged: Vec<TimelineEntry> = Vec::with_capacity(raw.len());

    for entry in raw {
        match merged.last_mut() {
            Some(prev) if prev.slot == entry.slot && prev.end_time == entry.start_time => {
                prev.end_time = entry.end_time;
            }
            _ => merged.push(*entry),
        }
    }

    merged
}
