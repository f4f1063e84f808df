use admin_core::{Record, RecordId};

/// Give every record without an id the placeholder for its position.
///
/// Positions are unique within one slice, so the placeholders are too.
/// Returns how many placeholders were assigned.
pub fn assign_placeholder_ids<R: Record>(records: &mut [R]) -> usize {
    let mut assigned = 0;
    for (position, record) in records.iter_mut().enumerate() {
        if record.id().is_none() {
            record.set_id(RecordId::placeholder(position));
            assigned += 1;
        }
    }
    assigned
}
