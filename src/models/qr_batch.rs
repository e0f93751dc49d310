use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QrBatch {
    pub id: String,
    pub name: String, // e.g. "Batch 2024-07-01-A"
    pub count: u64,
    pub start_id: String, // First unique_id in the batch
    pub end_id: String,   // Last unique_id in the batch
    pub created_at: i64,
}

impl QrBatch {
    /// Identifier for the batch created after `existing` earlier batches.
    pub fn id_for(existing: usize) -> String {
        format!("batch{}", existing + 1)
    }

    /// Display name built from the creation day and a letter cycling A..Z.
    ///
    /// The letter wraps after 26 batches, so names can repeat within a day.
    pub fn name_for(date: &str, existing: usize) -> String {
        let letter = char::from(b'A' + (existing % 26) as u8);
        format!("Batch {}-{}", date, letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_cycle_through_the_alphabet() {
        assert_eq!(QrBatch::name_for("2024-07-01", 0), "Batch 2024-07-01-A");
        assert_eq!(QrBatch::name_for("2024-07-01", 25), "Batch 2024-07-01-Z");
        assert_eq!(QrBatch::name_for("2024-07-01", 26), "Batch 2024-07-01-A");
    }

    #[test]
    fn ids_follow_creation_order() {
        assert_eq!(QrBatch::id_for(0), "batch1");
        assert_eq!(QrBatch::id_for(9), "batch10");
    }
}
