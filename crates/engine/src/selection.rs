use herald_common::types::RecordSelection;

/// Pick the records of a validated batch that should produce notifications.
///
/// The API lists submissions newest first, so `All` walks the batch in
/// reverse to deliver the oldest change first.
pub fn select_records<T>(selection: RecordSelection, records: &[T]) -> Vec<&T> {
    match selection {
        RecordSelection::First => records.first().into_iter().collect(),
        RecordSelection::All => records.iter().rev().collect(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn named(name: &str) -> Value {
        json!({"homework_name": name, "status": "approved"})
    }

    #[test]
    fn test_first_takes_head_only() {
        let batch = [named("newest"), named("older")];
        let picked = select_records(RecordSelection::First, &batch);
        assert_eq!(picked, [&batch[0]]);
    }

    #[test]
    fn test_all_is_oldest_first() {
        let batch = [named("newest"), named("middle"), named("oldest")];
        let picked: Vec<_> = select_records(RecordSelection::All, &batch)
            .into_iter()
            .map(|r| r["homework_name"].as_str().unwrap())
            .collect();
        assert_eq!(picked, ["oldest", "middle", "newest"]);
    }

    #[test]
    fn test_empty_batch() {
        let empty: [Value; 0] = [];
        assert!(select_records(RecordSelection::First, &empty).is_empty());
        assert!(select_records(RecordSelection::All, &empty).is_empty());
    }
}
