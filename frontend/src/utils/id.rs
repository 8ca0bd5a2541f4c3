use std::cell::Cell;

thread_local! {
    static LAST_ISSUED: Cell<i64> = const { Cell::new(0) };
}

/// Millisecond timestamp that never repeats within the process.
///
/// Two records created inside the same millisecond get consecutive values.
pub fn next_timestamp() -> i64 {
    let now = chrono::Utc::now().timestamp_millis();
    LAST_ISSUED.with(|last| {
        let issued = now.max(last.get() + 1);
        last.set(issued);
        issued
    })
}

pub fn next_id(prefix: &str) -> String {
    format!("{}_{}", prefix, next_timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_stay_unique_in_a_tight_loop() {
        let ids: HashSet<String> = (0..500).map(|_| next_id("emp")).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn ids_carry_prefix() {
        assert!(next_id("leave").starts_with("leave_"));
    }
}
