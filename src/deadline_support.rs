use std::time::{Duration, Instant};

/// Checks if a deadline was exceeded.
pub fn deadline_exceeded(deadline: Option<Instant>) -> bool {
    match deadline {
        Some(deadline) => Instant::now() > deadline,
        None => false,
    }
}

/// Converts a duration into a deadline.
///
/// Durations too large to be represented as an instant are treated as
/// "no deadline".
pub fn duration_to_deadline(add: Duration) -> Option<Instant> {
    Instant::now().checked_add(add)
}

#[test]
fn test_deadlines() {
    assert!(!deadline_exceeded(None));
    assert!(!deadline_exceeded(duration_to_deadline(Duration::from_secs(3600))));
    let past = Instant::now()
        .checked_sub(Duration::from_millis(10))
        .unwrap_or_else(Instant::now);
    std::thread::sleep(Duration::from_millis(1));
    assert!(deadline_exceeded(Some(past)));
}
