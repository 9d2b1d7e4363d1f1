use chrono::{DateTime, Duration, Utc};

/// Timestamp for a mutation that must land strictly after `previous`.
///
/// Two mutations inside the same clock tick would otherwise leave
/// `updated_at` unchanged.
pub fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
