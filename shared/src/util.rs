/// Get the current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Get the current UTC time as an RFC 3339 string
///
/// Used for `created_at` stamps on persisted records.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Generate a time-derived unique ID with the given prefix.
///
/// Layout: `{prefix}{millis}{rand:03}` where `millis` is the current UTC
/// timestamp in milliseconds and `rand` is a 3-digit random suffix so two
/// records created within the same millisecond do not collide. IDs sort
/// chronologically by construction.
pub fn time_id(prefix: &str) -> String {
    use rand::Rng;
    let rand_bits: u16 = rand::thread_rng().gen_range(0..1000);
    format!("{}{}{:03}", prefix, now_millis(), rand_bits)
}
