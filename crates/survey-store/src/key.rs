use time::OffsetDateTime;

/// Fixed collection namespace under which submissions are stored.
pub const COLLECTION: &str = "surveys";

/// Time-derived key for one submission, e.g. `surveys/1754640000123`.
///
/// Uniqueness is best-effort: two submissions within the same millisecond
/// share a key and the later write wins.
pub fn submission_key() -> String {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    format!("{COLLECTION}/{millis}")
}
