/// Maps the provider's free-text status to a boolean.
///
/// Only "active" and "inactive" are recognized; anything else is left for
/// record construction to judge.
pub fn parse_status(raw: &str) -> Option<bool> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("active") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("inactive") {
        Some(false)
    } else {
        None
    }
}
