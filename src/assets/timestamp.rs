use std::sync::LazyLock;

use regex::Regex;

/// Label used when a filename carries no recognizable timestamp.
pub const UNKNOWN_TIMESTAMP: &str = "Unknown timestamp";

// ASCII digits only; `\d` would also accept other Unicode decimal digits.
static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{4}-[0-9]{2}-[0-9]{2})\s*([0-9]{6})").expect("timestamp pattern is valid")
});

/// Extract a display timestamp from a filename.
///
/// Looks for `YYYY-MM-DD`, optional whitespace, then six digits `HHMMSS` anywhere in the name and
/// returns `"YYYY-MM-DD HH:MM:SS"`. The digit groups are sliced positionally and never range
/// checked, so `"999999"` becomes `"99:99:99"`. Names without a match yield
/// [`UNKNOWN_TIMESTAMP`].
pub fn extract_timestamp(file_name: &str) -> String {
    let Some(caps) = TIMESTAMP_RE.captures(file_name) else {
        return UNKNOWN_TIMESTAMP.to_string();
    };
    let date = &caps[1];
    let time = &caps[2];
    format!("{date} {}:{}:{}", &time[0..2], &time[2..4], &time[4..6])
}

#[cfg(test)]
#[path = "../../tests/unit/assets/timestamp.rs"]
mod tests;
