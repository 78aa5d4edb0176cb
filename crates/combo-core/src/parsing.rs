//! Small string-parsing helpers for the grammars the workspace's external
//! document formats use: ISO calendar dates, and the `+`/`-` run encoding
//! used for offset ordinals in both the component text format and the
//! catalog document.

/// Parse an ISO calendar date string (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success. No range validation is
/// performed here — callers decide what "valid" means for their channel.
pub fn parse_iso_date(s: &str) -> Option<(i32, u32, u32)> {
    let s = s.trim();
    let mut parts = s.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, month, day))
}

/// Parse a run of only `+` or only `-` characters into a signed, non-zero
/// offset ordinal: the magnitude is the run length, the sign is the
/// direction (`"---"` → `-3`, `"++"` → `2`).
///
/// Returns `None` if the string is empty or mixes the two characters (or
/// contains anything else).
pub fn parse_offset_run(s: &str) -> Option<i32> {
    if s.is_empty() {
        return None;
    }
    if s.bytes().all(|b| b == b'+') {
        Some(s.len() as i32)
    } else if s.bytes().all(|b| b == b'-') {
        Some(-(s.len() as i32))
    } else {
        None
    }
}

/// Parse a decimal integer amount followed by a single unit character,
/// e.g. `"3m"`, `"1y"`, `"60d"`. Returns `(amount, unit_char)` with the
/// unit character lower-cased.
pub fn parse_amount_unit(s: &str) -> Option<(u32, char)> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let unit_char = s.chars().last()?.to_ascii_lowercase();
    if !matches!(unit_char, 'y' | 'q' | 'm' | 'd') {
        return None;
    }
    let amount: u32 = s[..s.len() - 1].parse().ok()?;
    Some((amount, unit_char))
}
