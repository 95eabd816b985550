/// Reads a leading integer the way a lenient form parser does: optional
/// surrounding whitespace, optional sign, then as many digits as are present.
/// `"12abc"` is 12, `"2.9"` is 2, `"abc"` and `""` are `None`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// A record id from a path segment. Anything that is not a positive integer
/// matches no record.
pub fn parse_id(raw: &str) -> Option<u64> {
    parse_leading_int(raw)
        .filter(|id| *id > 0)
        .and_then(|id| u64::try_from(id).ok())
}

/// The `limit` query value. Only positive integers limit the listing.
pub fn parse_limit(raw: Option<&str>) -> Option<usize> {
    raw.and_then(parse_leading_int)
        .filter(|limit| *limit > 0)
        .and_then(|limit| usize::try_from(limit).ok())
}
