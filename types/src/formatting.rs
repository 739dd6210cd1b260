//! Display formatting shared by the terminal host and the web front-end.

/// Format a millisecond offset as a timeline stamp.
///
/// - Below one second: `"800ms"`
/// - Otherwise seconds with two decimals: `"2.20s"`
///
/// # Examples
/// ```
/// use lmcgtfy_types::formatting::format_offset_ms;
/// assert_eq!(format_offset_ms(0), "0ms");
/// assert_eq!(format_offset_ms(800), "800ms");
/// assert_eq!(format_offset_ms(2_200), "2.20s");
/// assert_eq!(format_offset_ms(12_345), "12.35s");
/// ```
pub fn format_offset_ms(ms: u64) -> String {
    if ms < 1_000 {
        format!("{}ms", ms)
    } else {
        format!("{:.2}s", ms as f64 / 1_000.0)
    }
}

/// Shorten a long string to at most `max_chars` characters, keeping both ends.
///
/// Counts characters, not bytes, so multi-byte text is never split.
///
/// # Examples
/// ```
/// use lmcgtfy_types::formatting::ellipsize_middle;
/// assert_eq!(ellipsize_middle("short", 10), "short");
/// assert_eq!(ellipsize_middle("abcdefghij", 7), "abc…hij");
/// assert_eq!(ellipsize_middle("ünïcödé", 5), "ün…dé");
/// ```
pub fn ellipsize_middle(s: &str, max_chars: usize) -> String {
    let count = s.chars().count();
    if count <= max_chars || max_chars < 3 {
        return s.to_string();
    }
    let keep = max_chars - 1;
    let head = keep.div_ceil(2);
    let tail = keep / 2;

    let mut out: String = s.chars().take(head).collect();
    out.push('…');
    out.extend(s.chars().skip(count - tail));
    out
}
