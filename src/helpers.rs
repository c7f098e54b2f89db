/// Display-character limit for the error path in the status line.
pub const STATUS_PATH_LIMIT: usize = 30;

/// Display-character limit for a recent-item menu title.
pub const RECENT_TITLE_LIMIT: usize = 40;

/// Shortens `name` to at most `limit` display characters by eliding the
/// middle with `...`. Names at or under the limit are returned verbatim.
pub fn short_name(name: &str, limit: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= limit {
        return name.to_string();
    }
    let front = limit.saturating_sub(3) / 2;
    let back = limit.saturating_sub(3) - front;
    let mut out = String::with_capacity(limit);
    out.extend(&chars[..front]);
    out.push_str("...");
    out.extend(&chars[chars.len() - back..]);
    out
}
