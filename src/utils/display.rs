/// Indicator for a dependency row.
pub fn status_indicator(ready: bool, use_ascii: bool) -> &'static str {
    match (ready, use_ascii) {
        (true, false) => "✅",
        (false, false) => "❌",
        (true, true) => "[OK]",
        (false, true) => "[!!]",
    }
}

/// Truncates a path for display, keeping its end.
///
/// The file name is the useful part of a binary's location, so long paths
/// lose their leading directories first.
pub fn truncate_path_for_display(path: &str, max_len: usize) -> String {
    let char_count = path.chars().count();
    if char_count <= max_len {
        return path.to_string();
    }

    if max_len <= 3 {
        return ".".repeat(max_len);
    }

    let keep = max_len - 3;
    let tail: String = path.chars().skip(char_count - keep).collect();
    format!("...{}", tail)
}

/// First line of a possibly multi-line message.
pub fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or_default()
}
