use serde::Serialize;

/// Upper bound on how much of a raw response body ends up in a log line.
pub(crate) const BODY_PREVIEW_CHARS: usize = 300;

/// Renders `value` as pretty JSON and hands it to `log_action`, only when DEBUG is enabled.
pub(crate) fn with_pretty_json_debug<T, F>(value: &T, log_action: F)
where
    T: Serialize + ?Sized,
    F: FnOnce(&str),
{
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }

    let pretty_json = serde_json::to_string_pretty(value)
        .unwrap_or_else(|error| format!("<pretty serialize failed: {error}>"));
    log_action(pretty_json.as_str());
}

/// Lossy UTF-8 view of a body, cut to `BODY_PREVIEW_CHARS` characters.
pub(crate) fn body_preview(bytes: &[u8]) -> String {
    let raw = String::from_utf8_lossy(bytes);
    format!("{:.len$}", raw, len = BODY_PREVIEW_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_on_char_boundary() {
        let long = "é".repeat(BODY_PREVIEW_CHARS + 10);
        let preview = body_preview(long.as_bytes());
        assert_eq!(preview.chars().count(), BODY_PREVIEW_CHARS);

        assert_eq!(body_preview(b"boom"), "boom");
    }
}
