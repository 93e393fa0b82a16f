//! Cleanup of raw chat-completion text before any parse attempt.
//!
//! Models frequently wrap the requested JSON in a markdown code fence or
//! sprinkle HTML-ish tags into the output. Normalization strips both so the
//! strict decoder sees the payload itself.

/// Normalizes one complete LLM response body.
///
/// Applied in order: surrounding whitespace is trimmed, a leading
/// ```` ```json ```` fence marker (case-insensitive) and any closing
/// ```` ``` ```` are removed, and `<...>` tag spans are stripped.
/// Total and idempotent; an empty result is a valid result.
pub fn normalize_response(raw: &str) -> String {
    let mut text = raw.trim();

    const FENCE_OPEN: &str = "```json";
    if text
        .get(..FENCE_OPEN.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(FENCE_OPEN))
    {
        text = &text[FENCE_OPEN.len()..];
    }

    let unfenced = text.replace("```", "");
    strip_tags(&unfenced).trim().to_string()
}

/// Removes `<...>` spans. Non-greedy: each `<` closes at the first
/// following `>`. A `<` with no closing `>` is kept as-is. Nested angle
/// brackets are not supported.
fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('>') {
            Some(close) if close > 0 => rest = &after[close + 1..],
            _ => {
                // "<>" or an unterminated "<" is not a tag
                out.push('<');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
