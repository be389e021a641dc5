use chrono::{DateTime, Utc};

// Longest tokens first so `YYYY` wins over `YY` and `MMMM` over `MM`.
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("MMMM", "%B"),
    ("dddd", "%A"),
    ("MMM", "%b"),
    ("ddd", "%a"),
    ("SSS", "%3f"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("HH", "%H"),
    ("hh", "%I"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("ZZ", "%z"),
    ("M", "%-m"),
    ("D", "%-d"),
    ("H", "%-H"),
    ("h", "%-I"),
    ("m", "%-M"),
    ("s", "%-S"),
    ("A", "%p"),
    ("a", "%P"),
    ("Z", "%:z"),
];

/// Translate a moment-style date pattern (`"YYYY-MM-DD HH:mm"`) into a chrono
/// `strftime` pattern (`"%Y-%m-%d %H:%M"`).
///
/// Text inside square brackets is copied literally; unknown characters pass
/// through unchanged.
#[must_use]
pub fn moment_to_strftime(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    while let Some(ch) = rest.chars().next() {
        if ch == '[' {
            let body = &rest[1..];
            let end = body.find(']').unwrap_or(body.len());
            push_literal(&mut out, &body[..end]);
            rest = body.get(end + 1..).unwrap_or("");
            continue;
        }
        if let Some((token, spec)) = TOKENS.iter().find(|(t, _)| rest.starts_with(t)) {
            out.push_str(spec);
            rest = &rest[token.len()..];
            continue;
        }
        push_literal(&mut out, &rest[..ch.len_utf8()]);
        rest = &rest[ch.len_utf8()..];
    }
    out
}

fn push_literal(out: &mut String, text: &str) {
    for ch in text.chars() {
        if ch == '%' {
            out.push_str("%%");
        } else {
            out.push(ch);
        }
    }
}

/// Render `instant` with a moment-style pattern.
#[must_use]
pub fn format_with_moment_pattern(instant: DateTime<Utc>, pattern: &str) -> String {
    instant.format(&moment_to_strftime(pattern)).to_string()
}
