//! Quick-reply option markers.
//!
//! Responses embed machine-readable markers in the literal form
//! `<<OPTION:label>>`, concatenated directly after the prose with no
//! separator. Clients parse the markers out to render quick-reply buttons
//! and strip them from the displayed text.

const OPEN: &str = "<<OPTION:";
const CLOSE: &str = ">>";

/// Render a single option marker.
pub fn option(label: &str) -> String {
    format!("{OPEN}{label}{CLOSE}")
}

/// Render a run of option markers, concatenated with no separator.
pub fn options(labels: &[&str]) -> String {
    labels.iter().map(|l| option(l)).collect()
}

/// Extract every option label from a response, in order.
pub fn extract(text: &str) -> Vec<String> {
    let mut labels = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find(OPEN) {
        let after = &rest[start + OPEN.len()..];
        match after.find(CLOSE) {
            Some(end) => {
                labels.push(after[..end].to_string());
                rest = &after[end + CLOSE.len()..];
            }
            None => break,
        }
    }
    labels
}

/// Remove all option markers, leaving the prose.
pub fn strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + OPEN.len()..];
        match after.find(CLOSE) {
            Some(end) => rest = &after[end + CLOSE.len()..],
            None => {
                // Unterminated marker — keep it verbatim
                out.push_str(&rest[start..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}
