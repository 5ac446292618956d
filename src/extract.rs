//! Markup stripping.
//!
//! A hand-rolled scanner, not a DOM: the only capability the pipeline
//! needs is "given markup text, produce the text-node fragments". Tags
//! and comments are dropped, and the contents of `<script>` and `<style>`
//! elements are skipped wholesale since code and stylesheets are not
//! prose. Total over any input; an unterminated tag, comment, or raw-text
//! element swallows the remainder rather than erroring.

/// Extract the text-node fragments from `html`, in document order.
/// Whitespace-only runs between tags are not reported.
pub fn extract_text(html: &str) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        push_fragment(&mut fragments, &rest[..open]);
        let tag = &rest[open..];

        if let Some(after) = tag.strip_prefix("<!--") {
            match after.find("-->") {
                Some(end) => rest = &after[end + 3..],
                None => return fragments,
            }
            continue;
        }

        let Some(close) = tag.find('>') else {
            return fragments;
        };
        let name = tag_name(&tag[1..close]);
        rest = &tag[close + 1..];
        if name == "script" || name == "style" {
            match skip_raw_text(rest, &name) {
                Some(after) => rest = after,
                None => return fragments,
            }
        }
    }

    push_fragment(&mut fragments, rest);
    fragments
}

fn push_fragment(fragments: &mut Vec<String>, text: &str) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        fragments.push(trimmed.to_string());
    }
}

/// Lowercased element name of a tag body, e.g. `SCRIPT src=x` -> `script`.
fn tag_name(body: &str) -> String {
    body.chars()
        .take_while(|c| !c.is_whitespace() && *c != '/' && *c != '>')
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Advance past the closing tag of a raw-text element. `</script foo>` and
/// `</SCRIPT>` both close a `script` element; markup in between is ignored.
fn skip_raw_text<'a>(rest: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("</{name}");
    // ASCII lowercasing keeps byte offsets stable
    let start = rest.to_ascii_lowercase().find(&needle)?;
    let after = &rest[start..];
    let close = after.find('>')?;
    Some(&after[close + 1..])
}
