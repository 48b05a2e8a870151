//! Directive and tag mini-languages.
//!
//! Directives opt a type into generation and configure its outputs; they are
//! `key::value` pairs embedded in the type's leading documentation. Tags are
//! `key:"value"` annotations attached to a dependency field. Both use a small
//! explicit grammar: a key is an identifier, a value is bare (up to the next
//! whitespace) or double-quoted (no escaping), and duplicate keys resolve
//! last-write-wins. Unrecognized keys are left for the caller to ignore.

use indexmap::IndexMap;

fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Extract the `key::value` option map from a documentation block.
pub fn parse_directives(doc: &str) -> IndexMap<String, String> {
    let mut map = IndexMap::new();
    let bytes = doc.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let start = i;
        while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let token = &doc[start..i];

        let Some(sep) = token.find("::") else {
            continue;
        };
        let key = &token[..sep];
        if !is_ident(key) {
            continue;
        }

        let value_start = start + sep + 2;
        if bytes.get(value_start) == Some(&b'"') {
            // Quoted value: runs to the next quote, whitespace included.
            let body = value_start + 1;
            match doc[body..].find('"') {
                Some(close) => {
                    map.insert(key.to_string(), doc[body..body + close].to_string());
                    i = body + close + 1;
                }
                None => break,
            }
        } else {
            let value = &token[sep + 2..];
            if !value.is_empty() {
                map.insert(key.to_string(), value.to_string());
            }
        }
    }

    map
}

/// Extract the `key:"value"` tag map from a field's verbatim source text.
pub fn parse_tags(text: &str) -> IndexMap<String, String> {
    let mut map = IndexMap::new();
    let bytes = text.as_bytes();
    let mut search = 0;

    while let Some(pos) = text[search..].find(":\"") {
        let colon = search + pos;

        let mut key_start = colon;
        while key_start > 0
            && (bytes[key_start - 1].is_ascii_alphanumeric() || bytes[key_start - 1] == b'_')
        {
            key_start -= 1;
        }
        let key = &text[key_start..colon];

        let value_start = colon + 2;
        let Some(close) = text[value_start..].find('"') else {
            break;
        };
        if is_ident(key) {
            map.insert(
                key.to_string(),
                text[value_start..value_start + close].to_string(),
            );
        }
        search = value_start + close + 1;
    }

    map
}
