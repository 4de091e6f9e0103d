// src/core/html.rs
//
// Tolerant, case-insensitive tag scanning. No DOM: a block runs from an
// opener to its matching closer, counting same-tag nesting. Table rows and
// cells also end where HTML ends them implicitly (next row/cell, end of the
// enclosing table), with tables nested inside them skipped whole.

use super::sanitize::{normalize_entities, normalize_ws};

/// Openers/closers that end a row or cell whose own closer is omitted.
const ROW_ENDERS: &[&str] = &["<tr", "</table", "<tbody", "</tbody", "<thead", "</thead", "<tfoot", "</tfoot"];
const CELL_ENDERS: &[&str] = &["<td", "<th", "<tr", "</tr", "</table", "<tbody", "</tbody", "</thead", "<tfoot", "</tfoot"];

fn implicit_enders(tag: &str) -> &'static [&'static str] {
    match tag {
        "tr" => ROW_ENDERS,
        "td" | "th" => CELL_ENDERS,
        _ => &[],
    }
}

/// `rest` starts with tag prefix `name` ("<tr" but not "<track").
fn starts_tag(rest: &str, name: &str) -> bool {
    rest.starts_with(name)
        && !rest.as_bytes().get(name.len()).is_some_and(|b| b.is_ascii_alphanumeric())
}

fn next_block_in(s: &str, lc: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let mut search = from;
    let start = loop {
        let start = lc.get(search..)?.find(open)? + search;
        if starts_tag(&lc[start..], open) {
            break start;
        }
        search = start + open.len();
    };
    let open_end = s[start..].find('>')? + start + 1;
    let end = block_end(lc, open, close, open_end)?;
    Some((start, end))
}

/// End offset (exclusive) of the block whose opener finished at `from`.
fn block_end(lc: &str, open: &str, close: &str, from: usize) -> Option<usize> {
    let enders = implicit_enders(open.trim_start_matches('<'));
    let mut depth = 0usize;
    let mut pos = from;

    while let Some(rel) = lc[pos..].find('<') {
        let at = pos + rel;
        let rest = &lc[at..];

        if enders.is_empty() {
            if starts_tag(rest, open) {
                depth += 1;
            } else if rest.starts_with(close) {
                if depth == 0 {
                    return Some(at + close.len());
                }
                depth -= 1;
            }
        } else if starts_tag(rest, "<table") {
            depth += 1;
        } else if depth > 0 {
            if starts_tag(rest, "</table") {
                depth -= 1;
            }
        } else if rest.starts_with(close) {
            return Some(at + close.len());
        } else if enders.iter().any(|e| starts_tag(rest, e)) {
            return Some(at);
        }
        pos = at + 1;
    }

    // unterminated row or cell runs to the end of the input
    (!enders.is_empty()).then_some(lc.len())
}

/// Iterator over successive `open ... close` blocks of `s`.
pub struct TagBlocks<'a> {
    src: &'a str,
    lc: String,
    open: String,
    close: String,
    pos: usize,
}

impl<'a> Iterator for TagBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let (s, e) = next_block_in(self.src, &self.lc, &self.open, &self.close, self.pos)?;
        self.pos = e;
        Some(&self.src[s..e])
    }
}

pub fn tag_blocks<'a>(s: &'a str, open: &str, close: &str) -> TagBlocks<'a> {
    TagBlocks {
        src: s,
        lc: s.to_ascii_lowercase(),
        open: open.to_ascii_lowercase(),
        close: close.to_ascii_lowercase(),
        pos: 0,
    }
}

/// First `<tag ...>...</tag>` block whose opener carries `class`. Openers are
/// tried one at a time, so a match nested inside another block is still found.
pub fn find_block_with_class<'a>(s: &'a str, tag: &str, class: &str) -> Option<&'a str> {
    let lc = s.to_ascii_lowercase();
    let open = format!("<{}", tag.to_ascii_lowercase());
    let close = format!("</{}>", tag.to_ascii_lowercase());

    let mut from = 0;
    while let Some((start, end)) = next_block_in(s, &lc, &open, &close, from) {
        let block = &s[start..end];
        if has_class(opener(block), class) {
            return Some(block);
        }
        from = start + open.len();
    }
    None
}

/// The opening tag of a block, e.g. `<td class="x">`.
pub fn opener(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

/// Everything between the opening tag and the block's trailing closer, if
/// it has one.
pub fn inner_after_open_tag(block: &str) -> &str {
    let Some(oe) = block.find('>') else { return "" };
    let body = &block[oe + 1..];
    let trimmed = body.trim_end();
    match trimmed.rfind("</") {
        Some(cs) if trimmed.ends_with('>') && !trimmed[cs + 2..].contains('<') => &body[..cs],
        _ => body,
    }
}

/// Attribute value from an opening tag. Quotes are optional in the source.
pub fn attr_value<'a>(open_tag: &'a str, name: &str) -> Option<&'a str> {
    let lc = open_tag.to_ascii_lowercase();
    let needle = format!("{}=", name.to_ascii_lowercase());

    let mut from = 0;
    let idx = loop {
        let i = lc[from..].find(&needle)? + from;
        // whole attribute name only ("data-class=" is not "class=")
        let prev = lc[..i].chars().next_back();
        if prev.is_none_or(|c| c.is_ascii_whitespace()) {
            break i;
        }
        from = i + needle.len();
    };

    let val = open_tag[idx + needle.len()..].trim_start();
    match val.as_bytes().first() {
        Some(&q) if q == b'"' || q == b'\'' => {
            let rest = &val[1..];
            let end = rest.find(q as char).unwrap_or(rest.len());
            Some(&rest[..end])
        }
        _ => {
            let end = val
                .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
                .unwrap_or(val.len());
            Some(&val[..end])
        }
    }
}

/// True when the tag's `class` attribute lists `class` as one of its tokens.
pub fn has_class(open_tag: &str, class: &str) -> bool {
    attr_value(open_tag, "class")
        .is_some_and(|v| v.split_ascii_whitespace().any(|c| c.eq_ignore_ascii_case(class)))
}

/// Drop tags, decode entities, collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&normalize_entities(&out))
}
