// src/core/html.rs
// Tolerant HTML scanning tailored to generated report pages.
// Tag and attribute names match case-insensitively, and only on whole names
// (`<th` never matches `<thead`). Not an HTML5 parser: nested elements of the
// same name are not tracked.

use std::ops::Range;

use super::sanitize::{normalize_entities, normalize_ws};

/// Elements whose content is never markup.
const RAW_TEXT: &[&str] = &["script", "style"];

/// An element located in the scanned source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element<'a> {
    pub name: &'static str,
    /// `<td bgcolor="FFA0A0">`, including the angle brackets.
    pub open_tag: &'a str,
    /// Byte range of the content between the tags.
    pub inner: Range<usize>,
    /// First byte after the element (after the closing tag when present).
    pub end: usize,
}

/// Lowercases the source once; byte offsets are shared between both copies.
pub struct Scanner<'a> {
    src: &'a str,
    lc: String,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, lc: src.to_ascii_lowercase() }
    }

    pub fn len(&self) -> usize {
        self.src.len()
    }

    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }

    pub fn slice(&self, range: Range<usize>) -> &'a str {
        &self.src[range]
    }

    /// Next element named one of `names` that opens inside `from..limit`.
    ///
    /// The element ends at its closing tag, or, when that is missing, at the
    /// next opening tag named in `siblings` (or at `limit`).
    pub fn next_element(
        &self,
        names: &[&'static str],
        from: usize,
        limit: usize,
        siblings: &[&'static str],
    ) -> Option<Element<'a>> {
        let limit = limit.min(self.src.len());
        let (start, name) = self.find_open(names, from, limit)?;
        let open_end = self.tag_end(start, limit);

        let close = self.find_close(name, open_end, limit);
        let sibling = self.find_open(siblings, open_end, limit).map(|(i, _)| i);

        let (inner_end, end) = match (close, sibling) {
            (Some(c), Some(s)) if s < c => (s, s),
            (Some(c), _) => (c, self.tag_end(c, limit)),
            (None, Some(s)) => (s, s),
            (None, None) => (limit, limit),
        };

        Some(Element {
            name,
            open_tag: &self.src[start..open_end],
            inner: open_end..inner_end,
            end,
        })
    }

    /// All elements named `name` directly scanned inside `range`, in order.
    pub fn elements(
        &self,
        name: &'static str,
        range: Range<usize>,
        siblings: &[&'static str],
    ) -> Vec<Element<'a>> {
        let mut out = Vec::new();
        let mut pos = range.start;
        while let Some(el) = self.next_element(&[name], pos, range.end, siblings) {
            pos = el.end;
            out.push(el);
        }
        out
    }

    /* ---------- internals ---------- */

    fn find_open(&self, names: &[&'static str], from: usize, limit: usize) -> Option<(usize, &'static str)> {
        if names.is_empty() {
            return None;
        }
        let hay = self.lc.get(from..limit)?;
        let mut off = 0usize;
        while let Some(rel) = hay[off..].find('<') {
            let at = off + rel;
            let rest = &hay[at + 1..];

            // Skip comments wholesale
            if rest.starts_with("!--") {
                match rest.find("-->") {
                    Some(close) => { off = at + 1 + close + 3; continue; }
                    None => return None,
                }
            }

            // ...and script/style bodies
            if let Some(raw) = raw_text_name(rest.as_bytes()).filter(|r| !names.contains(r)) {
                match self.find_close(raw, from + at + 1, limit) {
                    Some(close) => { off = close - from + 2; continue; }
                    None => return None,
                }
            }

            for &name in names {
                if rest.starts_with(name) && is_name_end(rest.as_bytes().get(name.len()).copied()) {
                    return Some((from + at, name));
                }
            }
            off = at + 1;
        }
        None
    }

    fn find_close(&self, name: &str, from: usize, limit: usize) -> Option<usize> {
        let hay = self.lc.get(from..limit)?;
        let pat = join!("</", name);
        let mut off = 0usize;
        while let Some(rel) = hay[off..].find(&pat) {
            let at = off + rel;
            if is_name_end(hay.as_bytes().get(at + pat.len()).copied()) {
                return Some(from + at);
            }
            off = at + pat.len();
        }
        None
    }

    /// Index just past the `>` that ends the tag opening at `start`.
    /// Quoted attribute values may contain `>`.
    fn tag_end(&self, start: usize, limit: usize) -> usize {
        let bytes = self.src.as_bytes();
        let mut quote: Option<u8> = None;
        let mut after_eq = false;
        let mut i = start + 1;
        while i < limit {
            let b = bytes[i];
            match quote {
                Some(q) => {
                    if b == q { quote = None; }
                }
                None => match b {
                    b'>' => return i + 1,
                    b'"' | b'\'' if after_eq => quote = Some(b),
                    b'=' => after_eq = true,
                    _ if b.is_ascii_whitespace() => {}
                    _ => after_eq = false,
                },
            }
            i += 1;
        }
        limit
    }
}

/// `script`/`style` when `after_lt` (the bytes after a `<`) opens one.
fn raw_text_name(after_lt: &[u8]) -> Option<&'static str> {
    RAW_TEXT.iter().copied().find(|raw| {
        after_lt.len() >= raw.len()
            && after_lt[..raw.len()].eq_ignore_ascii_case(raw.as_bytes())
            && is_name_end(after_lt.get(raw.len()).copied())
    })
}

/// A `<` starts markup only when followed by a name, `/name`, `!` or `?`;
/// otherwise it is literal text (`x1 < 4`).
fn starts_markup(tail: &[u8]) -> bool {
    match tail.get(1) {
        Some(b) if b.is_ascii_alphabetic() || *b == b'!' || *b == b'?' => true,
        Some(b'/') => tail.get(2).is_some_and(|b| b.is_ascii_alphabetic()),
        _ => false,
    }
}

fn is_name_end(b: Option<u8>) -> bool {
    match b {
        None => true,
        Some(b) => b == b'>' || b == b'/' || b.is_ascii_whitespace(),
    }
}

/// Parse the attributes of an opening tag. Names are lowercased, values are
/// entity-decoded; a bare attribute gets an empty value.
pub fn attributes(open_tag: &str) -> Vec<(String, String)> {
    let b = open_tag.as_bytes();
    let mut i = 1; // past '<'

    // Tag name
    while i < b.len() && !b[i].is_ascii_whitespace() && b[i] != b'>' && b[i] != b'/' { i += 1; }

    let mut out = Vec::new();
    loop {
        while i < b.len() && (b[i].is_ascii_whitespace() || b[i] == b'/') { i += 1; }
        if i >= b.len() || b[i] == b'>' { break; }

        let ns = i;
        while i < b.len() && !b[i].is_ascii_whitespace() && !matches!(b[i], b'=' | b'>' | b'/') { i += 1; }
        let name = open_tag[ns..i].to_ascii_lowercase();

        while i < b.len() && b[i].is_ascii_whitespace() { i += 1; }
        let mut value = s!();
        if i < b.len() && b[i] == b'=' {
            i += 1;
            while i < b.len() && b[i].is_ascii_whitespace() { i += 1; }
            if i < b.len() && (b[i] == b'"' || b[i] == b'\'') {
                let q = b[i];
                i += 1;
                let vs = i;
                while i < b.len() && b[i] != q { i += 1; }
                value = normalize_entities(&open_tag[vs..i]);
                i = (i + 1).min(b.len());
            } else {
                let vs = i;
                while i < b.len() && !b[i].is_ascii_whitespace() && b[i] != b'>' { i += 1; }
                value = normalize_entities(&open_tag[vs..i]);
            }
        }
        if !name.is_empty() {
            out.push((name, value));
        }
    }
    out
}

/// Value of attribute `name` (lowercase) on an opening tag.
pub fn attr_value(open_tag: &str, name: &str) -> Option<String> {
    attributes(open_tag)
        .into_iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v)
}

/// True when the space-separated `class` value contains every class in `required`.
pub fn has_classes(class: &str, required: &[&str]) -> bool {
    let have: Vec<&str> = class.split_whitespace().collect();
    required.iter().all(|r| have.contains(r))
}

/// Remove all `<...>` tags without inserting separators, so
/// `3x<sub>1</sub>` reads `3x1`. Comments and script/style bodies are dropped
/// with their content; a `<` that opens no tag is kept as text.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        let tail = &rest[lt..];
        let skip = if tail.starts_with("<!--") {
            tail.find("-->").map(|i| i + 3)
        } else if let Some(raw) = raw_text_name(&tail.as_bytes()[1..]) {
            raw_text_end(tail, raw)
        } else if starts_markup(tail.as_bytes()) {
            tail.find('>').map(|i| i + 1)
        } else {
            out.push('<');
            Some(1)
        };
        match skip {
            Some(n) => rest = &tail[n..],
            None => { rest = ""; break; }
        }
    }
    out.push_str(rest);
    out
}

/// Length of `<raw ...>...</raw>` at the start of `tail`, closing tag included.
fn raw_text_end(tail: &str, raw: &str) -> Option<usize> {
    let lc = tail.to_ascii_lowercase();
    let pat = join!("</", raw);
    let mut off = 1;
    while let Some(rel) = lc[off..].find(&pat) {
        let at = off + rel;
        if is_name_end(lc.as_bytes().get(at + pat.len()).copied()) {
            return lc[at..].find('>').map(|i| at + i + 1);
        }
        off = at + pat.len();
    }
    None
}

/// Visible text of an HTML fragment: tags stripped, entities decoded,
/// whitespace collapsed.
pub fn text_content(fragment: &str) -> String {
    normalize_ws(&normalize_entities(&strip_tags(fragment)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_spans_closing_tag() {
        let html = r#"<p>x</p><TD class="a">1</td><td>2</td>"#;
        let scan = Scanner::new(html);
        let el = scan.next_element(&["td"], 0, html.len(), &["td"]).unwrap();
        assert_eq!(el.name, "td");
        assert_eq!(el.open_tag, r#"<TD class="a">"#);
        assert_eq!(scan.slice(el.inner.clone()), "1");
        assert_eq!(&html[el.end..], "<td>2</td>");
    }

    #[test]
    fn missing_close_ends_at_next_sibling() {
        let html = "<tr><td>1<td>2</tr>";
        let scan = Scanner::new(html);
        let cells = scan.elements("td", 0..html.len(), &["td", "th"]);
        let texts: Vec<&str> = cells.iter().map(|c| scan.slice(c.inner.clone())).collect();
        assert_eq!(texts, vec!["1", "2</tr>"]);
    }

    #[test]
    fn whole_names_only() {
        let html = "<thead><tr><th>A</th></tr></thead>";
        let scan = Scanner::new(html);
        let el = scan.next_element(&["th"], 0, html.len(), &[]).unwrap();
        assert_eq!(el.open_tag, "<th>");
        assert_eq!(scan.slice(el.inner), "A");
    }

    #[test]
    fn comments_are_not_elements() {
        let html = "<!-- <table class=x></table> --><table>ok</table>";
        let scan = Scanner::new(html);
        let tables = scan.elements("table", 0..html.len(), &[]);
        assert_eq!(tables.len(), 1);
        assert_eq!(scan.slice(tables[0].inner.clone()), "ok");
    }

    #[test]
    fn quoted_gt_does_not_end_tag() {
        let html = r#"<td title="a>b" bgcolor=FFA0A0>7</td>"#;
        let scan = Scanner::new(html);
        let el = scan.next_element(&["td"], 0, html.len(), &[]).unwrap();
        assert_eq!(scan.slice(el.inner.clone()), "7");
        assert_eq!(attr_value(el.open_tag, "bgcolor").as_deref(), Some("FFA0A0"));
        assert_eq!(attr_value(el.open_tag, "title").as_deref(), Some("a>b"));
    }

    #[test]
    fn attribute_forms() {
        let tag = r#"<td BGCOLOR='ffa0a0' nowrap class="x  y" data-v=&amp;1>"#;
        let attrs = attributes(tag);
        assert_eq!(attrs, vec![
            (s!("bgcolor"), s!("ffa0a0")),
            (s!("nowrap"), s!()),
            (s!("class"), s!("x  y")),
            (s!("data-v"), s!("&1")),
        ]);
    }

    #[test]
    fn class_list_containment() {
        let class = "table table-center  table-bordered extra";
        assert!(has_classes(class, &["table", "table-bordered", "table-center"]));
        assert!(!has_classes("table", &["table", "table-bordered"]));
        assert!(!has_classes("", &["table"]));
        assert!(!has_classes("table-bordered-x table-center", &["table-bordered"]));
    }

    #[test]
    fn literal_less_than_stays_text() {
        assert_eq!(strip_tags("<td>x1 < 4</td>"), "x1 < 4");
        assert_eq!(strip_tags("a<b>c</b>"), "ac");
        assert_eq!(strip_tags("2 <= 3 </ 4"), "2 <= 3 </ 4");
        assert_eq!(text_content("<p>x<sub>2</sub> &lt; 12 and x1 <4</p>"), "x2 < 12 and x1 <4");
    }

    #[test]
    fn script_and_style_bodies_are_skipped() {
        let html = "<SCRIPT>var t = \"<table class=x><td>1</td></table>\";</Script>\
                    <style>td > b { color: red }</style><table>ok</table>";
        let scan = Scanner::new(html);
        let tables = scan.elements("table", 0..html.len(), &[]);
        assert_eq!(tables.len(), 1);
        assert_eq!(scan.slice(tables[0].inner.clone()), "ok");
        assert_eq!(text_content(html), "ok");
    }

    #[test]
    fn text_content_joins_inline_markup() {
        let html = "<p>F(X) = 3x<sub>1</sub>&nbsp;+ 5x<sub>2</sub><!-- note --></p>";
        assert_eq!(text_content(html), "F(X) = 3x1 + 5x2");
    }
}
