//! Tag scanner for Netscape bookmark exports.
//!
//! Walks the raw markup with a single case-insensitive pattern and yields only
//! the tags that carry folder structure or links. Everything else (`<DT>`,
//! `<p>`, comments, text) is skipped. Matching is offset based and does not
//! track quoting, so a literal `<` or `>` inside an attribute value can desync it.

use regex::{Matches, Regex};
use std::ops::Range;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(?:/h3|/dl|h3|dl|a)\b[^>]*>").expect("valid tag pattern"));

static HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bhref\s*=\s*"([^"]*)""#).expect("valid href pattern"));

static FOLDER_TITLE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</h3\s*>").expect("valid h3 close pattern"));

static LINK_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</a\s*>").expect("valid a close pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<H3 ...>`
    FolderTitleOpen,
    /// `</H3>`
    FolderTitleClose,
    /// `<DL ...>`
    NestingOpen,
    /// `</DL>`
    NestingClose,
    /// `<A ...>`
    LinkOpen,
}

impl TagKind {
    fn from_tag_text(tag: &str) -> Option<Self> {
        // Skip `<`, then read the name up to the first non-name byte.
        let name: String = tag[1..]
            .chars()
            .take_while(|c| *c == '/' || c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match name.as_str() {
            "h3" => Some(TagKind::FolderTitleOpen),
            "/h3" => Some(TagKind::FolderTitleClose),
            "dl" => Some(TagKind::NestingOpen),
            "/dl" => Some(TagKind::NestingClose),
            "a" => Some(TagKind::LinkOpen),
            _ => None,
        }
    }
}

/// One structurally relevant tag occurrence. `span` covers `<` through `>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEvent {
    pub kind: TagKind,
    pub span: Range<usize>,
}

impl TagEvent {
    /// Byte offset of the tag's `<`.
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Byte offset just past the tag's `>`.
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Raw text of the tag itself, attributes included.
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        &input[self.span.clone()]
    }
}

/// Lazy, single-use sequence of [`TagEvent`]s over one input buffer.
pub struct Scanner<'a> {
    matches: Matches<'static, 'a>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            matches: TAG.find_iter(input),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = TagEvent;

    fn next(&mut self) -> Option<TagEvent> {
        for m in self.matches.by_ref() {
            if let Some(kind) = TagKind::from_tag_text(m.as_str()) {
                return Some(TagEvent { kind, span: m.range() });
            }
        }
        None
    }
}

/// Value of the double-quoted `HREF` attribute in a link tag, or `""`.
pub fn link_href(tag_text: &str) -> &str {
    HREF.captures(tag_text)
        .and_then(|c| c.get(1))
        .map_or("", |m| m.as_str())
}

/// Finds the first closing tag at or after an offset, remembering what it saw.
///
/// Queries must come with non-decreasing offsets, as they do in one forward
/// pass. A hit is reused until the offset passes it, and once a search runs
/// off the end no later offset can match, so every byte is searched at most
/// once per finder.
pub struct CloseFinder {
    pattern: &'static Regex,
    searched_from: usize,
    found: Option<usize>,
    exhausted_from: Option<usize>,
}

impl CloseFinder {
    fn new(pattern: &'static Regex) -> Self {
        Self {
            pattern,
            searched_from: 0,
            found: None,
            exhausted_from: None,
        }
    }

    /// Finder for `</H3>`.
    pub fn folder_title() -> Self {
        Self::new(LazyLock::force(&FOLDER_TITLE_CLOSE))
    }

    /// Finder for `</A>`.
    pub fn link() -> Self {
        Self::new(LazyLock::force(&LINK_CLOSE))
    }

    pub fn find(&mut self, input: &str, from: usize) -> Option<usize> {
        if self.exhausted_from.is_some_and(|x| from >= x) {
            return None;
        }
        if let Some(hit) = self.found {
            if self.searched_from <= from && from <= hit {
                return Some(hit);
            }
        }
        if from > input.len() {
            return None;
        }
        self.searched_from = from;
        self.found = self.pattern.find_at(input, from).map(|m| m.start());
        if self.found.is_none() {
            self.exhausted_from = Some(from);
        }
        self.found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TagKind> {
        Scanner::new(input).map(|e| e.kind).collect()
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(kinds("").is_empty());
        assert!(kinds("just some text, no markup").is_empty());
    }

    #[test]
    fn test_structural_tags_in_order() {
        let input = r#"<DL><p><DT><H3 ADD_DATE="1">Work</H3><DL><p><DT><A HREF="http://x.com">x</A></DL><p></DL>"#;
        assert_eq!(
            kinds(input),
            vec![
                TagKind::NestingOpen,
                TagKind::FolderTitleOpen,
                TagKind::FolderTitleClose,
                TagKind::NestingOpen,
                TagKind::LinkOpen,
                TagKind::NestingClose,
                TagKind::NestingClose,
            ]
        );
    }

    #[test]
    fn test_case_insensitive_tags() {
        let input = r#"<dl><h3>a</h3><a href="u">t</a></dl>"#;
        assert_eq!(
            kinds(input),
            vec![
                TagKind::NestingOpen,
                TagKind::FolderTitleOpen,
                TagKind::FolderTitleClose,
                TagKind::LinkOpen,
                TagKind::NestingClose,
            ]
        );
    }

    #[test]
    fn test_similar_tag_names_are_skipped() {
        let input = "<ABBR>x</ABBR><AREA><DLX><H30><ADDRESS>";
        assert!(kinds(input).is_empty());
    }

    #[test]
    fn test_link_close_and_other_markup_not_events() {
        let input = "<!DOCTYPE NETSCAPE-Bookmark-file-1><META HTTP-EQUIV=\"x\"><TITLE>Bookmarks</TITLE></A><p>";
        assert!(kinds(input).is_empty());
    }

    #[test]
    fn test_event_offsets() {
        let input = r#"ab<DL>cd<A HREF="u">"#;
        let events: Vec<_> = Scanner::new(input).collect();
        assert_eq!(events[0].start(), 2);
        assert_eq!(events[0].end(), 6);
        assert_eq!(events[1].start(), 8);
        assert_eq!(events[1].text(input), r#"<A HREF="u">"#);
    }

    #[test]
    fn test_link_href() {
        assert_eq!(link_href(r#"<A HREF="http://x.com/a" ADD_DATE="1">"#), "http://x.com/a");
        assert_eq!(link_href(r#"<a href="http://x.com/b">"#), "http://x.com/b");
        assert_eq!(link_href(r#"<A ADD_DATE="1">"#), "");
        assert_eq!(link_href("<A HREF=unquoted>"), "");
    }

    #[test]
    fn test_find_closers() {
        let input = "<H3>Work</h3 ><A>t</A>";
        assert_eq!(CloseFinder::folder_title().find(input, 4), Some(8));
        let mut links = CloseFinder::link();
        assert_eq!(links.find(input, 17), Some(18));
        assert_eq!(links.find(input, 19), None);
        assert_eq!(links.find(input, 100), None);
    }

    #[test]
    fn test_close_finder_reuses_hit() {
        let input = "<A>a<A>b<A>c</A>";
        let mut links = CloseFinder::link();
        assert_eq!(links.find(input, 3), Some(12));
        assert_eq!(links.find(input, 7), Some(12));
        assert_eq!(links.find(input, 12), Some(12));
        assert_eq!(links.find(input, 13), None);
    }

    #[test]
    fn test_close_finder_stays_exhausted() {
        let input = "<A>a<A>b</A><A>c<A>d";
        let mut links = CloseFinder::link();
        assert_eq!(links.find(input, 3), Some(8));
        assert_eq!(links.find(input, 15), None);
        assert_eq!(links.find(input, 19), None);
        assert_eq!(links.exhausted_from, Some(15));
    }

    #[test]
    fn test_gt_inside_attribute_desyncs() {
        // Documented limitation: the scanner does not understand quoting.
        let input = r#"<A HREF="a>b">t</A>"#;
        let events: Vec<_> = Scanner::new(input).collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].text(input), r#"<A HREF="a>"#);
    }
}
