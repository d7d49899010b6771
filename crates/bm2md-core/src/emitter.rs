use crate::scanner::{self, CloseFinder, TagEvent};
use url::Url;

/// A bookmark pulled out of one `<A>` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub url: String,
    pub title: String,
    pub favicon_url: Option<String>,
}

impl LinkEntry {
    /// Extract the link at `event` from `input`.
    ///
    /// The title is the trimmed text between the tag's `>` and the next `</A>`.
    /// With no `</A>` anywhere downstream the URL stands in as the title.
    /// `link_close` is shared across the links of one pass.
    pub fn extract(
        input: &str,
        event: &TagEvent,
        link_close: &mut CloseFinder,
        favicons: bool,
    ) -> Self {
        let url = scanner::link_href(event.text(input)).to_string();
        let title = match link_close.find(input, event.end()) {
            Some(close) => input[event.end()..close].trim().to_string(),
            None => url.clone(),
        };
        let favicon_url = if favicons { favicon_url(&url) } else { None };
        Self { url, title, favicon_url }
    }
}

/// Conventional icon location for the origin of `url`.
///
/// Returns `None` for anything without a host: relative paths, `javascript:`,
/// `mailto:`, `file:///`, or text that does not parse as a URL at all.
pub fn favicon_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str().filter(|h| !h.is_empty())?;
    let origin = match parsed.port() {
        Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
        None => format!("{}://{}", parsed.scheme(), host),
    };
    Some(format!("{origin}/favicon.ico"))
}

pub fn heading_line(level: usize, title: &str) -> String {
    format!("{} {}\n\n", "#".repeat(level), title)
}

pub fn link_line(entry: &LinkEntry) -> String {
    match &entry.favicon_url {
        Some(icon) => format!("- ![]({}) [{}]({})\n", icon, entry.title, entry.url),
        None => format!("- [{}]({})\n", entry.title, entry.url),
    }
}
