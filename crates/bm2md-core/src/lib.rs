pub mod config;
pub mod emitter;
pub mod hierarchy;
pub mod scanner;

use config::Config;
use emitter::LinkEntry;
use hierarchy::HierarchyState;
use scanner::{CloseFinder, Scanner, TagKind};
use tracing::{debug, trace};

/// Result of one translation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub markdown: String,
    /// Headings emitted, one per `<DL>`.
    pub folders: usize,
    pub links: usize,
}

/// Convert a Netscape bookmark export into Markdown.
///
/// Never fails: malformed markup degrades to best-effort output and input
/// without any bookmark tags yields an empty string.
pub fn convert(html: &str, config: &Config) -> String {
    translate(html, config).markdown
}

/// Single forward pass over the tag stream, folding each event into the
/// hierarchy state and the output fragments.
pub fn translate(html: &str, config: &Config) -> Translation {
    let options = &config.options;
    let heading_limit = options.heading_limit();
    let mut state = HierarchyState::new(&options.root_title);
    let mut folder_title_close = CloseFinder::folder_title();
    let mut link_close = CloseFinder::link();
    let mut fragments: Vec<String> = Vec::new();
    let mut folders = 0;
    let mut links = 0;

    for event in Scanner::new(html) {
        match event.kind {
            TagKind::FolderTitleOpen => {
                // Without a closing tag the previous title stays in place.
                match folder_title_close.find(html, event.end()) {
                    Some(close) => state.record_folder_title(&html[event.end()..close]),
                    None => trace!(offset = event.start(), "folder title never closed"),
                }
            }
            TagKind::NestingOpen => {
                let level = state.enter_folder(heading_limit);
                fragments.push(emitter::heading_line(level, state.pending_folder_title()));
                folders += 1;
            }
            TagKind::NestingClose => state.exit_folder(),
            TagKind::LinkOpen => {
                let entry = LinkEntry::extract(html, &event, &mut link_close, options.favicons);
                if entry.title == entry.url {
                    trace!(offset = event.start(), url = %entry.url, "link titled by its url");
                }
                fragments.push(emitter::link_line(&entry));
                links += 1;
            }
            TagKind::FolderTitleClose => {}
        }
    }

    debug!(folders, links, final_depth = state.depth(), "translated bookmarks");

    Translation {
        markdown: fragments.concat(),
        folders,
        links,
    }
}
