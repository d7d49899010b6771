use tracing::trace;

pub const DEFAULT_ROOT_TITLE: &str = "Root";

/// Deepest ATX heading Markdown supports.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Folder nesting state threaded through one translation pass.
///
/// `depth` starts at 1 and is signed: unbalanced `</DL>` tags are allowed to
/// push it below 1, which only changes the heading level of later folders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyState {
    depth: i64,
    pending_folder_title: String,
}

impl Default for HierarchyState {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_TITLE)
    }
}

impl HierarchyState {
    pub fn new(root_title: &str) -> Self {
        Self {
            depth: 1,
            pending_folder_title: root_title.to_string(),
        }
    }

    pub fn depth(&self) -> i64 {
        self.depth
    }

    /// Title the next heading will carry.
    pub fn pending_folder_title(&self) -> &str {
        &self.pending_folder_title
    }

    pub fn record_folder_title(&mut self, text: &str) {
        self.pending_folder_title = text.trim().to_string();
    }

    /// Enter one more level of folder nesting and return the heading level to
    /// emit for it, `depth` clamped to `0..=max_level`.
    pub fn enter_folder(&mut self, max_level: usize) -> usize {
        self.depth += 1;
        usize::try_from(self.depth).map_or(0, |d| d.min(max_level))
    }

    pub fn exit_folder(&mut self) {
        self.depth -= 1;
        if self.depth < 1 {
            trace!(depth = self.depth, "folder depth underflow");
        }
    }
}
