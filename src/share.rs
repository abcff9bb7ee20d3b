//! Share-link field state.
//!
//! A single-line field shows a link to the current timeline. It accepts edits
//! until the link is first selected; from then on it is read-only. Focusing or
//! clicking it selects the whole link, and the copy button selects it and
//! writes it to the clipboard.

use std::ops::Range;

use tracing::debug;

/// Destination for copied text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str);
}

impl ClipboardSink for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShareLinkField {
    link: String,
    readonly: bool,
    /// Selected character range, if any
    selection: Option<Range<usize>>,
}

impl ShareLinkField {
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            readonly: false,
            selection: None,
        }
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    /// Replaces the link and drops any selection. The field becomes editable
    /// again until the new link is selected.
    pub fn set_link(&mut self, link: impl Into<String>) {
        self.link = link.into();
        self.selection = None;
        self.readonly = false;
    }

    /// Applies a user edit. Returns false, leaving the link untouched, once the
    /// field is read-only.
    pub fn edit(&mut self, text: &str) -> bool {
        if self.readonly {
            return false;
        }
        self.link.clear();
        self.link.push_str(text);
        self.selection = None;
        true
    }

    /// Selects the whole link and locks the field against edits.
    pub fn select_all(&mut self) {
        self.selection = Some(0..self.link.chars().count());
        self.readonly = true;
    }

    pub fn on_focus(&mut self) {
        self.select_all();
    }

    pub fn on_click(&mut self) {
        self.select_all();
    }

    /// Selects the link and copies it. Returns false when there is nothing to copy.
    pub fn copy<C: ClipboardSink + ?Sized>(&mut self, clipboard: &mut C) -> bool {
        self.select_all();
        if self.link.is_empty() {
            return false;
        }
        clipboard.set_text(&self.link);
        debug!(link = %self.link, "copied share link");
        true
    }
}
