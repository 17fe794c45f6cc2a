//! src/model/gallery_state.rs
//! ============================================================================
//! # GalleryState: Full Gallery, Filter Query and Current View List
//!
//! The full list is written once when the scan completes. The current view
//! list is recomputed from it on every filter change and is what the grid
//! shows and what lightbox navigation walks.

use crate::model::media::MediaItem;
use crate::resolver::resolve::ResolveProgress;

/// Keeps items whose name or full path contains the query, ignoring case.
/// A blank query keeps everything, in the original order.
pub fn apply_filter(full: &[MediaItem], query: &str) -> Vec<MediaItem> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return full.to_vec();
    }

    full.iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&term) || item.url.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// `"1 item"`, `"0 items"`, `"12 items"`.
pub fn count_label(n: usize) -> String {
    format!("{} item{}", n, if n == 1 { "" } else { "s" })
}

#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    all: Vec<MediaItem>,
    current: Vec<MediaItem>,
    query: String,
    /// `Some` while the startup scan is running.
    pub scanning: Option<ResolveProgress>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self {
            scanning: Some(ResolveProgress::default()),
            ..Self::default()
        }
    }

    /// Installs the resolved gallery and re-applies the current query.
    pub fn set_resolved(&mut self, urls: Vec<String>) {
        self.all = urls.into_iter().map(MediaItem::new).collect();
        self.scanning = None;
        self.refresh();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.refresh();
    }

    pub fn pop_query_char(&mut self) {
        if self.query.pop().is_some() {
            self.refresh();
        }
    }

    fn refresh(&mut self) {
        self.current = apply_filter(&self.all, &self.query);
    }

    pub fn all(&self) -> &[MediaItem] {
        &self.all
    }

    pub fn current(&self) -> &[MediaItem] {
        &self.current
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning.is_some()
    }

    /// Empty indicator shows iff the view list is empty after the scan.
    pub fn shows_empty_indicator(&self) -> bool {
        !self.is_scanning() && self.current.is_empty()
    }

    pub fn count_label(&self) -> String {
        match self.scanning {
            Some(progress) if progress.total > 0 => {
                format!("Scanning… {}/{}", progress.completed, progress.total)
            }
            Some(_) => "Scanning…".to_string(),
            None => count_label(self.current.len()),
        }
    }
}
