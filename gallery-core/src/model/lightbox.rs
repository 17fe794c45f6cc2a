//! src/model/lightbox.rs
//! ============================================================================
//! # Lightbox: Single-Item Viewer State Machine
//!
//! `Closed` or `Open { item, cursor }`, where `cursor` indexes the current
//! view list passed in by the caller. The lightbox owns the two media
//! elements it can mount; exactly one is visible while open, and both are
//! emptied on close so nothing keeps playing after dismissal.
//!
//! Fit mode belongs to the viewer, not to an item: it survives navigation and
//! closing, and starts as fit for every run.

use std::time::Duration;

use tracing::{debug, info};

use crate::error::AppError;
use crate::model::media::{MediaItem, MediaKind};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        item: MediaItem,
        cursor: usize,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageElement {
    pub src: Option<String>,
    pub alt: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoElement {
    pub src: Option<String>,
    pub visible: bool,
    pub position: Duration,
    pub playing: bool,
}

impl VideoElement {
    /// Assigning a source rewinds and pauses; any earlier load is superseded.
    fn load(&mut self, src: &str) {
        self.src = Some(src.to_string());
        self.position = Duration::ZERO;
        self.playing = false;
    }

    pub fn play(&mut self) -> Result<(), AppError> {
        if self.src.is_none() {
            return Err(AppError::Playback("no source loaded".to_string()));
        }
        self.playing = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.playing = false;
        self.src = None;
        self.position = Duration::ZERO;
    }
}

/// `(cursor + delta) mod len`, wrapping in both directions.
pub fn wrap_cursor(cursor: usize, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = len as isize;
    Some((cursor as isize + delta).rem_euclid(len) as usize)
}

#[derive(Debug, Clone)]
pub struct Lightbox {
    state: LightboxState,
    fit: bool,
    scroll: u16,
    scroll_limit: Option<u16>,
    title: String,
    link: String,
    pub image: ImageElement,
    pub video: VideoElement,
}

impl Default for Lightbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Lightbox {
    pub fn new() -> Self {
        Self {
            state: LightboxState::Closed,
            fit: true,
            scroll: 0,
            scroll_limit: None,
            title: String::new(),
            link: String::new(),
            image: ImageElement::default(),
            video: VideoElement::default(),
        }
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    pub fn cursor(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open { cursor, .. } => Some(cursor),
            LightboxState::Closed => None,
        }
    }

    pub fn item(&self) -> Option<&MediaItem> {
        match &self.state {
            LightboxState::Open { item, .. } => Some(item),
            LightboxState::Closed => None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Target of the "open original" control.
    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn is_fit(&self) -> bool {
        self.fit
    }

    /// Native-size mode with scrolling.
    pub fn is_fullsize(&self) -> bool {
        !self.fit
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Opens `items[cursor]`. Out-of-range cursors leave the state untouched.
    pub fn open(&mut self, items: &[MediaItem], cursor: usize) -> bool {
        let Some(item) = items.get(cursor) else {
            debug!(cursor, len = items.len(), "open ignored: cursor out of range");
            return false;
        };

        match item.kind {
            MediaKind::Video => {
                self.image.visible = false;
                self.image.src = None;

                self.video.visible = true;
                self.video.load(&item.url);
                if let Err(e) = self.video.play() {
                    debug!("autoplay rejected: {}", e);
                }
            }
            MediaKind::Image => {
                self.video.stop();
                self.video.visible = false;

                self.image.visible = true;
                self.image.src = Some(item.url.clone());
                self.image.alt = item.name.clone();
            }
        }

        self.scroll = 0;
        self.title = item.name.clone();
        self.link = item.url.clone();
        self.state = LightboxState::Open {
            item: item.clone(),
            cursor,
        };

        info!("Lightbox open at {}: {}", cursor, item.url);
        true
    }

    fn step(&mut self, items: &[MediaItem], delta: isize) -> bool {
        let Some(cursor) = self.cursor() else {
            return false;
        };
        match wrap_cursor(cursor, delta, items.len()) {
            Some(target) => self.open(items, target),
            None => false,
        }
    }

    pub fn next(&mut self, items: &[MediaItem]) -> bool {
        self.step(items, 1)
    }

    pub fn prev(&mut self, items: &[MediaItem]) -> bool {
        self.step(items, -1)
    }

    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }

        self.video.stop();
        self.video.visible = false;
        self.image.src = None;
        self.image.visible = false;
        self.scroll = 0;
        self.state = LightboxState::Closed;

        info!("Lightbox closed");
    }

    pub fn toggle_fit(&mut self) {
        self.fit = !self.fit;
        debug!(fit = self.fit, "fit mode toggled");
    }

    pub fn scroll_down(&mut self, rows: u16) {
        let next = self.scroll.saturating_add(rows);
        self.scroll = match self.scroll_limit {
            Some(limit) => next.min(limit),
            None => next,
        };
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    /// Set by the renderer once it knows how far the content overflows.
    pub fn set_scroll_limit(&mut self, limit: u16) {
        self.scroll_limit = Some(limit);
        self.scroll = self.scroll.min(limit);
    }

    /// Re-anchors an open lightbox onto a new view list: the cursor follows
    /// the displayed item when it is still listed, otherwise it is clamped.
    /// The displayed media is left as is.
    pub fn rebase(&mut self, items: &[MediaItem]) {
        let LightboxState::Open { item, cursor } = &mut self.state else {
            return;
        };

        if let Some(found) = items.iter().position(|candidate| candidate.url == item.url) {
            *cursor = found;
        } else if !items.is_empty() {
            *cursor = (*cursor).min(items.len() - 1);
        }
    }
}
