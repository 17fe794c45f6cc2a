pub mod error;
pub use error::AppError;

pub mod config;

pub mod logging;
pub use logging::Logger;

pub mod resolver {
    pub mod probe;
    pub use probe::{FsProbe, HttpProbe, Probe, probe_for};

    pub mod resolve;
    pub use resolve::{NamePattern, ResolvePlan, ResolveProgress, resolve};
}

pub mod controller {
    pub mod actions;
    pub use actions::Action;

    pub mod action_dispatcher;
    pub use action_dispatcher::ActionDispatcher;

    pub mod event_loop;
    pub use event_loop::EventLoop;

    pub mod handlers;
}

pub mod model {
    pub mod app_state;
    pub use app_state::AppState;

    pub mod gallery_state;
    pub use gallery_state::{GalleryState, apply_filter};

    pub mod lightbox;
    pub use lightbox::{Lightbox, LightboxState};

    pub mod media;
    pub use media::{MediaItem, MediaKind, Thumbnail};

    pub mod ui_state;
    pub use ui_state::{Notification, NotificationLevel, UIOverlay, UIState};
}

pub mod tasks {
    pub mod resolve_task;
}

pub mod view {
    pub mod theme;

    pub mod ui;
    pub use ui::UIRenderer;

    pub mod components {
        pub mod filter_bar;
        pub mod help_overlay;
        pub mod lightbox_overlay;
        pub mod loading_overlay;
        pub mod media_grid;
        pub mod status_bar;
    }
}
