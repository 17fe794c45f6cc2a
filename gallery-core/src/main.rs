//! src/main.rs
//! ============================================================================
//! # Gallery Viewer Entry Point
//!
//! Loads the config, starts the background scan, and runs the terminal
//! viewer until the user quits.

use std::{
    io::{self, Stdout},
    sync::Arc,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend as Backend};
use tokio::{
    signal,
    sync::{Mutex, MutexGuard, Notify, mpsc},
    task::JoinHandle,
};
use tracing::{error, info, warn};

use gallery_core::{
    Logger,
    config::Config,
    controller::{action_dispatcher::ActionDispatcher, actions::Action, event_loop::EventLoop},
    model::app_state::AppState,
    tasks::resolve_task::spawn_resolve_task,
    view::{theme::Palette, ui::UIRenderer},
};

type AppTerminal = Terminal<Backend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_handler();

    let app: App = App::new()
        .await
        .context("Failed to initialize application")?;

    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

struct App {
    terminal: AppTerminal,
    event_loop: EventLoop,
    dispatcher: ActionDispatcher,
    renderer: UIRenderer,
    state: Arc<Mutex<AppState>>,
    scan: JoinHandle<()>,
    shutdown: Arc<Notify>,
}

impl App {
    async fn new() -> Result<Self> {
        Logger::init_tracing().context("Failed to initialize logging")?;
        info!("Starting gallery viewer");

        let config: Arc<Config> = Arc::new(Config::load().await.unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        }));

        let terminal: AppTerminal = setup_terminal().context("Failed to initialize terminal")?;

        let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();
        let scan: JoinHandle<()> = spawn_resolve_task(config.gallery.plan(), action_tx);

        let renderer = UIRenderer::new(Palette::for_theme(&config.viewer.theme));
        let state: Arc<Mutex<AppState>> = Arc::new(Mutex::new(AppState::new(config)));
        let event_loop = EventLoop::new(state.clone(), action_rx);
        let dispatcher = ActionDispatcher::new(state.clone());

        info!("Application initialization complete");

        Ok(Self {
            terminal,
            event_loop,
            dispatcher,
            renderer,
            state,
            scan,
            shutdown: Arc::new(Notify::new()),
        })
    }

    async fn run(mut self) -> Result<()> {
        self.setup_shutdown_handler();

        info!("Starting main event loop");

        loop {
            self.render().await?;

            let action: Action = tokio::select! {
                _ = self.shutdown.notified() => {
                    info!("Shutdown signal received");
                    break;
                }

                maybe_action = self.event_loop.next_action() => {
                    match maybe_action {
                        Some(action) => action,
                        None => {
                            info!("Event stream ended");
                            break;
                        }
                    }
                }
            };

            if !self.dispatcher.handle(action).await {
                break;
            }
        }

        if !self.scan.is_finished() {
            info!("Abandoning unfinished scan");
            self.scan.abort();
        }

        info!(
            "Main event loop ended after {} actions, {} frames",
            self.dispatcher.actions_processed(),
            self.renderer.stats().frames
        );
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let mut state: MutexGuard<'_, AppState> = self.state.lock().await;

        if state.redraw {
            let renderer = &mut self.renderer;
            self.terminal
                .draw(|frame: &mut Frame<'_>| {
                    renderer.render(frame, &mut state);
                })
                .context("Failed to draw terminal")?;

            state.redraw = false;
        }

        Ok(())
    }

    fn setup_shutdown_handler(&self) {
        let shutdown: Arc<Notify> = self.shutdown.clone();

        tokio::spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C signal");
                    shutdown.notify_one();
                }
                Err(e) => {
                    error!("Failed to listen for Ctrl+C: {}", e);
                }
            }
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            error!("Failed to cleanup terminal: {}", e);
        }
    }
}

fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend: Backend<Stdout> = Backend::new(stdout);
    let terminal: AppTerminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Terminal cleanup complete");
    Ok(())
}

/// Restores the terminal before the default hook prints the panic.
fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
