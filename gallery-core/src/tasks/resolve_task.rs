//! ``src/tasks/resolve_task.rs``
//! ============================================================================
//! # Resolve Task: Startup Scan in the Background
//!
//! Runs the resolver once, off the event loop, and reports back through the
//! action channel: a `ScanProgress` per finished index, then exactly one
//! `GalleryResolved`. A scan that cannot start still reports an empty
//! gallery so the viewer leaves its loading state.

use std::time::Instant;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{Instrument, error, info, info_span};

use crate::controller::actions::Action;
use crate::resolver::probe::{Probe, probe_for};
use crate::resolver::resolve::{ResolvePlan, resolve};

pub fn spawn_resolve_task(
    plan: ResolvePlan,
    action_tx: mpsc::UnboundedSender<Action>,
) -> JoinHandle<()> {
    let span = info_span!("resolve_task", base = %plan.pattern.base);

    tokio::spawn(
        async move {
            match probe_for(&plan.pattern.base) {
                Ok(probe) => run_resolve(probe.as_ref(), &plan, &action_tx).await,
                Err(e) => {
                    error!("Cannot start scan: {}", e);
                    let _ = action_tx.send(Action::GalleryResolved(Vec::new()));
                }
            }
        }
        .instrument(span),
    )
}

/// Resolves `plan` with `probe`, streaming progress into `action_tx`.
pub async fn run_resolve<P>(probe: &P, plan: &ResolvePlan, action_tx: &mpsc::UnboundedSender<Action>)
where
    P: Probe + ?Sized,
{
    let started = Instant::now();
    let (progress_tx, mut progress_rx) = mpsc::unbounded_channel();

    let scan = async move {
        let urls = resolve(probe, plan, Some(&progress_tx)).await;
        drop(progress_tx);
        urls
    };

    let forward = async {
        while let Some(progress) = progress_rx.recv().await {
            let _ = action_tx.send(Action::ScanProgress(progress));
        }
    };

    let (urls, ()) = tokio::join!(scan, forward);

    info!(
        found = urls.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Scan finished"
    );

    if action_tx.send(Action::GalleryResolved(urls)).is_err() {
        info!("Event loop gone before the scan finished");
    }
}
