//! src/resolver/resolve.rs
//! ============================================================================
//! # Resolver: First Existing Extension per Index
//!
//! For every index in `[1, max_index]` the resolver probes the configured
//! extensions in priority order and keeps the first one that exists. Indices
//! are spread over a fixed number of workers that drain a shared cursor; each
//! worker finishes one index's probe chain before claiming the next.
//!
//! Results are keyed by index slot and compacted only after every worker has
//! returned, so the gallery order is the index order no matter which probe
//! answered first.

use std::sync::atomic::{AtomicUsize, Ordering};

use futures::future::join_all;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::resolver::probe::Probe;

/// `base + prefix + " (" + index + ")." + extension`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePattern {
    pub base: String,
    pub prefix: String,
}

impl NamePattern {
    pub fn new(base: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            prefix: prefix.into(),
        }
    }

    pub fn url_for(&self, index: u32, extension: &str) -> String {
        format!("{}{} ({}).{}", self.base, self.prefix, index, extension)
    }
}

/// Everything one scan needs.
#[derive(Debug, Clone)]
pub struct ResolvePlan {
    pub pattern: NamePattern,
    pub max_index: u32,
    pub extensions: Vec<String>,
    pub concurrency: usize,
}

impl ResolvePlan {
    /// Workers actually started: at least one, never more than there are indices.
    pub fn worker_count(&self) -> usize {
        self.concurrency.max(1).min(self.max_index as usize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveProgress {
    pub completed: usize,
    pub total: usize,
    pub found: usize,
}

/// Probes `extensions` in order for one index and returns the first hit.
pub async fn first_existing<P>(
    probe: &P,
    pattern: &NamePattern,
    index: u32,
    extensions: &[String],
) -> Option<String>
where
    P: Probe + ?Sized,
{
    for extension in extensions {
        let candidate = pattern.url_for(index, extension);
        if probe.exists(&candidate).await {
            return Some(candidate);
        }
    }
    None
}

/// Shared between workers: the next unclaimed slot plus running totals.
struct ScanCursor {
    next: AtomicUsize,
    completed: AtomicUsize,
    found: AtomicUsize,
    total: usize,
}

impl ScanCursor {
    fn new(total: usize) -> Self {
        Self {
            next: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            found: AtomicUsize::new(0),
            total,
        }
    }

    /// Each slot is handed out exactly once.
    fn claim(&self) -> Option<usize> {
        let slot = self.next.fetch_add(1, Ordering::Relaxed);
        (slot < self.total).then_some(slot)
    }

    fn record(&self, hit: bool) -> ResolveProgress {
        let found = if hit {
            self.found.fetch_add(1, Ordering::Relaxed) + 1
        } else {
            self.found.load(Ordering::Relaxed)
        };
        let completed = self.completed.fetch_add(1, Ordering::Relaxed) + 1;
        ResolveProgress {
            completed,
            total: self.total,
            found,
        }
    }
}

/// One worker: claim an index, run its probe chain, repeat until drained.
async fn drain<P>(
    probe: &P,
    plan: &ResolvePlan,
    scan: &ScanCursor,
    progress: Option<&mpsc::UnboundedSender<ResolveProgress>>,
) -> Vec<(usize, Option<String>)>
where
    P: Probe + ?Sized,
{
    let mut claimed = Vec::new();
    while let Some(slot) = scan.claim() {
        let index = (slot + 1) as u32;
        let hit = first_existing(probe, &plan.pattern, index, &plan.extensions).await;
        let update = scan.record(hit.is_some());

        if let Some(tx) = progress {
            // The receiver may already be gone; the scan still completes.
            let _ = tx.send(update);
        }

        claimed.push((slot, hit));
    }
    claimed
}

/// Resolves the whole range. Never fails; unresolved indices are omitted.
pub async fn resolve<P>(
    probe: &P,
    plan: &ResolvePlan,
    progress: Option<&mpsc::UnboundedSender<ResolveProgress>>,
) -> Vec<String>
where
    P: Probe + ?Sized,
{
    let total = plan.max_index as usize;
    if total == 0 || plan.extensions.is_empty() {
        debug!(
            total,
            extensions = plan.extensions.len(),
            "nothing to resolve"
        );
        return Vec::new();
    }

    let workers = plan.worker_count();
    info!(
        "Resolving {} indices across {} extensions with {} workers",
        total,
        plan.extensions.len(),
        workers
    );

    let scan = ScanCursor::new(total);
    let batches = join_all((0..workers).map(|_| drain(probe, plan, &scan, progress))).await;

    let mut slots: Vec<Option<String>> = vec![None; total];
    for (slot, hit) in batches.into_iter().flatten() {
        slots[slot] = hit;
    }

    let resolved: Vec<String> = slots.into_iter().flatten().collect();
    info!("Resolved {} of {} indices", resolved.len(), total);
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::{collections::HashSet, sync::Mutex, time::Duration};

    /// In-memory probe: a fixed set of existing URLs and a log of every call.
    struct SetProbe {
        present: HashSet<String>,
        calls: Mutex<Vec<String>>,
        delay_for: fn(&str) -> Duration,
    }

    impl SetProbe {
        fn new<I: IntoIterator<Item = &'static str>>(present: I) -> Self {
            Self {
                present: present.into_iter().map(String::from).collect(),
                calls: Mutex::new(Vec::new()),
                delay_for: |_| Duration::ZERO,
            }
        }

        fn with_delay(mut self, delay_for: fn(&str) -> Duration) -> Self {
            self.delay_for = delay_for;
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Probe for SetProbe {
        async fn exists(&self, url: &str) -> bool {
            self.calls.lock().unwrap().push(url.to_string());
            let delay = (self.delay_for)(url);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            self.present.contains(url)
        }
    }

    fn plan(max_index: u32, extensions: &[&str], concurrency: usize) -> ResolvePlan {
        ResolvePlan {
            pattern: NamePattern::new("images/", "100"),
            max_index,
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
            concurrency,
        }
    }

    #[test]
    fn url_follows_pattern() {
        let pattern = NamePattern::new("images/", "100");
        assert_eq!(pattern.url_for(7, "webp"), "images/100 (7).webp");
    }

    #[test]
    fn worker_count_is_clamped() {
        assert_eq!(plan(44, &["png"], 10).worker_count(), 10);
        assert_eq!(plan(3, &["png"], 10).worker_count(), 3);
        assert_eq!(plan(5, &["png"], 0).worker_count(), 1);
    }

    #[tokio::test]
    async fn skips_missing_indices_and_keeps_order() {
        let probe = SetProbe::new(["images/100 (1).png", "images/100 (3).mp4"]);
        let urls = resolve(&probe, &plan(3, &["png", "mp4"], 10), None).await;
        assert_eq!(urls, vec!["images/100 (1).png", "images/100 (3).mp4"]);
    }

    #[tokio::test]
    async fn first_match_wins_and_short_circuits() {
        let probe = SetProbe::new(["images/100 (1).jpg", "images/100 (1).gif"]);
        let hit = first_existing(
            &probe,
            &NamePattern::new("images/", "100"),
            1,
            &["png".into(), "jpg".into(), "gif".into()],
        )
        .await;

        assert_eq!(hit.as_deref(), Some("images/100 (1).jpg"));
        assert_eq!(
            probe.calls(),
            vec!["images/100 (1).png", "images/100 (1).jpg"]
        );
    }

    #[tokio::test]
    async fn all_misses_probe_every_extension_once() {
        let probe = SetProbe::new([]);
        let urls = resolve(&probe, &plan(2, &["png", "jpg"], 4), None).await;
        assert!(urls.is_empty());
        assert_eq!(probe.calls().len(), 4);
    }

    #[tokio::test]
    async fn empty_inputs_yield_nothing_without_probing() {
        let probe = SetProbe::new(["images/100 (1).png"]);
        assert!(resolve(&probe, &plan(0, &["png"], 10), None).await.is_empty());
        assert!(resolve(&probe, &plan(5, &[], 10), None).await.is_empty());
        assert!(probe.calls().is_empty());
    }

    #[tokio::test]
    async fn order_ignores_completion_order() {
        // Low indices answer slowest, so they finish last.
        let probe = SetProbe::new([
            "images/100 (1).png",
            "images/100 (2).png",
            "images/100 (4).png",
            "images/100 (6).png",
        ])
        .with_delay(|url| {
            if url.contains("(1)") || url.contains("(2)") {
                Duration::from_millis(30)
            } else {
                Duration::from_millis(1)
            }
        });

        let urls = resolve(&probe, &plan(6, &["png"], 6), None).await;
        assert_eq!(
            urls,
            vec![
                "images/100 (1).png",
                "images/100 (2).png",
                "images/100 (4).png",
                "images/100 (6).png",
            ]
        );
    }

    #[tokio::test]
    async fn sequential_and_parallel_agree() {
        let present = ["images/100 (2).gif", "images/100 (5).png", "images/100 (9).webm"];
        let exts = ["png", "gif", "webm"];

        let sequential = resolve(&SetProbe::new(present), &plan(10, &exts, 1), None).await;
        let parallel = resolve(&SetProbe::new(present), &plan(10, &exts, 64), None).await;
        assert_eq!(sequential, parallel);
        assert_eq!(sequential.len(), 3);
    }

    #[tokio::test]
    async fn single_worker_probes_in_index_order() {
        let probe = SetProbe::new(["images/100 (2).png"]);
        resolve(&probe, &plan(3, &["png"], 1), None).await;
        assert_eq!(
            probe.calls(),
            vec![
                "images/100 (1).png",
                "images/100 (2).png",
                "images/100 (3).png"
            ]
        );
    }

    #[tokio::test]
    async fn resolving_twice_is_idempotent() {
        let probe = SetProbe::new(["images/100 (1).png", "images/100 (4).mp4"]);
        let plan = plan(4, &["png", "mp4"], 3);
        let first = resolve(&probe, &plan, None).await;
        let second = resolve(&probe, &plan, None).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn progress_reports_every_index() {
        let probe = SetProbe::new(["images/100 (1).png", "images/100 (3).png"]);
        let (tx, mut rx) = mpsc::unbounded_channel();
        resolve(&probe, &plan(3, &["png"], 2), Some(&tx)).await;
        drop(tx);

        let mut updates = Vec::new();
        while let Some(update) = rx.recv().await {
            updates.push(update);
        }

        assert_eq!(updates.len(), 3);
        let last = updates.last().unwrap();
        assert_eq!(last.completed, 3);
        assert_eq!(last.total, 3);
        assert_eq!(last.found, 2);
    }

    #[tokio::test]
    async fn dropped_progress_receiver_is_harmless() {
        let probe = SetProbe::new(["images/100 (1).png"]);
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let urls = resolve(&probe, &plan(2, &["png"], 2), Some(&tx)).await;
        assert_eq!(urls, vec!["images/100 (1).png"]);
    }
}
