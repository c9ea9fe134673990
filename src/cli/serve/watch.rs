//! File watching for `serve`.
//!
//! ```text
//! notify -> WatchTargets (filter) -> Debouncer (timing + dedup) -> reload_site -> status line
//! ```
//!
//! `folio.toml` is watched through its parent directory: editors that save
//! by renaming a new file over the old one would otherwise drop the watch.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossbeam::channel::{self, Receiver};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use rustc_hash::FxHashSet;

use crate::config::SiteConfig;
use crate::logger::{status_error, status_success, status_warning};
use crate::utils::path::normalize_path;
use crate::utils::plural_s;

const DEBOUNCE_MS: u64 = 300;

/// Paths whose changes trigger a reload.
pub struct WatchTargets {
    config_path: PathBuf,
    dirs: Vec<PathBuf>,
}

impl WatchTargets {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            config_path: normalize_path(&config.config_path),
            dirs: vec![
                normalize_path(&config.build.content),
                normalize_path(&config.build.icons),
            ],
        }
    }

    /// Directories handed to the watcher.
    fn roots(&self) -> Vec<PathBuf> {
        let mut roots = self.dirs.clone();
        if let Some(parent) = self.config_path.parent() {
            roots.push(parent.to_path_buf());
        }
        roots.dedup();
        roots
    }

    fn is_relevant(&self, path: &Path) -> bool {
        path == self.config_path || self.dirs.iter().any(|dir| path.starts_with(dir))
    }
}

/// Keeps watch roots attached.
///
/// Roots missing at startup are attached once they appear, and roots that
/// were removed and recreated are attached again.
struct WatchRoots {
    desired: Vec<PathBuf>,
    attached: FxHashSet<PathBuf>,
}

impl WatchRoots {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            desired: paths,
            attached: FxHashSet::default(),
        }
    }

    fn attach_existing(&mut self, watcher: &mut RecommendedWatcher) -> notify::Result<()> {
        for path in &self.desired {
            if !path.exists() {
                continue;
            }
            watcher.watch(path, RecursiveMode::NonRecursive)?;
            self.attached.insert(path.clone());
            crate::debug!("watch"; "{}", path.display());
        }
        Ok(())
    }

    fn maintain(&mut self, watcher: &mut RecommendedWatcher) {
        // Drop stale handles for roots that no longer exist.
        self.attached.retain(|path| path.exists());

        for path in &self.desired {
            if self.attached.contains(path) || !path.exists() {
                continue;
            }
            if watcher.watch(path, RecursiveMode::NonRecursive).is_ok() {
                self.attached.insert(path.clone());
                crate::debug!("watch"; "re-attached watch: {}", path.display());
            }
        }
    }
}

/// Watch `targets` until a shutdown signal arrives.
pub fn run(targets: &WatchTargets, shutdown_rx: &Receiver<()>) -> Result<()> {
    let (event_tx, event_rx) = channel::unbounded::<notify::Result<notify::Event>>();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        let _ = event_tx.send(res);
    })?;

    let mut roots = WatchRoots::new(targets.roots());
    roots.attach_existing(&mut watcher)?;
    let mut debouncer = Debouncer::new();

    loop {
        channel::select! {
            recv(shutdown_rx) -> _ => break,
            recv(event_rx) -> event => match event {
                Ok(Ok(event)) => debouncer.add_event(&event, targets),
                Ok(Err(e)) => crate::log!("watch"; "notify error: {}", e),
                Err(_) => break,
            },
            default(debouncer.sleep_duration()) => {
                roots.maintain(&mut watcher);
                if let Some(changed) = debouncer.take_if_ready() {
                    reload(&changed, &targets.config_path);
                }
            }
        }
    }
    Ok(())
}

fn reload(changed: &FxHashSet<PathBuf>, config_path: &Path) {
    if crate::core::is_shutdown() {
        return;
    }

    let names = changed
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy())
        .collect::<Vec<_>>()
        .join(", ");

    match super::reload_site(changed.contains(config_path)) {
        Ok(report) if report.has_errors() => {
            status_error(&format!("reloaded {names}"), &report.to_string());
        }
        Ok(report) if report.warning_count() > 0 => {
            status_warning(&format!("reloaded {names}, {report}"));
        }
        Ok(_) => status_success(&format!(
            "reloaded {} file{}: {names}",
            changed.len(),
            plural_s(changed.len())
        )),
        Err(e) => status_error("reload failed", &format!("{e:#}")),
    }
}

/// Collects changed paths until events stop arriving for `DEBOUNCE_MS`.
struct Debouncer {
    changes: FxHashSet<PathBuf>,
    last_event: Option<Instant>,
}

impl Debouncer {
    fn new() -> Self {
        Self {
            changes: FxHashSet::default(),
            last_event: None,
        }
    }

    fn add_event(&mut self, event: &notify::Event, targets: &WatchTargets) {
        use notify::EventKind;

        match event.kind {
            EventKind::Create(_) | EventKind::Remove(_) => {}
            // Ignore metadata-only changes (mtime/atime/chmod noise)
            EventKind::Modify(notify::event::ModifyKind::Metadata(_)) => return,
            EventKind::Modify(_) => {}
            _ => return,
        }

        for path in &event.paths {
            let path = normalize_path(path);
            if is_temp_file(&path) || !targets.is_relevant(&path) {
                continue;
            }
            crate::debug!("watch"; "{:?} {}", event.kind, path.display());
            self.changes.insert(path);
            self.last_event = Some(Instant::now());
        }
    }

    fn is_ready(&self) -> bool {
        self.last_event
            .is_some_and(|t| t.elapsed() >= Duration::from_millis(DEBOUNCE_MS))
            && !self.changes.is_empty()
    }

    fn take_if_ready(&mut self) -> Option<FxHashSet<PathBuf>> {
        if !self.is_ready() {
            return None;
        }
        self.last_event = None;
        Some(std::mem::take(&mut self.changes))
    }

    /// Time until the pending batch becomes ready.
    fn sleep_duration(&self) -> Duration {
        let Some(last_event) = self.last_event else {
            return Duration::from_secs(3600);
        };
        Duration::from_millis(DEBOUNCE_MS)
            .saturating_sub(last_event.elapsed())
            .max(Duration::from_millis(1))
    }
}

/// Check if path is a temp/backup file (editor artifacts).
fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
}
