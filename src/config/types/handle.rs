//! Global config with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement, so
//! `folio serve` can pick up edits to `folio.toml` while requests are in flight.

use crate::config::SiteConfig;
use anyhow::Result;
use arc_swap::ArcSwap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Hash of the config file content currently loaded.
static CONFIG_HASH: AtomicU64 = AtomicU64::new(0);

#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Reload config from disk if content changed.
///
/// Returns `Ok(true)` if config was updated, `Ok(false)` if unchanged.
pub fn reload_config() -> Result<bool> {
    let current = cfg();
    let Some(cli) = current.cli else {
        return Ok(false);
    };

    let content = std::fs::read_to_string(&current.config_path)?;
    let new_hash = crate::utils::content_hash(&content);
    if new_hash == CONFIG_HASH.load(Ordering::Relaxed) {
        return Ok(false);
    }

    let new_config = SiteConfig::load(cli)?;
    CONFIG.store(Arc::new(new_config));
    CONFIG_HASH.store(new_hash, Ordering::Relaxed);
    Ok(true)
}

/// Publish the initial config.
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    if let Ok(content) = std::fs::read_to_string(&config.config_path) {
        CONFIG_HASH.store(crate::utils::content_hash(&content), Ordering::Relaxed);
    }

    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}
