//! Cache management commands

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cache::{CacheStats, ResponseCache};
use crate::cli::{CacheDirArg, GlobalOptions, context};
use crate::config::Config;
use crate::error::Result;
use crate::output::format_size;

fn resolve_dir(global: &GlobalOptions, args: &CacheDirArg) -> Result<(Config, PathBuf)> {
    let config = Config::load(global.config_ref())?;
    let dir = context::cache_dir(&config, args.cache_dir.as_deref())?;
    Ok((config, dir))
}

/// Show cache status/statistics
pub fn status(global: &GlobalOptions, args: &CacheDirArg) -> Result<()> {
    let (config, dir) = resolve_dir(global, args)?;
    let stats = if dir.is_dir() {
        ResponseCache::new(&dir, Duration::from_secs(config.cache.ttl_seconds)).stats()
    } else {
        CacheStats::default()
    };

    println!("{}", format_status(&dir, &stats));
    Ok(())
}

fn format_status(dir: &Path, stats: &CacheStats) -> String {
    let mut lines = vec![
        "Cache Status".to_string(),
        "────────────────────────────────────────".to_string(),
        format!("Location:       {}", dir.display()),
        format!("Entries:        {}", stats.total_entries),
        format!("Valid entries:  {}", stats.valid_entries),
        format!("Expired:        {}", stats.expired_entries),
        format!("Total size:     {}", format_size(stats.total_size_bytes)),
    ];

    let local = |t: chrono::DateTime<chrono::Utc>| {
        t.with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    };
    if let Some(oldest) = stats.oldest_entry {
        lines.push(format!("Oldest entry:   {}", local(oldest)));
    }
    if let Some(newest) = stats.newest_entry {
        lines.push(format!("Newest entry:   {}", local(newest)));
    }
    lines.join("\n")
}

/// Clear all cache entries
pub fn clear(global: &GlobalOptions, args: &CacheDirArg) -> Result<()> {
    let (config, dir) = resolve_dir(global, args)?;
    let removed = if dir.is_dir() {
        ResponseCache::new(&dir, Duration::from_secs(config.cache.ttl_seconds)).clear()
    } else {
        0
    };

    if removed > 0 {
        println!("Cleared {} cache entries", removed);
    } else {
        println!("Cache was already empty");
    }
    Ok(())
}

/// Show cache path
pub fn path(global: &GlobalOptions, args: &CacheDirArg) -> Result<()> {
    let (_, dir) = resolve_dir(global, args)?;
    println!("{}", dir.display());
    Ok(())
}
