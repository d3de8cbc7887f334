//! Demonstrates first-match-wins config resolution across candidate
//! directories, the way a service would check an override location before
//! a system-wide default.
//!
//! Run with:
//! ```bash
//! cargo run --package structio-toml --example search_paths
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize, Deserialize)]
struct ServiceConfig {
    name: String,
    port: u16,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`;
    // the default shows the resolver's per-candidate debug output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    // Two candidate directories, in priority order: a (missing) override
    // location, then the system-wide default that actually has the file.
    let root = std::env::temp_dir().join("structio-search-paths-example");
    let override_dir = root.join("override/etc/app");
    let system_dir = root.join("usr/local/etc/app");
    std::fs::create_dir_all(&override_dir)?;

    let deployed = ServiceConfig {
        name: "svc".to_string(),
        port: 8080,
    };
    structio_toml::save(&deployed, system_dir.join("config.toml"))?;

    let search_paths = [&override_dir, &system_dir];
    let cfg: ServiceConfig = structio_toml::open_from_paths("config.toml", &search_paths)?;

    info!("resolved config: {} on port {}", cfg.name, cfg.port);

    std::fs::remove_dir_all(&root).ok();
    Ok(())
}
