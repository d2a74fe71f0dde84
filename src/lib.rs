//! shelf application library
//!
//! Wires the project modules into a [`ModuleRegistry`] and runs them behind
//! the shelf HTTP server.

pub mod modules;

use anyhow::Context;
use shelf_kernel::{settings::Settings, InitCtx, ModuleRegistry};

/// Registry populated with every project module
pub fn registry() -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);
    registry
}

/// Run the application until a shutdown signal arrives.
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let registry = registry();
    let ctx = InitCtx {
        settings: &settings,
    };

    registry
        .init_all(&ctx)
        .await
        .context("module initialization failed")?;
    registry
        .start_all(&ctx)
        .await
        .context("module start failed")?;

    let served = shelf_http::start_server(&registry, &settings, shelf_http::shutdown_signal()).await;

    // Stop modules even when the server failed, then report the first error.
    let stopped = registry.stop_all().await;
    served?;
    stopped.context("module shutdown failed")
}
