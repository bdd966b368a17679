//! Host information for the `/system-specs` endpoint. Informational only.

pub mod specs;

use axum::Json;
use specs::SystemSpecs;

pub async fn handle_system_specs() -> Json<SystemSpecs> {
    let specs = tokio::task::spawn_blocking(SystemSpecs::collect)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("System specs collection failed: {}", e);
            SystemSpecs {
                cpu_name: "Unknown".to_string(),
                cpu_cores: -1,
                ram_size: "Unknown".to_string(),
                is_docker: false,
            }
        });
    Json(specs)
}
