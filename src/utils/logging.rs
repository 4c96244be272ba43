//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the Ummah admin core.

use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "ummah-admin.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Log workflow transitions with structured data
pub fn log_transition(entity_kind: &str, entity_id: &str, transition: &str, success: bool) {
    if success {
        info!(
            entity_kind = entity_kind,
            entity_id = entity_id,
            transition = transition,
            "Workflow transition executed"
        );
    } else {
        warn!(
            entity_kind = entity_kind,
            entity_id = entity_id,
            transition = transition,
            "Workflow transition failed"
        );
    }
}

/// Log API errors with context
pub fn log_api_error(endpoint: &str, error: &str, context: Option<&str>) {
    error!(
        endpoint = endpoint,
        error = error,
        context = context,
        "API error occurred"
    );
}

/// Log admin actions
pub fn log_admin_action(action: &str, target: Option<&str>, details: Option<&str>) {
    warn!(
        action = action,
        target = target,
        details = details,
        "Admin action performed"
    );
}

/// Log session lifecycle events (login, logout, invalidation)
pub fn log_session_event(event: &str, details: Option<&str>) {
    info!(event = event, details = details, "Session event");
}

/// Log collection refresh results
pub fn log_collection_load(resource: &str, count: usize, success: bool) {
    if success {
        debug!(resource = resource, count = count, "Collection loaded");
    } else {
        warn!(resource = resource, "Collection load failed, degraded to empty list");
    }
}
