use std::sync::Arc;

use zenith_db::ApplicationStore;

use crate::bulk::Notifier;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; every collaborator sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Persistence collaborator for the `applications` table.
    pub store: Arc<dyn ApplicationStore>,
    /// Email collaborator plus the sender identity and letterhead.
    pub notifier: Arc<Notifier>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
