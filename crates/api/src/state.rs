use std::sync::Arc;

use stockwatch_clients::RemoteClients;
use stockwatch_store::ReportStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc` or already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// The local report store.
    pub store: Arc<ReportStore>,
    /// Clients for the remote reports, votes, and status services.
    pub remote: RemoteClients,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
