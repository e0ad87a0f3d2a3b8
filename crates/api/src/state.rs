use std::sync::Arc;

use kavalan_core::registry::SubjectRegistry;
use kavalan_core::rng::SimulationRng;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Monitored subjects, fixed for the life of the process.
    pub registry: Arc<SubjectRegistry>,
    /// Randomness source for simulated readings.
    pub rng: SimulationRng,
}

impl AppState {
    /// Build state for `config`, seeding the RNG if the config asks for it.
    pub fn new(config: ServerConfig, registry: SubjectRegistry) -> Self {
        let rng = SimulationRng::from_seed(config.simulation_seed);
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            rng,
        }
    }
}
