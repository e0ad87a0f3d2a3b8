//! Randomness handed to the vitals generator.
//!
//! Production uses the thread-local RNG. Setting a seed swaps in a single
//! shared `StdRng` so a whole demo session replays the same sequence.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

#[derive(Debug, Clone)]
pub enum SimulationRng {
    /// Fresh thread-local RNG per call; no shared state.
    Thread,
    /// One seeded RNG shared by every request.
    Seeded(Arc<Mutex<StdRng>>),
}

impl SimulationRng {
    pub fn thread() -> Self {
        SimulationRng::Thread
    }

    pub fn seeded(seed: u64) -> Self {
        SimulationRng::Seeded(Arc::new(Mutex::new(StdRng::seed_from_u64(seed))))
    }

    /// Seeded if `seed` is set, thread-local otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::thread, Self::seeded)
    }

    /// Run `f` with exclusive access to the RNG.
    ///
    /// The seeded lock is held only for the duration of `f`, which must not
    /// block or await.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        match self {
            SimulationRng::Thread => f(&mut rand::rng()),
            SimulationRng::Seeded(shared) => {
                // A panic mid-draw leaves the RNG state valid; keep using it.
                let mut guard = shared.lock().unwrap_or_else(|e| e.into_inner());
                f(&mut *guard)
            }
        }
    }
}
