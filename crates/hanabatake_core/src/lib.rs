//! Core domain logic for the Hanabatake task garden.
//! This crate is the single source of truth for business invariants.

pub mod bloom;
pub mod db;
pub mod logging;
pub mod model;
pub mod persist;
pub mod repo;
pub mod service;
pub mod store;

pub use bloom::engine::{derive, first_integer};
pub use bloom::random::{RandomSource, ThreadRandomSource};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::daily_note::DailyNote;
pub use model::flower::{Flower, FlowerId, FlowerSpec, FLOWER_COLORS, GARDEN_EXTENT};
pub use model::task::{Effort, QuantityUnit, Task, TaskId, TaskValidationError};
pub use persist::state_manager::{
    seed_tasks, PersistError, PersistResult, RestoredState, StateManager, DAILY_NOTE_KEY,
    FLOWERS_KEY, TASKS_KEY,
};
pub use repo::blob_repo::{BlobRepository, RepoError, RepoResult, SqliteBlobRepository};
pub use service::garden_service::{GardenService, ServiceError, ServiceResult};
pub use store::flower_store::FlowerStore;
pub use store::task_store::TaskStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
