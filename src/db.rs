pub mod inventory_repo;
pub use inventory_repo::InventoryRepository;
pub mod operations_repo;
pub use operations_repo::OperationsRepository;
pub mod store;
pub use store::{DataStore, PgDataStore};
