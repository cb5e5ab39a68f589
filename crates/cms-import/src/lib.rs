pub mod error;
pub mod mapper;
pub mod memory;
pub mod orchestrator;

pub use error::{ImportError, RowError};
pub use mapper::{RowPlan, map_row};
pub use memory::{ContentRecord, MemoryRepository, StoredValue};
pub use orchestrator::{ImportOptions, delete_all_of_type, run_import};
