pub mod storage;

pub use storage::{InMemoryPlatformRepository, InMemoryTemplateRepository, SimulatedLatency};
