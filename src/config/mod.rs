// Replacement jobs: the built-in scores page job and TOML job files

pub mod config_loader;
pub mod job;

pub use config_loader::{JobFile, JobLoader};
pub use job::ReplaceJob;
