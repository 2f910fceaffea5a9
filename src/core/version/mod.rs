mod manager;
mod model;

pub use manager::VersionManager;
pub use model::Version;
