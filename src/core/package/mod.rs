mod importer;
mod inspector;

pub use importer::{import_package, list_subdirs};
pub use inspector::{inspect, PackageMetadata, PackageType};
