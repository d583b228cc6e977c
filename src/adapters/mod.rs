// Adapters layer: concrete birthday registries.

pub mod registry;

pub use registry::{DirectoryRegistry, RecordedBirthdays};
