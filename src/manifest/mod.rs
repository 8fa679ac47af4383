//! Rendered-manifest processing: document splitting, workload decoding and
//! image extraction.

pub mod images;
pub mod splitter;
pub mod workload;

pub use images::{ImageRecord, images_in, records_from_manifests};
pub use splitter::split_documents;
pub use workload::Workload;
