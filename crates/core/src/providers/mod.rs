pub mod generation;
pub mod traits;
pub mod tsv;

// transport implementation
pub mod http;
