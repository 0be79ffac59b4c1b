// Adapters layer: concrete cart sources the host can plug into the engine.

pub mod file_source;

pub use file_source::JsonFileCartSource;
