//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::SatangPaths;
pub use settings::Settings;
