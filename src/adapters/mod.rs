// Adapters - External system implementations

pub mod fs_local;
pub mod script_file;
pub mod toml_config;
pub mod tracing_log;

// Re-export adapters
pub use fs_local::LocalFsAdapter;
pub use script_file::ScriptFileAdapter;
pub use toml_config::TomlConfigAdapter;
pub use tracing_log::TracingLogAdapter;
