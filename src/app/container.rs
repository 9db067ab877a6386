use std::sync::Arc;

use crate::adapters::{LocalFsAdapter, ScriptFileAdapter, TomlConfigAdapter, TracingLogAdapter};
use crate::app::export_interactor::ExportInteractor;
use crate::ports::{ConfigPort, FsPort, LogLevel, LogPort, ScriptSourcePort};

pub trait AppContainer: Send + Sync {
    fn export_interactor(&self) -> Arc<ExportInteractor>;
    fn config_port(&self) -> Arc<dyn ConfigPort>;
    fn script_port(&self) -> Arc<dyn ScriptSourcePort>;
}

pub struct DefaultAppContainer {
    export_interactor: Arc<ExportInteractor>,
    config_port: Arc<dyn ConfigPort>,
    script_port: Arc<dyn ScriptSourcePort>,
}

impl DefaultAppContainer {
    pub fn new() -> Self {
        Self::with_log_level(LogLevel::Info)
    }

    pub fn with_log_level(log_level: LogLevel) -> Self {
        let fs_port = Arc::new(LocalFsAdapter::new());
        let log_port = Arc::new(TracingLogAdapter::with_level(log_level));

        let export_interactor = Arc::new(ExportInteractor::new(
            Arc::clone(&fs_port) as Arc<dyn FsPort>,
            Arc::clone(&log_port) as Arc<dyn LogPort>,
        ));

        Self {
            export_interactor,
            config_port: Arc::new(TomlConfigAdapter::new()),
            script_port: Arc::new(ScriptFileAdapter::new()),
        }
    }
}

impl Default for DefaultAppContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContainer for DefaultAppContainer {
    fn export_interactor(&self) -> Arc<ExportInteractor> {
        Arc::clone(&self.export_interactor)
    }

    fn config_port(&self) -> Arc<dyn ConfigPort> {
        Arc::clone(&self.config_port)
    }

    fn script_port(&self) -> Arc<dyn ScriptSourcePort> {
        Arc::clone(&self.script_port)
    }
}
