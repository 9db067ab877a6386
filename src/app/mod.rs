// Application layer - Use case interactors

pub mod container;
pub mod export_interactor;

// Re-export interactors
pub use container::{AppContainer, DefaultAppContainer};
pub use export_interactor::{ExportInteractor, ExportRequest, ExportResponse, RenderedDocument};
