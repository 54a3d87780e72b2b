use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Normal during SSR and before hydration finishes; not worth logging.
    #[error("canvas element is not mounted")]
    CanvasUnavailable,
    #[error("chart rendering failed: {0}")]
    ChartRender(String),
}

impl AppError {
    pub(crate) fn chart(error: impl std::fmt::Display) -> Self {
        Self::ChartRender(error.to_string())
    }
}

pub(crate) type AppResult<T> = Result<T, AppError>;
