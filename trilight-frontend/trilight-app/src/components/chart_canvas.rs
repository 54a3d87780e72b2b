use leptos::html::Canvas;
use leptos::prelude::*;
use plotters_canvas::CanvasBackend;

use crate::error::{AppError, AppResult};

/// Draw onto a mounted canvas, returning whether the canvas should stay
/// hidden behind its skeleton. A missing canvas is the normal state during
/// SSR and before hydration; actual drawing failures get logged.
pub(crate) fn render_on<F>(canvas: NodeRef<Canvas>, draw: F) -> bool
where
    F: FnOnce(CanvasBackend) -> AppResult<()>,
{
    let result = canvas
        .get()
        .ok_or(AppError::CanvasUnavailable)
        .and_then(|canvas| {
            CanvasBackend::with_canvas_object(canvas).ok_or(AppError::CanvasUnavailable)
        })
        .and_then(draw);
    match result {
        Ok(()) => false,
        Err(AppError::CanvasUnavailable) => true,
        Err(error) => {
            log::error!("{error}");
            true
        }
    }
}
