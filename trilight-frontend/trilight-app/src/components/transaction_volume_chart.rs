use leptos::html::{Canvas, Div};
use leptos::prelude::*;
use leptos_use::use_element_size;
use trilight_api_types::MonthlyVolume;
use trilight_charts::draw_transaction_volume_chart;

use super::chart_canvas::render_on;
use super::skeleton::BoxSkeleton;
use super::theme::theme_chart_options;
use crate::error::AppError;

#[component]
pub fn TransactionVolumeChart(volumes: Vec<MonthlyVolume>) -> impl IntoView {
    let canvas = NodeRef::<Canvas>::new();
    let div = NodeRef::<Div>::new();
    let parent_size = use_element_size(div);
    let width = parent_size.width;
    let height = parent_size.height;
    let hidden = Memo::new(move |_| {
        width.track();
        height.track();
        render_on(canvas, |backend| {
            draw_transaction_volume_chart(backend, &volumes, theme_chart_options())
                .map_err(AppError::chart)
        })
    });
    view! {
        <div class="mx-auto min-h-[280px]" class:hidden=move || !hidden.get()>
            <BoxSkeleton />
        </div>
        <div node_ref=div class="flex flex-col min-h-[300px] mx-auto" class:hidden=hidden>
            <canvas
                width=width
                height=move || height.get().min(300.0)
                style=move || {
                    format!("width: {}px; height: {}px", width.get(), height.get().min(300.0))
                }
                node_ref=canvas
            ></canvas>
        </div>
    }
    .into_any()
}
