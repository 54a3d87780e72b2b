use leptos::prelude::*;

use super::icon::Icon;

/// One headline metric: uppercase label, big value, accent stripe, faded
/// icon.
#[component]
pub fn MetricCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    icon: icondata_core::Icon,
    /// Accent as a tailwind border class, e.g. "border-l-blue-500". The
    /// matching text class is derived from it.
    #[prop(into)] border_color: String,
) -> impl IntoView {
    let label_color = border_color.replace("border-l-", "text-");
    view! {
        <div class=format!(
            "panel p-4 border-l-4 bg-gradient-to-br to-transparent {}",
            border_color,
        )>
            <div class="flex justify-between items-start">
                <div>
                    <div class=format!(
                        "text-xs font-bold uppercase tracking-wider mb-2 {}",
                        label_color,
                    )>{label}</div>
                    <div class="text-3xl font-bold text-[color:var(--color-text)]">{value}</div>
                </div>
                <span class=format!("text-3xl opacity-20 {}", label_color)>
                    <Icon icon=icon />
                </span>
            </div>
        </div>
    }
}
