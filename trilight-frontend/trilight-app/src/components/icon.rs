use leptos::prelude::*;
use leptos::svg;

#[component]
pub fn Icon(#[prop(into)] icon: Signal<icondata_core::Icon>) -> impl IntoView {
    move || {
        let icon = icon.get();

        // Wrap the icon data in a <g> so the inert element always has a
        // single top level node.
        let mut data = String::with_capacity(icon.data.len() + 7);
        data.push_str("<g>");
        data.push_str(icon.data);
        data.push_str("</g>");

        svg::svg()
            .style(icon.style.map(|s| s.to_string()))
            .attr("x", icon.x)
            .attr("y", icon.y)
            .attr("width", "1em")
            .attr("height", "1em")
            .attr("viewBox", icon.view_box)
            .attr("stroke-linecap", icon.stroke_linecap)
            .attr("stroke-linejoin", icon.stroke_linejoin)
            .attr("stroke-width", icon.stroke_width)
            .attr("stroke", icon.stroke)
            .attr("fill", icon.fill.unwrap_or("currentColor"))
            .attr("role", "graphics-symbol")
            .child(svg::InertElement::new(data))
    }
}
