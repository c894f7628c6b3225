use leptos::prelude::*;

/// Horizontal bar filled to `value` percent (0-100).
#[component]
pub fn ProgressBar(
    #[prop(into)] value: Signal<f64>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <div
            class=format!("progress {}", class)
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", value.get())
        >
            <div
                class="progress-fill"
                style=move || format!("width: {:.1}%", value.get().clamp(0.0, 100.0))
            ></div>
        </div>
    }
}
