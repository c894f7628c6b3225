use leptos::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::hover::HoverState;
use crate::models::Service;

/// Service card that highlights itself while the pointer is over it.
#[component]
pub fn ServiceCard(
    service: Service,
    index: usize,
    hover: RwSignal<HoverState>,
) -> impl IntoView {
    let is_hovered = move || hover.with(|h| h.is_hovered(index));

    view! {
        <div
            class="card service-card"
            class:service-card-hovered=is_hovered
            on:mouseenter=move |_| hover.update(|h| h.enter(index))
            on:mouseleave=move |_| hover.update(|h| h.leave(index))
        >
            <div class="service-icon" class:service-icon-active=is_hovered>
                <IconGlyph icon=service.icon />
            </div>
            <h3 class="service-title">{service.title}</h3>
            <p class="service-description">{service.description}</p>
            <ul class="service-features">
                {service
                    .features
                    .iter()
                    .map(|feature| view! {
                        <li>
                            <IconGlyph icon=Icon::CheckCircle class="text-primary" />
                            <span>{*feature}</span>
                        </li>
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
