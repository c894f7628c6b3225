use leptos::prelude::*;

use crate::components::icon::{Icon, IconGlyph};

/// FinBot header bar shared by the dashboard and upload screens.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    /// Where the back arrow points; no arrow when absent
    #[prop(optional, into)]
    back_href: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="container header-row">
                <div class="header-brand">
                    {back_href.map(|href| view! {
                        <a href=href class="btn btn-ghost btn-icon" title="Back">
                            <IconGlyph icon=Icon::ArrowLeft />
                        </a>
                    })}
                    <div class="brand-badge">
                        <IconGlyph icon=Icon::Bot />
                    </div>
                    <div>
                        <h1 class="header-title">{title}</h1>
                        <p class="text-muted small">{subtitle}</p>
                    </div>
                </div>
                {children.map(|c| c())}
            </div>
        </header>
    }
}
