use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::models::Stat;

#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    let change_class = if stat.positive { "stat-change positive" } else { "stat-change negative" };

    view! {
        <div class="card stat-card">
            <div class="stat-header">
                <span class="stat-label">{stat.label}</span>
                <IconGlyph icon=stat.icon class="text-primary" />
            </div>
            <div class="stat-value">{stat.value}</div>
            <p class=change_class>{stat.change}</p>
        </div>
    }
}
