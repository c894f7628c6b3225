use leptos::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::format::{format_currency, format_percent};
use crate::models::SpendingCategory;

#[component]
pub fn CategoryRow(category: SpendingCategory) -> impl IntoView {
    view! {
        <div class="category-row">
            <div class="category-info">
                <IconGlyph icon=Icon::Tag class="text-muted" />
                <div>
                    <p class="category-name">{category.name}</p>
                    <p class="text-muted small">
                        {format!("{} of total", format_percent(category.percentage))}
                    </p>
                </div>
            </div>
            <div class="category-amount">
                <strong>{format_currency(category.amount)}</strong>
                {category.trend.indicator().map(|(icon, class)| view! {
                    <IconGlyph icon=icon class=class />
                })}
            </div>
        </div>
    }
}
