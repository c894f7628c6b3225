use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::models::Insight;

#[component]
pub fn InsightCard(insight: Insight) -> impl IntoView {
    let style = insight.kind.style();

    view! {
        <div class=format!("insight-card {}", style.bg_class)>
            <div class=format!("insight-icon {}", style.bg_class)>
                <IconGlyph icon=style.icon class=style.text_class />
            </div>
            <div class="insight-body">
                <div class="insight-heading">
                    <h4>{insight.title}</h4>
                    <span class="insight-amount">{insight.amount}</span>
                </div>
                <p class="text-muted">{insight.description}</p>
                <div class="insight-recommendation">
                    <strong>"Recommendation: "</strong>
                    {insight.recommendation}
                </div>
            </div>
        </div>
    }
}
