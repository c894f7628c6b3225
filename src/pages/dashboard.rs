//! FinBot dashboard: fixture stats, insights, budgets, and an assistant panel.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::components::insight_card::InsightCard;
use crate::components::page_header::PageHeader;
use crate::components::progress_bar::ProgressBar;
use crate::components::stat_card::StatCard;
use crate::fixtures::{BUDGETS, CHAT_TRANSCRIPT, DASHBOARD_INSIGHTS, STATS};
use crate::format::format_currency;
use crate::models::{BudgetCategory, Speaker};

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="page dashboard-page">
            <style>{include_str!("dashboard.css")}</style>

            <PageHeader title="FinBot" subtitle="Your personal finance assistant">
                <a href="/upload" class="btn btn-primary">
                    <IconGlyph icon=Icon::Upload />
                    "Upload Documents"
                </a>
            </PageHeader>

            <div class="container page-body">
                <div class="stat-grid">
                    {STATS.iter().map(|stat| view! { <StatCard stat=*stat /> }).collect::<Vec<_>>()}
                </div>

                <div class="dashboard-columns">
                    <div class="dashboard-main">
                        <div class="card">
                            <div class="card-header">
                                <h3>"AI Insights"</h3>
                                <p class="text-muted">"What FinBot noticed this month"</p>
                            </div>
                            <div class="stack">
                                {DASHBOARD_INSIGHTS
                                    .iter()
                                    .map(|insight| view! { <InsightCard insight=*insight /> })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>

                        <div class="card">
                            <div class="card-header">
                                <h3>"Budget Categories"</h3>
                                <p class="text-muted">"Spending against this month's limits"</p>
                            </div>
                            <div class="stack">
                                {BUDGETS.iter().map(|budget| view! { <BudgetRow budget=*budget /> }).collect::<Vec<_>>()}
                            </div>
                        </div>
                    </div>

                    <AssistantPanel />
                </div>
            </div>
        </div>
    }
}

#[component]
fn BudgetRow(budget: BudgetCategory) -> impl IntoView {
    let pct = budget.percent_used();
    let bar_class = if budget.is_over() { "progress-over" } else { "" };

    view! {
        <div class="budget-row">
            <div class="budget-labels">
                <span class="budget-name">{budget.name}</span>
                <span class="text-muted small">
                    {format!("{} / {}", format_currency(budget.spent), format_currency(budget.limit))}
                </span>
            </div>
            <ProgressBar value=Signal::derive(move || pct) class=bar_class />
        </div>
    }
}

/// Chat panel over a fixed transcript. Sending is a stub: the draft is
/// logged and nothing else happens.
#[component]
fn AssistantPanel() -> impl IntoView {
    let (draft, set_draft) = signal(String::new());

    let send = move || {
        let text = draft.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        log::debug!("Send message stub called with {} chars", text.len());
    };

    view! {
        <div class="card assistant-panel">
            <div class="card-header">
                <h3>
                    <IconGlyph icon=Icon::Bot />
                    " Ask FinBot"
                </h3>
            </div>
            <div class="chat-log">
                {CHAT_TRANSCRIPT
                    .iter()
                    .map(|msg| {
                        let class = match msg.speaker {
                            Speaker::Assistant => "chat-bubble chat-assistant",
                            Speaker::User => "chat-bubble chat-user",
                        };
                        view! { <div class=class>{msg.text}</div> }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="chat-input-row">
                <input
                    type="text"
                    class="input"
                    placeholder="Ask about your finances..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keypress=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            send();
                        }
                    }
                />
                <button class="btn btn-primary btn-icon" title="Send" on:click=move |_| send()>
                    <IconGlyph icon=Icon::Send />
                </button>
            </div>
        </div>
    }
}
