//! Document upload with a simulated analysis.
//!
//! Files dropped or picked are listed by name and size only. "Analyze" runs a
//! timer that fills a progress bar, then shows fixed results. No document is
//! read and no analysis takes place.

use std::ops::ControlFlow;

use leptos::prelude::*;

use crate::components::category_row::CategoryRow;
use crate::components::file_drop_zone::FileDropZone;
use crate::components::file_list::FileList;
use crate::components::icon::{Icon, IconGlyph};
use crate::components::insight_card::InsightCard;
use crate::components::page_header::PageHeader;
use crate::components::progress_bar::ProgressBar;
use crate::config::SiteConfig;
use crate::fixtures::{CATEGORIES, INSIGHTS, MONTHLY_TREND, SUMMARY};
use crate::format::format_currency;
use crate::models::UploadedFile;
use crate::session::{Phase, TickOutcome, UploadSession};
use crate::ticker::Ticker;

/// Advance the session by one tick and say whether the ticker should keep
/// going. Stops once the run finishes, when no run is active, or when the
/// session signal has been disposed along with the page.
fn on_tick(session: RwSignal<UploadSession>, step: u8) -> ControlFlow<()> {
    match session.try_update(|s| s.tick(step)) {
        Some(TickOutcome::Advanced(pct)) => {
            log::debug!("Simulated analysis at {}%", pct);
            ControlFlow::Continue(())
        }
        Some(TickOutcome::Finished) => {
            log::info!("Simulated analysis complete");
            ControlFlow::Break(())
        }
        Some(TickOutcome::Idle) | None => ControlFlow::Break(()),
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let analysis = expect_context::<SiteConfig>().analysis;
    let session = RwSignal::new(UploadSession::new());
    let ticker = StoredValue::new_local(None::<Ticker>);

    // Views switch on phase only; ticks must not rebuild the intake card.
    let phase = Memo::new(move |_| session.with(|s| s.phase()));
    let files = Memo::new(move |_| session.with(|s| s.files().to_vec()));
    let progress = Memo::new(move |_| session.with(|s| s.run().progress()));

    let stop_ticker = move || {
        ticker.try_update_value(|t| {
            if let Some(handle) = t.take() {
                handle.cancel();
            }
        });
    };

    on_cleanup(stop_ticker);

    let on_files = Callback::new(move |incoming: Vec<UploadedFile>| {
        if let Some(added) = session.try_update(|s| s.add_files(incoming)) {
            log::info!("Added {} file(s) to intake", added);
        }
    });

    let on_remove = Callback::new(move |index: usize| {
        if let Some(Some(removed)) = session.try_update(|s| s.remove_file(index)) {
            log::info!("Removed '{}' from intake", removed.name);
        }
    });

    let on_analyze = move |_: web_sys::MouseEvent| {
        if !session.try_update(|s| s.start()).unwrap_or(false) {
            return;
        }
        log::info!(
            "Simulated analysis started for {} file(s)",
            session.with_untracked(|s| s.files().len())
        );

        let handle = Ticker::start(analysis.tick_ms, move || on_tick(session, analysis.step));
        ticker.try_update_value(|t| {
            if let Some(previous) = t.replace(handle) {
                previous.cancel();
            }
        });
    };

    let on_reset = Callback::new(move |_: ()| {
        stop_ticker();
        session.update(|s| s.reset());
        log::info!("Upload session reset");
    });

    view! {
        <div class="page upload-page">
            <style>{include_str!("upload.css")}</style>

            <PageHeader
                title="Document Analysis"
                subtitle="Upload and analyze your financial documents"
                // "/" may be the landing page, so go to the dashboard explicitly
                back_href="/dashboard"
            />

            <div class="container narrow page-body">
                {move || match phase.get() {
                    Phase::Complete => view! { <ResultsPanel on_reset=on_reset /> }.into_any(),
                    current => view! {
                        <div class="stack intake">
                            <div class="card">
                                <div class="card-header">
                                    <h3>"Upload Financial Documents"</h3>
                                    <p class="text-muted">
                                        "Upload bank statements, receipts, budgets, or any financial documents for AI analysis"
                                    </p>
                                </div>

                                <FileDropZone on_files=on_files />
                                <FileList files=files on_remove=on_remove />

                                {(current == Phase::Collecting).then(|| view! {
                                    <Show when=move || files.with(|f| !f.is_empty())>
                                        <div class="analyze-action">
                                            <button class="btn btn-primary btn-lg" on:click=on_analyze>
                                                <IconGlyph icon=Icon::Bot />
                                                "Analyze Documents"
                                            </button>
                                        </div>
                                    </Show>
                                })}

                                {(current == Phase::Analyzing).then(|| view! {
                                    <div class="analysis-progress">
                                        <h4>"Analyzing Documents..."</h4>
                                        <p class="text-muted">"FinBot is processing your financial data"</p>
                                        <ProgressBar
                                            value=Signal::derive(move || f64::from(progress.get()))
                                            class="progress-lg"
                                        />
                                        <p class="text-muted small">
                                            {move || format!("{}% complete", progress.get())}
                                        </p>
                                    </div>
                                })}
                            </div>

                            <SupportedFormats />
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn SupportedFormats() -> impl IntoView {
    let formats = [
        (Icon::FileText, "Bank Statements", "PDF, CSV, Excel formats"),
        (Icon::Image, "Receipts & Images", "JPG, PNG image files"),
        (Icon::DollarSign, "Budget Sheets", "Excel, CSV, text files"),
    ];

    view! {
        <div class="card">
            <div class="card-header">
                <h3>"What FinBot Can Analyze"</h3>
            </div>
            <div class="format-grid">
                {formats
                    .into_iter()
                    .map(|(icon, title, detail)| view! {
                        <div class="format-item">
                            <IconGlyph icon=icon class="text-primary format-icon" />
                            <h4>{title}</h4>
                            <p class="text-muted small">{detail}</p>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// Fixed results shown once the simulated run completes.
#[component]
fn ResultsPanel(on_reset: Callback<()>) -> impl IntoView {
    view! {
        <div class="analysis-results">
            <div class="card success-banner">
                <IconGlyph icon=Icon::CheckCircle class="text-success banner-icon" />
                <div>
                    <h3>"Analysis Complete!"</h3>
                    <p>"FinBot has analyzed your documents and found key insights"</p>
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h3>"Document Summary"</h3>
                    <p class="text-muted">"Overview of analyzed financial data"</p>
                </div>
                <div class="summary-grid">
                    <SummaryItem value=SUMMARY.total_transactions.to_string() label="Transactions" />
                    <SummaryItem value=format_currency(SUMMARY.total_amount) label="Total Amount" />
                    <SummaryItem value=format_currency(SUMMARY.avg_transaction) label="Avg Transaction" />
                    <SummaryItem value=SUMMARY.time_range label="Time Range" />
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h3>
                        <IconGlyph icon=Icon::Bot />
                        " AI Insights & Recommendations"
                    </h3>
                    <p class="text-muted">"Personalized financial advice based on your document analysis"</p>
                </div>
                <div class="stack">
                    {INSIGHTS.iter().map(|insight| view! { <InsightCard insight=*insight /> }).collect::<Vec<_>>()}
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h3>"Spending Categories"</h3>
                    <p class="text-muted">"Breakdown of expenses by category"</p>
                </div>
                <div class="stack">
                    {CATEGORIES.iter().map(|category| view! { <CategoryRow category=*category /> }).collect::<Vec<_>>()}
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h3>"Monthly Trend"</h3>
                    <p class="text-muted">"Total spending per month"</p>
                </div>
                <div class="trend-strip">
                    {MONTHLY_TREND
                        .iter()
                        .map(|m| view! {
                            <div class="trend-month">
                                <span class="text-muted small">{m.month}</span>
                                <strong>{format_currency(m.amount)}</strong>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <div class="action-buttons">
                <button class="btn btn-outline" on:click=move |_| on_reset.run(())>
                    <IconGlyph icon=Icon::Upload />
                    "Analyze More Documents"
                </button>
                <button class="btn btn-primary">
                    <IconGlyph icon=Icon::Download />
                    "Export Report"
                </button>
                // explicit route; "/" may be configured as the landing page
                <a href="/dashboard" class="btn btn-outline">
                    <IconGlyph icon=Icon::ArrowLeft />
                    "Back to Dashboard"
                </a>
            </div>
        </div>
    }
}

#[component]
fn SummaryItem(#[prop(into)] value: String, label: &'static str) -> impl IntoView {
    view! {
        <div class="summary-item">
            <p class="summary-value">{value}</p>
            <p class="text-muted small">{label}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_session() -> UploadSession {
        let mut session = UploadSession::new();
        session.add_files(vec![UploadedFile::new("statement.pdf", 2048, "application/pdf")]);
        session.start();
        session
    }

    #[test]
    fn test_on_tick_continues_until_finished() {
        let owner = Owner::new();
        let session = owner.with(|| RwSignal::new(started_session()));

        for _ in 0..9 {
            assert_eq!(on_tick(session, 10), ControlFlow::Continue(()));
        }
        assert_eq!(on_tick(session, 10), ControlFlow::Break(()));
        assert!(session.with_untracked(|s| s.run().is_complete()));
        assert_eq!(session.with_untracked(|s| s.run().progress()), 100);
    }

    #[test]
    fn test_on_tick_stops_when_idle() {
        let owner = Owner::new();
        let session = owner.with(|| RwSignal::new(UploadSession::new()));

        assert_eq!(on_tick(session, 10), ControlFlow::Break(()));
        assert_eq!(session.with_untracked(|s| s.run().progress()), 0);
    }

    #[test]
    fn test_on_tick_stops_after_page_teardown() {
        let owner = Owner::new();
        let session = owner.with(|| RwSignal::new(started_session()));
        assert_eq!(on_tick(session, 10), ControlFlow::Continue(()));

        drop(owner);

        assert_eq!(on_tick(session, 10), ControlFlow::Break(()));
        assert!(session.try_get_untracked().is_none());
    }
}
