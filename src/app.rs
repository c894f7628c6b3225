use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::config::{HomeView, SiteConfig};
use crate::pages::dashboard::DashboardPage;
use crate::pages::landing::LandingPage;
use crate::pages::upload::UploadPage;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let home = config.home_view;
    provide_context(config);

    view! {
        <Router>
            <main class="content">
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route
                        path=path!("/")
                        view=move || match home {
                            HomeView::Landing => view! { <LandingPage /> }.into_any(),
                            HomeView::Dashboard => view! { <DashboardPage /> }.into_any(),
                        }
                    />
                    <Route path=path!("/dashboard") view=DashboardPage />
                    <Route path=path!("/upload") view=UploadPage />
                </Routes>
            </main>
        </Router>
    }
}
