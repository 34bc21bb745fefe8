//! Main application entry point for OpenHeart Reviews.
//! Provides the session storage and session resolver the gates read from, then
//! lays out the navigation, routed pages and footer.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use std::rc::Rc;
use crate::components::layout::{Footer, NavBar};
use crate::gates::auth::{HttpSessionResolver, SharedSessionResolver};
use crate::pages::{
    home::HomePage, new_review::NewReviewPage, not_found::NotFound,
    review_detail::ReviewDetailPage, reviews::ReviewsPage,
};
use crate::storage::{BrowserSessionStorage, SharedSessionStore};

pub const SITE_TITLE: &str = "OpenHeart Reviews - Privacy-First Review Platform";
pub const SITE_DESCRIPTION: &str = "Share honest reviews anonymously. Better than MouthShut.";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Gate collaborators; tests mount pages with their own instead.
    provide_context::<SharedSessionStore>(Rc::new(BrowserSessionStorage));
    provide_context::<SharedSessionResolver>(Rc::new(HttpSessionResolver::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/openheart.css" />
        <Title text=SITE_TITLE />
        <Meta name="description" content=SITE_DESCRIPTION />
        <Router>
            <NavBar />
            <main class="min-h-screen">
                <Routes>
                    <Route path="/" view=HomePage />
                    <Route path="/reviews" view=ReviewsPage />
                    <Route path="/reviews/new" view=NewReviewPage />
                    <Route path="/reviews/:id" view=ReviewDetailPage />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
