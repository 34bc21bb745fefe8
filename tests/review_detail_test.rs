#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use leptos::*;
use leptos::logging::log;
use leptos_router::{Route, Router, Routes};
use std::rc::Rc;
use openheart::gates::disclaimer::{DISCLAIMER_FLAG_KEY, DISCLAIMER_FLAG_VALUE};
use openheart::pages::review_detail::ReviewDetailPage;
use openheart::storage::{MemorySessionStore, SessionStore, SharedSessionStore};

mod mocks;
use mocks::dom::{count, find, go_to, mount_container, settle, text_of};

wasm_bindgen_test_configure!(run_in_browser);

fn accepted_session() -> MemorySessionStore {
    let store = MemorySessionStore::new();
    store.set(DISCLAIMER_FLAG_KEY, DISCLAIMER_FLAG_VALUE).unwrap();
    store
}

async fn visit_detail(id: &str, path: &str, store: &MemorySessionStore) -> web_sys::HtmlElement {
    go_to(path);
    let container = mount_container(id);
    let store = store.clone();
    mount_to(container.clone(), move || {
        provide_context::<SharedSessionStore>(Rc::new(store));
        view! {
            <Router>
                <Routes>
                    <Route path="/reviews/:id" view=ReviewDetailPage />
                </Routes>
            </Router>
        }
    });
    settle().await;
    container
}

#[wasm_bindgen_test]
async fn test_known_id_shows_that_review() {
    let page = visit_detail("detail-1", "/reviews/1", &accepted_session()).await;

    assert_eq!(count(&page, ".review-card"), 1);
    assert!(find(&page, "[data-review-id=\"1\"]").is_some());
    assert_eq!(text_of(&page, ".review-title"), vec!["Great Product!".to_string()]);
    assert_eq!(text_of(&page, ".review-product"), vec!["Product: Laptop Stand".to_string()]);
    // Already the full review, so no link to itself
    assert!(find(&page, ".review-more").is_none());
    log!("[TEST] Review detail - PASSED");
}

#[wasm_bindgen_test]
async fn test_detail_sits_behind_the_disclaimer() {
    let page = visit_detail("detail-fresh", "/reviews/2", &MemorySessionStore::new()).await;

    assert!(find(&page, ".modal").is_some());
    assert_eq!(count(&page, ".review-card"), 0);
}

#[wasm_bindgen_test]
async fn test_unknown_id_shows_not_found() {
    let page = visit_detail("detail-99", "/reviews/99", &accepted_session()).await;

    assert_eq!(count(&page, ".review-card"), 0);
    assert_eq!(text_of(&page, ".not-found"), vec!["Review not found".to_string()]);
}
