use leptos::*;
use crate::gates::auth::{use_session_resolver, AuthGateState};
use crate::routes;

/// Renders its children only for visitors with a login session.
#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let resolver = use_session_resolver();
    // Local resource: the check only ever runs in the browser.
    let session = create_local_resource(|| (), move |_| resolver.resolve());

    move || match AuthGateState::from_resolution(session.get().as_ref()) {
        AuthGateState::Loading => view! {
            <div class="gate-center">
                <div class="gate-loading">{ "Loading..." }</div>
            </div>
        }
        .into_view(),
        AuthGateState::LoginRequired => view! { <LoginRequired /> }.into_view(),
        AuthGateState::Granted => children().into_view(),
    }
}

#[component]
fn LoginRequired() -> impl IntoView {
    view! {
        <div class="gate-center">
            <div class="login-required">
                <h1>{ "Authentication Required" }</h1>
                <p>{ "You must be logged in to write a review." }</p>
                <a href=routes::login_href(routes::NEW_REVIEW) class="btn-primary login-link">
                    { "Login to Continue" }
                </a>
            </div>
        </div>
    }
}
