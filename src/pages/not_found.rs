use leptos::*;
use crate::routes;

#[component]
pub fn NotFound() -> impl IntoView {
    // Let the server answer with a 404 when this page is rendered there.
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_actix::ResponseOptions>() {
            response.set_status(actix_web::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="gate-center">
            <h1>{ "Page not found" }</h1>
            <a href=routes::HOME>{ "Back to OpenHeart" }</a>
        </div>
    }
}
