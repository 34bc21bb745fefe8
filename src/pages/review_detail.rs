use leptos::*;
use leptos_router::use_params_map;
use crate::components::disclaimer_gate::DisclaimerGate;
use crate::components::reviews_list::ReviewCard;
use crate::models::review::find_mock_review;
use crate::routes;

#[component]
pub fn ReviewDetailPage() -> impl IntoView {
    let params = use_params_map();
    let review_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    view! {
        <div class="container">
            <a href=routes::REVIEWS class="back-link">{ "← All reviews" }</a>
            <DisclaimerGate>
                {move || match find_mock_review(&review_id()) {
                    Some(review) => view! { <ReviewCard review=review full=true /> }.into_view(),
                    None => view! { <p class="not-found">{ "Review not found" }</p> }.into_view(),
                }}
            </DisclaimerGate>
        </div>
    }
}
