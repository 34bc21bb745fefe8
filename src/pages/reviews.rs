use leptos::*;
use crate::components::disclaimer_gate::DisclaimerGate;
use crate::components::reviews_list::ReviewsList;
use crate::models::review::mock_reviews;
use crate::routes;

#[component]
pub fn ReviewsPage() -> impl IntoView {
    view! {
        <div class="container">
            <div class="page-header">
                <h1>{ "Reviews" }</h1>
                <a href=routes::LOGIN class="btn-primary">{ "Login to Write Review" }</a>
            </div>
            <DisclaimerGate>
                // Mock data until reviews can be fetched
                <ReviewsList reviews=mock_reviews() />
            </DisclaimerGate>
        </div>
    }
}
