use leptos::*;
use crate::components::auth_gate::AuthGate;
use crate::components::review_form::ReviewForm;

#[component]
pub fn NewReviewPage() -> impl IntoView {
    view! {
        <AuthGate>
            <div class="container">
                <h1>{ "Write a Review" }</h1>
                <ReviewForm />
            </div>
        </AuthGate>
    }
}
