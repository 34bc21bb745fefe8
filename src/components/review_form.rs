use leptos::*;
use leptos::ev::SubmitEvent;
use leptos::logging::log;
use crate::models::review::{Rating, ReviewDraft};
use crate::routes;

/// Review submission form. Submitting only collects and logs the draft; there
/// is no store to send it to yet. `on_draft` also receives it when given.
#[component]
pub fn ReviewForm(#[prop(optional, into)] on_draft: Option<Callback<ReviewDraft>>) -> impl IntoView {
    let (title, set_title) = create_signal(String::new());
    let (product_name, set_product_name) = create_signal(String::new());
    let (rating, set_rating) = create_signal(String::new());
    let (content, set_content) = create_signal(String::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = ReviewDraft::from_fields(
            title.get(),
            product_name.get(),
            &rating.get(),
            content.get(),
        );
        log!("[REVIEW] Draft collected, submission not wired up: {:?}", draft);
        if let Some(on_draft) = on_draft {
            on_draft.call(draft);
        }
    };

    view! {
        <form class="review-form" on:submit=handle_submit>
            <div class="field">
                <label for="title">{ "Review Title *" }</label>
                <input
                    type="text"
                    id="title"
                    name="title"
                    required
                    placeholder="Enter a concise title for your review"
                    on:input=move |e| set_title.set(event_target_value(&e))
                />
            </div>

            <div class="field">
                <label for="product_name">{ "Product/Service Name" }</label>
                <input
                    type="text"
                    id="product_name"
                    name="product_name"
                    placeholder="What are you reviewing?"
                    on:input=move |e| set_product_name.set(event_target_value(&e))
                />
            </div>

            <div class="field">
                <label for="rating">{ "Rating *" }</label>
                <select
                    id="rating"
                    name="rating"
                    required
                    on:change=move |e| set_rating.set(event_target_value(&e))
                >
                    <option value="">{ "Select rating" }</option>
                    {Rating::scale().map(|level| view! {
                        <option value=level.value().to_string()>{ level.to_string() }</option>
                    }).collect::<Vec<_>>()}
                </select>
            </div>

            <div class="field">
                <label for="content">{ "Review Content *" }</label>
                <textarea
                    id="content"
                    name="content"
                    required
                    rows="8"
                    placeholder="Share your detailed experience..."
                    on:input=move |e| set_content.set(event_target_value(&e))
                />
            </div>

            <div class="form-note">
                <p>
                    <strong>"Note:"</strong>
                    " Your review will be visible to all users. Please be honest but respectful in your feedback."
                </p>
            </div>

            <div class="form-actions">
                <button type="submit" class="btn-primary">{ "Submit Review" }</button>
                <a href=routes::REVIEWS class="btn-secondary">{ "Cancel" }</a>
            </div>
        </form>
    }
}
