use leptos::*;
use crate::models::review::{Rating, Review};
use crate::routes;

#[component]
pub fn ReviewsList(reviews: Vec<Review>) -> impl IntoView {
    view! {
        <div class="reviews-grid">
            {
                reviews.into_iter().map(|review| {
                    view! { <ReviewCard review=review /> }
                }).collect::<Vec<_>>()
            }
        </div>
    }
}

/// One review. With `full` set the "Read more" link is left out, since the
/// card already is the full review.
#[component]
pub fn ReviewCard(review: Review, #[prop(optional)] full: bool) -> impl IntoView {
    let href = routes::review_href(&review.id);
    let author = review.author_display().to_string();
    let product = review.product_label();

    view! {
        <article class="review-card" data-review-id=review.id.clone()>
            <StarRow rating=review.rating />
            <h3 class="review-title">{ review.title }</h3>
            {product.map(|label| view! {
                <p class="review-product">{ label }</p>
            })}
            <p class="review-content">{ review.content }</p>
            <div class="review-author">{ format!("By {}", author) }</div>
            {(!full).then(|| view! {
                <a href=href class="review-more">{ "Read more →" }</a>
            })}
        </article>
    }
}

#[component]
fn StarRow(rating: Rating) -> impl IntoView {
    view! {
        <div class="review-stars" aria-label=format!("{} out of {}", rating.value(), Rating::MAX)>
            {(0..Rating::MAX).map(|i| {
                let class = if rating.is_filled(i) { "star star-filled" } else { "star" };
                view! { <span class=class>"★"</span> }
            }).collect::<Vec<_>>()}
        </div>
    }
}
