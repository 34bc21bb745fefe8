// Paths the site links to. Only some of them have a page behind them.
pub const HOME: &str = "/";
pub const REVIEWS: &str = "/reviews";
pub const NEW_REVIEW: &str = "/reviews/new";
pub const LOGIN: &str = "/login";
pub const CATEGORIES: &str = "/categories";

/// Endpoint answering whether the current visitor has a login session.
pub const SESSION_API: &str = "/api/session";

pub fn review_href(id: &str) -> String {
    format!("{}/{}", REVIEWS, id)
}

/// Login link that sends the visitor back to `target` afterwards.
pub fn login_href(target: &str) -> String {
    format!("{}?redirect={}", LOGIN, target)
}
