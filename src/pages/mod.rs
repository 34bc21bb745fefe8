pub mod home;
pub mod new_review;
pub mod not_found;
pub mod review_detail;
pub mod reviews;
