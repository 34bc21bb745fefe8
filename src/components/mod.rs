pub mod auth_gate;
pub mod disclaimer_gate;
pub mod disclaimer_modal;
pub mod layout;
pub mod review_form;
pub mod reviews_list;
