pub mod app_state;
pub mod messages;
pub mod view_model;
