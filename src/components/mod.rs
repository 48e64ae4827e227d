pub mod error_banner;
pub mod guarded;
pub mod hospital_card;
pub mod hospital_form;
pub mod navbar;
pub mod sidebar;
pub mod user_guide;
