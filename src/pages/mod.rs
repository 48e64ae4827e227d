pub mod create_hospital;
pub mod edit_hospital;
pub mod home;
pub mod hospital_detail;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
