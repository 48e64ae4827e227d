//! Client-side form validation for auth and hospital forms.
//!
//! Validation runs before any request is built: a form with field errors is
//! never submitted. Each validator either returns the request body ready to
//! send or the per-field messages to render under the inputs.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use crate::config::PASSWORD_MIN_LEN;
use crate::net::types::{Credentials, HospitalInput, RegisterRequest};

pub const SPECIALITIES: [&str; 12] = [
    "Heart",
    "Ear",
    "Eye",
    "Skin",
    "Brain",
    "Dental",
    "Orthopedic",
    "Pediatric",
    "Gynecology",
    "Neurology",
    "Oncology",
    "Urology",
];

/// Field name -> message for the first rule each field broke.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    /// Forget the message for a field the user just edited.
    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

/// `local@domain.tld` shape: one `@`, no whitespace, and a dot with
/// characters on both sides somewhere after the `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.insert("email", "Please enter a valid email address");
    }
}

fn check_password(errors: &mut FieldErrors, password: &str) {
    if password.is_empty() {
        errors.insert("password", "Password is required");
    } else if password.chars().count() < PASSWORD_MIN_LEN {
        errors.insert("password", "Password must be at least 6 characters");
    }
}

/// Login form.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let email = email.trim();
    let mut errors = FieldErrors::default();
    check_email(&mut errors, email);
    check_password(&mut errors, password);
    errors.into_result(|| Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Register form: login rules plus a name and a matching confirmation.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterRequest, FieldErrors> {
    let name = name.trim();
    let email = email.trim();
    let mut errors = FieldErrors::default();
    if name.is_empty() {
        errors.insert("name", "Name is required");
    }
    check_email(&mut errors, email);
    check_password(&mut errors, password);
    if confirm.is_empty() {
        errors.insert("confirm", "Please confirm your password");
    } else if confirm != password {
        errors.insert("confirm", "Passwords do not match");
    }
    errors.into_result(|| RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Raw hospital form fields as typed.
#[derive(Clone, Debug, PartialEq)]
pub struct HospitalDraft {
    pub name: String,
    pub city: String,
    pub image: String,
    pub speciality: Vec<String>,
    pub rating: u8,
    pub description: String,
    /// Comma-separated image URLs.
    pub images: String,
    pub number_of_doctors: String,
    pub number_of_departments: String,
}

impl Default for HospitalDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            city: String::new(),
            image: String::new(),
            speciality: Vec::new(),
            rating: 1,
            description: String::new(),
            images: String::new(),
            number_of_doctors: String::new(),
            number_of_departments: String::new(),
        }
    }
}

impl From<&HospitalInput> for HospitalDraft {
    fn from(input: &HospitalInput) -> Self {
        let count = |n: u32| if n == 0 { String::new() } else { n.to_string() };
        Self {
            name: input.name.clone(),
            city: input.city.clone(),
            image: input.image.clone(),
            speciality: input.speciality.clone(),
            rating: input.rating,
            description: input.description.clone(),
            images: input.images.join(", "),
            number_of_doctors: count(input.number_of_doctors),
            number_of_departments: count(input.number_of_departments),
        }
    }
}

/// Split a comma-separated URL list, dropping blank entries.
pub fn parse_image_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Blank counts mean zero.
fn parse_count(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() { Some(0) } else { raw.parse().ok() }
}

/// Hospital create/edit form.
pub fn validate_hospital(draft: &HospitalDraft) -> Result<HospitalInput, FieldErrors> {
    let mut errors = FieldErrors::default();
    if draft.name.trim().is_empty() {
        errors.insert("name", "Name is required");
    }
    if draft.city.trim().is_empty() {
        errors.insert("city", "City is required");
    }
    if draft.image.trim().is_empty() {
        errors.insert("image", "Image URL is required");
    }
    let speciality: Vec<String> = draft
        .speciality
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    if speciality.is_empty() {
        errors.insert("speciality", "Select at least one speciality");
    }
    if !(1..=5).contains(&draft.rating) {
        errors.insert("rating", "Rating must be between 1 and 5");
    }
    let doctors = parse_count(&draft.number_of_doctors);
    if doctors.is_none() {
        errors.insert("numberOfDoctors", "Number of doctors must be a whole number");
    }
    let departments = parse_count(&draft.number_of_departments);
    if departments.is_none() {
        errors.insert("numberOfDepartments", "Number of departments must be a whole number");
    }

    errors.into_result(|| HospitalInput {
        name: draft.name.trim().to_owned(),
        city: draft.city.trim().to_owned(),
        image: draft.image.trim().to_owned(),
        speciality,
        rating: draft.rating,
        description: draft.description.trim().to_owned(),
        images: parse_image_list(&draft.images),
        number_of_doctors: doctors.unwrap_or_default(),
        number_of_departments: departments.unwrap_or_default(),
    })
}
