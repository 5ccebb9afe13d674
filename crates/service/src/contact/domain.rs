use std::borrow::Cow;

use chrono::{NaiveDate, Utc};
use models::contact;
use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Optional phone: empty, or 7-20 digits/spaces/dashes/parentheses with a leading `+` allowed.
pub static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^$|^\+?[0-9\-\s()]{7,20}$").expect("phone pattern is valid"));

/// External representation of a contact.
///
/// `id`, `createdAt` and `updatedAt` are read-only: they are populated on the
/// way out and ignored on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactDto {
    #[serde(default)]
    pub id: Option<Uuid>,

    #[serde(default, deserialize_with = "null_as_blank")]
    #[validate(
        custom(function = "name_required"),
        length(max = 100, message = "Name must not exceed 100 characters")
    )]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_blank")]
    #[validate(
        custom(function = "last_name_required"),
        length(max = 100, message = "Last name must not exceed 100 characters")
    )]
    pub last_name: String,

    #[serde(default)]
    #[validate(
        length(max = 20, message = "Phone must not exceed 20 characters"),
        regex(path = "PHONE_RE", message = "Phone number format is invalid")
    )]
    pub phone: Option<String>,

    #[serde(default)]
    #[validate(
        custom(function = "email_valid"),
        length(max = 255, message = "Email must not exceed 255 characters")
    )]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(length(max = 255, message = "Address line 1 must not exceed 255 characters"))]
    pub address_line1: Option<String>,

    #[serde(default)]
    #[validate(length(max = 255, message = "Address line 2 must not exceed 255 characters"))]
    pub address_line2: Option<String>,

    #[serde(default)]
    #[validate(length(max = 100, message = "Country must not exceed 100 characters"))]
    pub country: Option<String>,

    #[serde(default)]
    #[validate(length(max = 100, message = "State must not exceed 100 characters"))]
    pub state: Option<String>,

    #[serde(default)]
    #[validate(length(max = 100, message = "City must not exceed 100 characters"))]
    pub city: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "birthday_in_past"))]
    pub birthday: Option<NaiveDate>,

    #[serde(default)]
    pub created_at: Option<DateTimeWithTimeZone>,

    #[serde(default)]
    pub updated_at: Option<DateTimeWithTimeZone>,
}

/// Required text fields treat an explicit `null` like a missing value so validation reports it.
fn null_as_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn error_with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn name_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error_with_message("not_blank", "Name is required"));
    }
    Ok(())
}

fn last_name_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error_with_message("not_blank", "Last name is required"));
    }
    Ok(())
}

/// Empty means "no email"; anything else must be a well-formed address.
fn email_valid(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || validator::validate_email(value) {
        return Ok(());
    }
    Err(error_with_message("email", "Email must be valid"))
}

fn birthday_in_past(value: &NaiveDate) -> Result<(), ValidationError> {
    if *value >= Utc::now().date_naive() {
        return Err(error_with_message("past", "Birthday must be in the past"));
    }
    Ok(())
}

impl ContactDto {
    /// Build a new stored record. Client-supplied id and timestamps are discarded.
    pub fn into_new_model(self, id: Uuid, now: DateTimeWithTimeZone) -> contact::Model {
        contact::Model {
            id,
            name: self.name,
            last_name: self.last_name,
            phone: self.phone,
            email: self.email,
            address_line1: self.address_line1,
            address_line2: self.address_line2,
            country: self.country,
            state: self.state,
            city: self.city,
            birthday: self.birthday,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field of `existing`; id and created_at are kept.
    pub fn apply_to(self, existing: contact::Model, now: DateTimeWithTimeZone) -> contact::Model {
        contact::Model {
            updated_at: now,
            ..self.into_new_model(existing.id, existing.created_at)
        }
    }
}

impl From<contact::Model> for ContactDto {
    fn from(m: contact::Model) -> Self {
        Self {
            id: Some(m.id),
            name: m.name,
            last_name: m.last_name,
            phone: m.phone,
            email: m.email,
            address_line1: m.address_line1,
            address_line2: m.address_line2,
            country: m.country,
            state: m.state,
            city: m.city,
            birthday: m.birthday,
            created_at: Some(m.created_at),
            updated_at: Some(m.updated_at),
        }
    }
}
