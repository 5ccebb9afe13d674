//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access behind `ContactRepository`.
//! - Owns validation of the external contact representation.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod pagination;
pub mod contact;
#[cfg(test)]
pub mod test_support;
