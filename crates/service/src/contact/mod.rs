//! Contact management: representation, store contract and orchestration.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use domain::ContactDto;
pub use repository::ContactRepository;
pub use service::ContactService;
