pub mod api;
pub mod constants;
pub mod query;
pub mod record_ref;
pub mod repository;
pub mod service_error;
pub mod validation;

pub use record_ref::{RecordRef, Reference};
pub use repository::{Referenced, RepositoryError};
pub use service_error::{FieldErrors, ServiceError};
