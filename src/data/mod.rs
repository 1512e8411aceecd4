mod models;
mod fixture;

pub use models::{Customer, LocationNode};
pub use fixture::Fixture;
