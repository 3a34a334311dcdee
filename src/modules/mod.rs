pub mod auth;
pub mod company_types;
pub mod countries;
pub mod districts;
pub mod navigation;
pub mod rights;
pub mod users;
