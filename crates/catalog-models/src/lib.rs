//! # Catalog Models
//!
//! Database entities, request DTOs and response envelopes for the Catalog
//! API.
//!
//! - [`auth`]: register/login payloads and the token response
//! - [`users`]: accounts and role names
//! - [`countries`], [`districts`]: editable geographic reference data
//! - [`modules`]: navigation modules and their pages
//! - [`rights`], [`company_types`]: read-only lookup tables
//! - [`common`]: `{message, status}` and `{message, data}` envelopes

pub mod auth;
pub mod common;
pub mod company_types;
pub mod countries;
pub mod districts;
pub mod modules;
pub mod rights;
pub mod users;

mod timestamps;

pub use auth::{Claims, LoginRequest, LoginResponse, RegisterRequest};
pub use common::{DataResponse, MessageResponse};
pub use company_types::CompanyType;
pub use countries::{Country, CreateCountryDto, UpdateCountryDto};
pub use districts::{CreateDistrictDto, District, UpdateDistrictDto};
pub use modules::{Module, ModulePage};
pub use rights::Right;
pub use users::{User, roles};
