//! # Catalog API
//!
//! A REST API built with Rust, Axum, and PostgreSQL serving the reference
//! data behind an administrative front end: countries, districts, navigation
//! modules, rights and company types, plus the accounts allowed to edit them.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Bearer-token layer and AuthUser extractor
//! ├── modules/          # Feature modules
//! │   ├── auth/         # Register, login, account activation
//! │   ├── users/        # User listing
//! │   ├── countries/    # Country CRUD and status toggle
//! │   ├── districts/    # District CRUD, linked to countries
//! │   ├── navigation/   # Modules and module pages
//! │   ├── rights/       # Access levels
//! │   └── company_types/
//! ├── docs.rs           # OpenAPI document
//! ├── router.rs         # Route tree and layers
//! └── state.rs          # Shared application state
//! ```
//!
//! Feature modules follow the same layout:
//!
//! - `mod.rs`: module exports
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: business rules, when there are any beyond a listing
//! - `router.rs`: Axum router configuration
//!
//! Models live in `catalog-models`; table access goes through the generic
//! repository in `catalog-db`.
//!
//! ## Authentication
//!
//! Registration creates an inactive account. An administrator activates it
//! through `PATCH /api/auth/UpdateStatus/{id_hash}/true`, after which
//! `POST /api/auth/login` returns a bearer token (default lifetime one hour).
//! Every other route requires that token.
//!
//! The first administrator is created with the CLI:
//!
//! ```bash
//! cargo run --bin catalog-cli -- create-admin
//! ```
//!
//! ## API Documentation
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use catalog_auth;
pub use catalog_config;
pub use catalog_core;
pub use catalog_db;
pub use catalog_models;
