//! # Catalog Core
//!
//! Core types, errors, and utilities shared by every Catalog crate.
//!
//! - [`errors`]: application error type and the JSON error envelope
//! - [`filterable`]: distinct-value aggregation for filter dropdowns
//! - [`input`]: blank checks and status-literal parsing
//! - [`password`]: bcrypt hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use catalog_core::{AppError, hash_password, parse_status_flag};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Country not found"));
//! let hash = hash_password("admin123")?;
//! let active = parse_status_flag("true")?;
//! ```

pub mod errors;
pub mod filterable;
pub mod input;
pub mod password;

pub use errors::{AppError, ErrorBody, ErrorKind};
pub use filterable::{Filterable, FilterableColumn, collect_filterable_columns};
pub use input::{is_blank, non_blank, parse_status_flag, require_non_blank};
pub use password::{hash_password, verify_password};
