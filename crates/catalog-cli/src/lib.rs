//! # Catalog CLI
//!
//! Administrative and seeding utilities for Catalog development databases.
//!
//! ```ignore
//! use catalog_cli::seeder::{SeedConfig, seed_all};
//!
//! seed_all(&pool, SeedConfig::new(10, 50)).await?;
//! ```

pub mod admin;
pub mod seeder;
