pub mod controller;
pub mod router;

pub use router::init_company_types_router;
