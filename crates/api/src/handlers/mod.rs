//! Request handlers.
//!
//! Handlers delegate to the query facade in `noc_db::navigator` and map
//! escalated errors via [`crate::error::AppError`].

pub mod noc;
