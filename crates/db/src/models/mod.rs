//! Domain model structs.
//!
//! The catalog is read-only, so there are no create/update DTOs: each
//! submodule carries a `FromRow` entity struct matching the database row
//! plus the derived shapes built from it.

pub mod noc;
