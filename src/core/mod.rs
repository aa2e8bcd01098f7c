//! Core types shared by every component: errors, the caller-owned
//! context, and the host collaborator traits.
//!
//! The host (the surrounding ERP) owns all state. This crate only talks
//! to it through [`HostDatabase`] and [`HostSession`].

pub mod clock;
mod context;
mod countries;
mod error;
mod host;

pub use context::*;
pub use countries::{EEA_COUNTRY_CODES, EU_COUNTRY_CODES, is_eea_member, is_eu_member};
pub use error::*;
pub use host::*;
