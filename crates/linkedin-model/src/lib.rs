pub mod auth;
pub(crate) mod custom_serde;
pub mod error;
pub mod idtypes;
pub mod job;
pub mod profile;
pub mod share;

pub use {auth::*, error::*, idtypes::*, job::*, profile::*, share::*};
