//! Models shared between the Edura web client and the REST backend it talks to.
//!
//! Everything here is plain serde data: authentication bodies, the user
//! profile, the backend error body and the catalog entities, plus the
//! [`models::Resource`] trait that binds each entity to its REST collection.
#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
