//! Drawing sessions and the update context that serializes their mutations.
//!
//! Geometry is computed on the rayon pool; every change to a session's
//! vertex buffer and every presenter notification happens on the single
//! update thread, in the order the operations were issued.

pub mod pending;
#[allow(clippy::module_inception)]
pub mod session;
pub mod session_config;
pub mod session_id;
pub mod update_context;
