//! Authentication and authorization gates.
//!
//! Layer order matters: `authorize::apply` must sit inside `authenticate::require`
//! (apply the role gate first, then wrap with authentication).

pub mod authenticate;
pub mod authorize;

pub use authorize::RoleGate;
