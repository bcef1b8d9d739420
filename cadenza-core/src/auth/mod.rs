//! Authorization state machine guarding the catalog store.
//!
//! The state is owned by the store. The initial state is whatever the store
//! reports, and the only transition this crate can cause is a permission
//! request:
//!
//! ```text
//! NotDetermined | Denied | Restricted --authorize()--> Authorized
//!                                      \-----------> Unauthorized(status)
//! ```
//!
//! Nothing here moves a status back to `NotDetermined`; only a settings change
//! outside the process can.

mod gate;

pub use gate::AuthorizationGate;
