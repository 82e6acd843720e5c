//! `synergy-auth` — the session gate in front of the dashboard.
//!
//! Decoupled from HTTP and from any concrete credential backend: the gate
//! wraps a [`CredentialExchange`] and folds its failures into the two
//! messages the sign-in form is allowed to show.

pub mod gate;

pub use gate::{AuthError, CredentialExchange, GateOutcome, SessionDenied, SessionGate};
