//! The session gate and its error taxonomy.

use async_trait::async_trait;
use synergy_forms::FormFields;

/// Failures a credential backend distinguishes.
///
/// Backends signal rejection by returning one of these inside an
/// [`anyhow::Error`]; anything else they return is treated as an
/// infrastructure fault, not an authentication verdict.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("authentication failed: {0}")]
    Failed(String),
}

/// What the sign-in form shows when a session is denied.
///
/// The `Display` text is the user-facing copy, verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionDenied {
    #[error("Invalid credentials.")]
    InvalidCredentials,
    #[error("Something went wrong.")]
    Unknown,
}

/// A backend that can verify submitted credentials.
#[async_trait]
pub trait CredentialExchange: Send + Sync {
    /// Verify the submitted fields. `Ok` establishes a session; an
    /// [`AuthError`] inside the error denies one.
    async fn sign_in(&self, fields: &FormFields) -> Result<(), anyhow::Error>;
}

/// Outcome of an authentication attempt that reached a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    SignedIn,
    Denied(SessionDenied),
}

/// The gate itself: one credential exchange, one verdict per attempt.
pub struct SessionGate<X> {
    exchange: X,
}

impl<X: CredentialExchange> SessionGate<X> {
    pub fn new(exchange: X) -> Self {
        Self { exchange }
    }

    /// Run one sign-in attempt.
    ///
    /// Rejections from the exchange become [`GateOutcome::Denied`] with the
    /// appropriate user-facing copy. A failure that is not an [`AuthError`]
    /// is no verdict at all and propagates to the caller.
    pub async fn authenticate(
        &self,
        _prev: Option<&SessionDenied>,
        fields: &FormFields,
    ) -> Result<GateOutcome, anyhow::Error> {
        match self.exchange.sign_in(fields).await {
            Ok(()) => Ok(GateOutcome::SignedIn),
            Err(err) => match err.downcast_ref::<AuthError>() {
                Some(AuthError::InvalidCredentials) => {
                    Ok(GateOutcome::Denied(SessionDenied::InvalidCredentials))
                }
                Some(_) => Ok(GateOutcome::Denied(SessionDenied::Unknown)),
                None => Err(err),
            },
        }
    }
}
