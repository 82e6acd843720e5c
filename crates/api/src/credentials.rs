//! The operator credential pair, read from the environment.

use synergy_auth::{AuthError, CredentialExchange};
use synergy_forms::FormFields;

/// A single email/password pair the dashboard signs in against.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    email: String,
    password: String,
}

impl EnvCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Read `OPERATOR_EMAIL` / `OPERATOR_PASSWORD`, falling back to the
    /// seeded dev pair.
    pub fn from_env() -> Self {
        let email = std::env::var("OPERATOR_EMAIL").unwrap_or_else(|_| {
            tracing::warn!("OPERATOR_EMAIL not set; using dev default");
            "user@nextmail.com".to_string()
        });
        let password = std::env::var("OPERATOR_PASSWORD").unwrap_or_else(|_| {
            tracing::warn!("OPERATOR_PASSWORD not set; using insecure dev default");
            "123456".to_string()
        });
        Self { email, password }
    }
}

#[async_trait::async_trait]
impl CredentialExchange for EnvCredentials {
    async fn sign_in(&self, fields: &FormFields) -> Result<(), anyhow::Error> {
        let email = fields.get("email").unwrap_or_default();
        let password = fields.get("password").unwrap_or_default();

        if email == self.email && password == self.password {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        pairs.iter().copied().collect()
    }

    #[tokio::test]
    async fn matching_pair_signs_in() {
        let creds = EnvCredentials::new("operator@example.com", "secret");
        let result = creds
            .sign_in(&fields(&[("email", "operator@example.com"), ("password", "secret")]))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn wrong_password_is_an_invalid_credential() {
        let creds = EnvCredentials::new("operator@example.com", "secret");
        let err = creds
            .sign_in(&fields(&[("email", "operator@example.com"), ("password", "nope")]))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AuthError>(),
            Some(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn absent_fields_never_match() {
        let creds = EnvCredentials::new("operator@example.com", "secret");
        assert!(creds.sign_in(&fields(&[])).await.is_err());
    }
}
