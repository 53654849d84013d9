//! User service
//!
//! Registration and credential checking over the user store.

use crate::db::stores::{is_unique_violation, UserStore};
use crate::models::{NewUser, User};
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by user operations
#[derive(Debug, Error)]
pub enum UserServiceError {
    /// Login mismatch. The message never reveals whether the email exists.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration with an email that is already taken
    #[error("Email already registered")]
    EmailTaken,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// User service
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    /// Create a new user service
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Register a new user.
    ///
    /// The email pre-check produces the friendly duplicate message; the
    /// UNIQUE constraint on the users table catches any insert that races
    /// past it, and that failure maps to the same `EmailTaken` outcome.
    pub async fn register(&self, new_user: NewUser) -> Result<User, UserServiceError> {
        if self.store.find_by_email(&new_user.email).await?.is_some() {
            return Err(UserServiceError::EmailTaken);
        }

        match self.store.insert(&new_user).await {
            Ok(user) => {
                tracing::info!("Registered user {}", user.email);
                Ok(user)
            }
            Err(err) if is_unique_violation(&err) => Err(UserServiceError::EmailTaken),
            Err(err) => Err(err.into()),
        }
    }

    /// Check submitted credentials against the stored users.
    ///
    /// Walks every user row and compares both fields exactly; passwords are
    /// stored and compared as plaintext. The first matching row wins. No
    /// session or token is issued on success.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserServiceError> {
        let users = self.store.list_all().await?;

        for user in users {
            if user.email == email && user.password == password {
                return Ok(user);
            }
        }

        Err(UserServiceError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::stores::SqlxUserStore;
    use crate::db::{connect_test_pool, migrations};

    async fn setup_service() -> UserService {
        let pool = connect_test_pool().await.expect("Failed to create test pool");
        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        UserService::new(SqlxUserStore::boxed(pool))
    }

    fn new_user(email: &str, password: &str) -> NewUser {
        NewUser::new(email.to_string(), password.to_string(), "Someone".to_string())
    }

    #[tokio::test]
    async fn test_register_then_authenticate() {
        let service = setup_service().await;

        service
            .register(new_user("a@example.com", "hunter2"))
            .await
            .expect("Registration should succeed");

        let user = service
            .authenticate("a@example.com", "hunter2")
            .await
            .expect("Login should succeed");

        assert_eq!(user.email, "a@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_registration_is_conflict() {
        let service = setup_service().await;

        service
            .register(new_user("dup@example.com", "one"))
            .await
            .expect("First registration should succeed");

        let err = service
            .register(new_user("dup@example.com", "two"))
            .await
            .expect_err("Second registration should fail");

        assert!(matches!(err, UserServiceError::EmailTaken));
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_report_same_message() {
        let service = setup_service().await;

        service
            .register(new_user("known@example.com", "right"))
            .await
            .expect("Registration should succeed");

        let wrong_password = service
            .authenticate("known@example.com", "wrong")
            .await
            .expect_err("Wrong password should fail");
        let unknown_email = service
            .authenticate("unknown@example.com", "whatever")
            .await
            .expect_err("Unknown email should fail");

        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        assert!(matches!(wrong_password, UserServiceError::InvalidCredentials));
        assert!(matches!(unknown_email, UserServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_password_comparison_is_exact() {
        let service = setup_service().await;

        service
            .register(new_user("case@example.com", "Secret"))
            .await
            .expect("Registration should succeed");

        let err = service
            .authenticate("case@example.com", "secret")
            .await
            .expect_err("Case-different password should fail");

        assert!(matches!(err, UserServiceError::InvalidCredentials));
    }
}
