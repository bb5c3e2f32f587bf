//! User service — account creation and login
//!
//! Passwords are stored and compared as plain text. That mirrors the
//! upstream system this service replaces; see DESIGN.md before exposing
//! this to real traffic.

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, DomainResult, NewUser, User, UserRepository};

pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create an account. No validation here; the unique index on
    /// `users.email` rejects duplicates.
    pub async fn create(&self, user: NewUser) -> DomainResult<User> {
        let created = self.repo.save(user).await?;
        info!("User created: {} (id={})", created.email, created.id);
        Ok(created)
    }

    pub async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.repo.find_by_email(email).await
    }

    /// Check credentials. Unknown email and wrong password produce the same
    /// error, so callers cannot probe which emails are registered.
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<User> {
        match self.find_by_email(email).await? {
            Some(user) if user.password == password => Ok(user),
            _ => Err(DomainError::Unauthorized("Credenciales inválidas".into())),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;

    struct InMemoryUsers {
        rows: Mutex<Vec<User>>,
    }

    impl InMemoryUsers {
        fn new() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryUsers {
        async fn save(&self, user: NewUser) -> DomainResult<User> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|u| u.email == user.email) {
                return Err(DomainError::Conflict(format!(
                    "users.email: {}",
                    user.email
                )));
            }
            let now = Utc::now();
            let created = User {
                id: rows.len() as i32 + 1,
                name: user.name,
                email: user.email,
                password: user.password,
                created_at: now,
                updated_at: now,
            };
            rows.push(created.clone());
            Ok(created)
        }

        async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }
    }

    fn service() -> UserService<InMemoryUsers> {
        UserService::new(Arc::new(InMemoryUsers::new()))
    }

    fn new_user(email: &str, password: &str) -> NewUser {
        NewUser {
            name: "Ana".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_id() {
        let svc = service();
        let created = svc.create(new_user("a@b.com", "pw1")).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.email, "a@b.com");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_by_store() {
        let svc = service();
        svc.create(new_user("a@b.com", "pw1")).await.unwrap();
        let err = svc.create(new_user("a@b.com", "pw2")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn find_by_email_distinguishes_presence_by_option() {
        let svc = service();
        svc.create(new_user("a@b.com", "pw1")).await.unwrap();

        assert!(svc.find_by_email("a@b.com").await.unwrap().is_some());
        assert!(svc.find_by_email("x@y.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn authenticate_matches_exact_credentials() {
        let svc = service();
        svc.create(new_user("a@b.com", "pw1")).await.unwrap();

        let user = svc.authenticate("a@b.com", "pw1").await.unwrap();
        assert_eq!(user.email, "a@b.com");
    }

    #[tokio::test]
    async fn authenticate_rejects_wrong_password() {
        let svc = service();
        svc.create(new_user("a@b.com", "pw1")).await.unwrap();

        let err = svc.authenticate("a@b.com", "pw2").await.unwrap_err();
        match err {
            DomainError::Unauthorized(msg) => assert_eq!(msg, "Credenciales inválidas"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn authenticate_rejects_unknown_email_with_same_error() {
        let svc = service();
        svc.create(new_user("a@b.com", "pw1")).await.unwrap();

        let wrong_pw = svc.authenticate("a@b.com", "pw2").await.unwrap_err();
        let unknown = svc.authenticate("x@y.com", "pw1").await.unwrap_err();

        // Same failure class and message for both cases
        assert_eq!(wrong_pw.to_string(), unknown.to_string());
    }

    #[tokio::test]
    async fn authenticate_is_sensitive_to_single_character() {
        let svc = service();
        svc.create(new_user("a@b.com", "pw1")).await.unwrap();

        assert!(svc.authenticate("a@b.com", "pw1").await.is_ok());
        assert!(svc.authenticate("a@b.con", "pw1").await.is_err());
        assert!(svc.authenticate("a@b.com", "pw!").await.is_err());
    }
}
