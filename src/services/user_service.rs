//! User service - Read, update and delete over registered users.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{normalize_email, PasswordChange, PublicUser, UserList};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserDirectory;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users, public fields only
    async fn list_users(&self) -> AppResult<UserList>;

    /// Get a user's public fields
    async fn get_user(&self, email: &str) -> AppResult<PublicUser>;

    /// Replace a user's password. The new password is validated first.
    async fn update_password(&self, email: &str, password: &str) -> AppResult<()>;

    /// Delete a user
    async fn delete_user(&self, email: &str) -> AppResult<()>;
}

/// Concrete implementation of UserService over a [`UserDirectory`].
pub struct UserManager {
    directory: Arc<dyn UserDirectory>,
}

impl UserManager {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<UserList> {
        Ok(UserList::from(self.directory.list_public().await))
    }

    async fn get_user(&self, email: &str) -> AppResult<PublicUser> {
        self.directory
            .get(&normalize_email(email))
            .await
            .map(PublicUser::from)
            .ok_or_not_found()
    }

    async fn update_password(&self, email: &str, password: &str) -> AppResult<()> {
        let change = PasswordChange::parse(password)?;
        let email = normalize_email(email);

        if !self.directory.update(&email, &change.password).await {
            return Err(AppError::NotFound);
        }

        tracing::info!(email = %email, "Password updated");
        Ok(())
    }

    async fn delete_user(&self, email: &str) -> AppResult<()> {
        let email = normalize_email(email);

        if !self.directory.delete(&email).await {
            return Err(AppError::NotFound);
        }

        tracing::info!(email = %email, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MSG_PASSWORD_TOO_SHORT;
    use crate::domain::User;
    use crate::infra::MockUserDirectory;

    fn is(actual: &str, expected: &str) -> bool {
        actual == expected
    }

    fn service(directory: MockUserDirectory) -> UserManager {
        UserManager::new(Arc::new(directory))
    }

    #[tokio::test]
    async fn test_list_users() {
        let mut directory = MockUserDirectory::new();
        directory.expect_list_public().returning(|| {
            vec![
                User::new("a@b.c", "pass").to_public(),
                User::new("d@e.f", "pass").to_public(),
            ]
        });

        let list = service(directory).list_users().await.unwrap();

        assert_eq!(list.count, 2);
        assert_eq!(list.items[1].email, "d@e.f");
    }

    #[tokio::test]
    async fn test_list_users_empty() {
        let mut directory = MockUserDirectory::new();
        directory.expect_list_public().returning(Vec::new);

        let list = service(directory).list_users().await.unwrap();

        assert_eq!(list.count, 0);
        assert!(list.items.is_empty());
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_get()
            .withf(|email| is(email, "foo@bar.com"))
            .returning(|email| Some(User::new(email, "secret")));

        let user = service(directory).get_user(" Foo@Bar.com").await.unwrap();

        assert_eq!(user.email, "foo@bar.com");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut directory = MockUserDirectory::new();
        directory.expect_get().returning(|_| None);

        let result = service(directory).get_user("x@y.z").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_update_password_success() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_update()
            .withf(|email, password| is(email, "a@b.c") && is(password, "new-pass"))
            .times(1)
            .returning(|_, _| true);

        assert!(service(directory)
            .update_password("A@B.C ", "new-pass")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_update_password_not_found() {
        let mut directory = MockUserDirectory::new();
        directory.expect_update().times(1).returning(|_, _| false);

        let result = service(directory).update_password("x@y.z", "abcd").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_update_password_validated_before_lookup() {
        let mut directory = MockUserDirectory::new();
        directory.expect_update().never();

        let result = service(directory).update_password("x@y.z", "abc").await;

        assert!(matches!(result.unwrap_err(), AppError::Validation(ref m) if m == MSG_PASSWORD_TOO_SHORT));
    }

    #[tokio::test]
    async fn test_delete_user() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_delete()
            .withf(|email| is(email, "a@b.c"))
            .times(1)
            .returning(|_| true);

        assert!(service(directory).delete_user("a@b.c").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut directory = MockUserDirectory::new();
        directory.expect_delete().returning(|_| false);

        let result = service(directory).delete_user("a@b.c").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }
}
