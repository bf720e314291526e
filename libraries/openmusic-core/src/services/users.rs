use crate::error::Result;
use crate::id_gen::IdGenerator;
use crate::storage::UserStore;
use crate::types::{NewUser, User, UserCredentials, UserId};
use crate::validation::{UserPayload, Validate};
use std::sync::Arc;

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    ids: Arc<dyn IdGenerator>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { users, ids }
    }

    /// Register a user. `hash_password` runs only after the payload passed
    /// validation; a taken username fails with `Conflict`.
    pub async fn add_user<F>(&self, payload: UserPayload, hash_password: F) -> Result<UserId>
    where
        F: FnOnce(&str) -> Result<String>,
    {
        payload.validate()?;
        let password_hash = hash_password(&payload.password)?;

        let id = UserId::generate(self.ids.as_ref());
        self.users
            .create_user(
                id,
                NewUser {
                    username: payload.username,
                    password_hash,
                    fullname: payload.fullname,
                },
            )
            .await
    }

    pub async fn find_credentials(&self, username: &str) -> Result<Option<UserCredentials>> {
        self.users.find_credentials(username.to_string()).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.users.list_users().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::id_gen::SequentialIdGenerator;
    use crate::storage::MockUserStore;

    fn payload(username: &str) -> UserPayload {
        UserPayload {
            username: username.to_string(),
            password: "secret".to_string(),
            fullname: "Freddie Mercury".to_string(),
        }
    }

    #[tokio::test]
    async fn stores_hashed_password() {
        let mut users = MockUserStore::new();
        users
            .expect_create_user()
            .withf(|_, user| user.password_hash == "hashed:secret" && user.username == "freddie")
            .times(1)
            .returning(|id, _| Ok(id));

        let service = UserService::new(Arc::new(users), Arc::new(SequentialIdGenerator::new()));
        let id = service
            .add_user(payload("freddie"), |pw| Ok(format!("hashed:{pw}")))
            .await
            .unwrap();

        assert_eq!(id, UserId::new("user-1"));
    }

    #[tokio::test]
    async fn invalid_payload_is_never_hashed() {
        let service = UserService::new(
            Arc::new(MockUserStore::new()),
            Arc::new(SequentialIdGenerator::new()),
        );

        let result = service
            .add_user(payload(""), |_| panic!("hasher must not run"))
            .await;

        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }
}
