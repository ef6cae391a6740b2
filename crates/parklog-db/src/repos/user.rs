//! User repository. Hashing lives in `parklog-auth`; this only stores hashes.

use parklog_core::entities::User;

use crate::error::DatabaseError;
use crate::helpers::read_count;
use crate::service::ParkService;

const GET_USER: &str = "SELECT username, password FROM users WHERE username = ?1";

const INSERT_USER: &str = "INSERT INTO users (username, password) VALUES (?1, ?2)";

const COUNT_USERS: &str = "SELECT count(*) FROM users";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        username: row.get::<String>(0)?,
        password_hash: row.get::<String>(1)?,
    })
}

impl ParkService {
    pub async fn get_user(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let mut rows = self.db().conn().query(GET_USER, [username]).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    /// Store a new account. Fails if the username is taken.
    pub async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<User, DatabaseError> {
        self.db()
            .conn()
            .execute(INSERT_USER, [username, password_hash])
            .await?;
        tracing::debug!(username, "created user");
        Ok(User {
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        })
    }

    pub async fn count_users(&self) -> Result<i64, DatabaseError> {
        let rows = self.db().conn().query(COUNT_USERS, ()).await?;
        read_count(rows).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::test_service;

    #[tokio::test]
    async fn create_and_get_user() {
        let svc = test_service().await;
        assert_eq!(svc.count_users().await.unwrap(), 0);

        svc.create_user("ranger", "$2b$04$hash").await.unwrap();

        let user = svc.get_user("ranger").await.unwrap().unwrap();
        assert_eq!(user.username, "ranger");
        assert_eq!(user.password_hash, "$2b$04$hash");
        assert_eq!(svc.count_users().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn unknown_user_is_none() {
        let svc = test_service().await;
        assert!(svc.get_user("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let svc = test_service().await;
        svc.create_user("ranger", "a").await.unwrap();
        assert!(svc.create_user("ranger", "b").await.is_err());
    }
}
