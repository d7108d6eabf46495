//! User repository: point lookup, ordered/limited scan, and batch commit
//! of staged changes.
//!
//! Queries use the runtime `sqlx::query` API with explicit binds so the
//! crate builds without offline macro data or a live DATABASE_URL.

use crate::{Result as DbErrorResult, StagedUserChanges};

use uinfo_core::{SortDirection, User};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Point lookup by the unique user identifier.
    pub async fn find_by_user_id(&self, user_id: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT user_id, username, age, city, phone_number, email
                FROM users
                WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_user).transpose()
    }

    /// Ordered, size-limited scan over all users.
    ///
    /// Records are ordered by username in the requested direction with a
    /// tie-break on `user_id ASC`, so equal usernames always come back in
    /// a deterministic order. A limit larger than the table returns
    /// everything.
    pub async fn find_all_sorted(
        &self,
        direction: SortDirection,
        limit: i64,
    ) -> DbErrorResult<Vec<User>> {
        // ORDER BY direction cannot be bound as a parameter; as_sql()
        // only ever yields "ASC" or "DESC".
        let sql = format!(
            r#"
                SELECT user_id, username, age, city, phone_number, email
                FROM users
                ORDER BY username {}, user_id ASC
                LIMIT ?
            "#,
            direction.as_sql()
        );

        let rows = sqlx::query(&sql).bind(limit).fetch_all(&self.pool).await?;

        rows.iter().map(map_user).collect()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS user_count FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("user_count")?)
    }

    /// Apply all staged inserts and updates in a single transaction.
    ///
    /// All-or-nothing: if any statement fails (for example a primary key
    /// violation on an insert), the transaction rolls back and no staged
    /// change reaches the store.
    pub async fn commit(&self, changes: &StagedUserChanges) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        for user in changes.inserts() {
            sqlx::query(
                r#"
                    INSERT INTO users (user_id, username, age, city, phone_number, email)
                    VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&user.user_id)
            .bind(&user.username)
            .bind(user.age)
            .bind(&user.city)
            .bind(&user.phone_number)
            .bind(&user.email)
            .execute(&mut *tx)
            .await?;
        }

        for user in changes.updates() {
            sqlx::query(
                r#"
                    UPDATE users
                    SET username = ?, age = ?, city = ?, phone_number = ?, email = ?
                    WHERE user_id = ?
                "#,
            )
            .bind(&user.username)
            .bind(user.age)
            .bind(&user.city)
            .bind(&user.phone_number)
            .bind(&user.email)
            .bind(&user.user_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }
}

fn map_user(row: &SqliteRow) -> DbErrorResult<User> {
    Ok(User {
        user_id: row.try_get("user_id")?,
        username: row.try_get("username")?,
        age: row.try_get("age")?,
        city: row.try_get("city")?,
        phone_number: row.try_get("phone_number")?,
        email: row.try_get("email")?,
    })
}
