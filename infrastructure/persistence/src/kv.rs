use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::{FromRow, SqlitePool};

use business::domain::errors::StorageError;

/// Storage keys, matching the names the web storefront keeps in `localStorage`.
pub mod keys {
    pub const CART: &str = "cart";
    pub const GUEST_ID: &str = "guestId";
    pub const USER_INFO: &str = "userInfo";
    pub const USER_TOKEN: &str = "userToken";
    pub const LEGACY_TOKEN: &str = "token";
    pub const WISHLIST: &str = "wishlist";
    pub const PENDING_WISHLIST: &str = "pendingWishlist";
}

#[derive(Debug, FromRow)]
pub struct KvEntryEntity {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// String key-value table shared by the typed repositories.
#[derive(Clone)]
pub struct KeyValueStore {
    pool: SqlitePool,
}

impl KeyValueStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn entry(&self, key: &str) -> Result<Option<KvEntryEntity>, StorageError> {
        sqlx::query_as::<_, KvEntryEntity>(
            "SELECT key, value, updated_at FROM kv_store WHERE key = ?",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| StorageError::read())
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entry(key).await?.map(|e| e.value))
    }

    pub async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r#"INSERT INTO kv_store (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT (key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|_| StorageError::write())?;

        Ok(())
    }

    pub async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.remove_all(&[key]).await
    }

    /// Deletes every key in one transaction.
    pub async fn remove_all(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await.map_err(|_| StorageError::write())?;
        for key in keys {
            sqlx::query("DELETE FROM kv_store WHERE key = ?")
                .bind(*key)
                .execute(&mut *tx)
                .await
                .map_err(|_| StorageError::write())?;
        }
        tx.commit().await.map_err(|_| StorageError::write())
    }

    /// Reads and decodes a JSON value. Undecodable values surface as `Corrupted`.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.get(key).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw).map(Some).map_err(|e| {
            tracing::warn!(key, error = %e, "stored value is not valid JSON for its type");
            StorageError::corrupted()
        })
    }

    pub async fn put_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|_| StorageError::write())?;
        self.put(key, &raw).await
    }
}

#[cfg(test)]
pub(crate) async fn test_store() -> KeyValueStore {
    use crate::db::{DatabaseConfig, create_sqlite_pool, run_migrations};

    let pool = create_sqlite_pool(&DatabaseConfig::in_memory())
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    KeyValueStore::new(pool)
}
