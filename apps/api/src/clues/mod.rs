//! Clue storage — an opaque word → clue association keyed by puzzle id.
//!
//! Sessions are write-once: a puzzle's clues are stored when the puzzle is
//! generated and only read afterwards. Every backend applies the configured
//! TTL so abandoned puzzles do not accumulate for the life of the process.
//! The in-memory store is the default; set `CLUE_STORE=redis` to swap in the
//! Redis backend.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ClueStoreError {
    #[error("no clues stored for puzzle {0}")]
    NotFound(Uuid),

    #[error("clues already stored for puzzle {0}")]
    AlreadyStored(Uuid),

    #[error("clue store backend error: {0}")]
    Backend(String),
}

/// The storage contract. `put` is write-once per puzzle id; `get` surfaces a
/// missing or expired entry as `NotFound`, which callers map to a distinct
/// HTTP condition.
#[async_trait]
pub trait ClueStore: Send + Sync {
    async fn put(
        &self,
        puzzle_id: Uuid,
        clues: HashMap<String, String>,
    ) -> Result<(), ClueStoreError>;

    async fn get(&self, puzzle_id: Uuid) -> Result<HashMap<String, String>, ClueStoreError>;
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory backend (default)
// ────────────────────────────────────────────────────────────────────────────

struct StoredClues {
    clues: HashMap<String, String>,
    stored_at: DateTime<Utc>,
}

/// Process-local store with explicit TTL. Expired entries are treated as
/// absent and evicted opportunistically whenever the store is touched, so the
/// map's size stays bounded by the live session count.
pub struct InMemoryClueStore {
    entries: Mutex<HashMap<Uuid, StoredClues>>,
    ttl: Duration,
}

impl InMemoryClueStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    fn is_expired(&self, entry: &StoredClues, now: DateTime<Utc>) -> bool {
        now - entry.stored_at >= self.ttl
    }
}

#[async_trait]
impl ClueStore for InMemoryClueStore {
    async fn put(
        &self,
        puzzle_id: Uuid,
        clues: HashMap<String, String>,
    ) -> Result<(), ClueStoreError> {
        let now = Utc::now();
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| ClueStoreError::Backend("clue store mutex poisoned".to_string()))?;

        entries.retain(|_, entry| now - entry.stored_at < self.ttl);

        if entries.contains_key(&puzzle_id) {
            return Err(ClueStoreError::AlreadyStored(puzzle_id));
        }
        entries.insert(
            puzzle_id,
            StoredClues {
                clues,
                stored_at: now,
            },
        );
        Ok(())
    }

    async fn get(&self, puzzle_id: Uuid) -> Result<HashMap<String, String>, ClueStoreError> {
        let now = Utc::now();
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| ClueStoreError::Backend("clue store mutex poisoned".to_string()))?;

        match entries.get(&puzzle_id) {
            Some(entry) if self.is_expired(entry, now) => {
                entries.remove(&puzzle_id);
                Err(ClueStoreError::NotFound(puzzle_id))
            }
            Some(entry) => Ok(entry.clues.clone()),
            None => Err(ClueStoreError::NotFound(puzzle_id)),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Redis backend
// ────────────────────────────────────────────────────────────────────────────

/// Redis-backed store for multi-process deployments. The TTL rides on the key
/// (`SET NX EX`), so expiry needs no sweeper, and `NX` enforces write-once at
/// the backend rather than in application code.
pub struct RedisClueStore {
    client: redis::Client,
    ttl_seconds: u64,
}

impl RedisClueStore {
    pub fn new(client: redis::Client, ttl: Duration) -> Self {
        Self {
            client,
            ttl_seconds: ttl.num_seconds().max(1) as u64,
        }
    }

    fn key(puzzle_id: Uuid) -> String {
        format!("clues:{puzzle_id}")
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, ClueStoreError> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| ClueStoreError::Backend(e.to_string()))
    }
}

#[async_trait]
impl ClueStore for RedisClueStore {
    async fn put(
        &self,
        puzzle_id: Uuid,
        clues: HashMap<String, String>,
    ) -> Result<(), ClueStoreError> {
        let payload =
            serde_json::to_string(&clues).map_err(|e| ClueStoreError::Backend(e.to_string()))?;
        let mut conn = self.connection().await?;

        let stored: Option<String> = redis::cmd("SET")
            .arg(Self::key(puzzle_id))
            .arg(payload)
            .arg("NX")
            .arg("EX")
            .arg(self.ttl_seconds)
            .query_async(&mut conn)
            .await
            .map_err(|e| ClueStoreError::Backend(e.to_string()))?;

        match stored {
            Some(_) => Ok(()),
            None => Err(ClueStoreError::AlreadyStored(puzzle_id)),
        }
    }

    async fn get(&self, puzzle_id: Uuid) -> Result<HashMap<String, String>, ClueStoreError> {
        let mut conn = self.connection().await?;

        let payload: Option<String> = redis::cmd("GET")
            .arg(Self::key(puzzle_id))
            .query_async(&mut conn)
            .await
            .map_err(|e| ClueStoreError::Backend(e.to_string()))?;

        let payload = payload.ok_or(ClueStoreError::NotFound(puzzle_id))?;
        serde_json::from_str(&payload).map_err(|e| ClueStoreError::Backend(e.to_string()))
    }
}
