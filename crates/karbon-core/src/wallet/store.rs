use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params};

use crate::migrations::{REQUIRED_CORE_TABLES, REQUIRED_META_KEYS, run_pending};
use crate::state::{
    ensure_wallet_directory, map_sqlite_error, open_connection, resolve_wallet_home, wallet_db_path,
};
use crate::wallet::types::{CoinEntry, CoinState};
use crate::{CoreError, CoreResult};

pub const COIN_STATE_KEY: &str = "coin_state";
pub const COIN_HISTORY_KEY: &str = "coin_history";

/// Persistence seam for the wallet. Operations stay pure over this trait so
/// tests can run against an in-memory store.
pub trait WalletStore {
    fn load_state(&mut self) -> CoreResult<CoinState>;
    fn save_state(&mut self, state: &CoinState) -> CoreResult<()>;
    fn load_history(&mut self) -> CoreResult<Vec<CoinEntry>>;
    fn save_history(&mut self, history: &[CoinEntry]) -> CoreResult<()>;
    /// Persists balance and history as one atomic write. Ops that touch
    /// both records go through here so a failure cannot leave a debit
    /// without its entry or an entry without its debit.
    fn save_state_and_history(
        &mut self,
        state: &CoinState,
        history: &[CoinEntry],
    ) -> CoreResult<()>;
}

/// Wallet records serialized as JSON under two fixed keys in a SQLite
/// key-value table. Unreadable persisted JSON is discarded and reset to the
/// default value rather than surfaced as an error.
pub struct SqliteWalletStore {
    connection: Connection,
    db_path: PathBuf,
}

impl SqliteWalletStore {
    pub fn open(home_override: Option<&Path>) -> CoreResult<Self> {
        let wallet_home = resolve_wallet_home(home_override)?;
        ensure_wallet_directory(&wallet_home)?;

        let db_path = wallet_db_path(&wallet_home);
        let mut connection = open_connection(&db_path)?;

        run_pending(&mut connection).map_err(|error| map_migration_error(&db_path, &error))?;
        verify_core_tables(&connection, &db_path)?;
        restore_meta_keys(&connection, &db_path)?;

        Ok(Self {
            connection,
            db_path,
        })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn kv_read(&self, key: &str) -> CoreResult<Option<String>> {
        self.connection
            .query_row(
                "SELECT value FROM internal_kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(|error| map_sqlite_error(&self.db_path, &error))
    }

    fn kv_write(&self, key: &str, value: &str) -> CoreResult<()> {
        kv_upsert(&self.connection, &self.db_path, key, value)
    }
}

fn kv_upsert(connection: &Connection, db_path: &Path, key: &str, value: &str) -> CoreResult<()> {
    let updated_at = Utc::now().to_rfc3339();
    connection
        .execute(
            "INSERT INTO internal_kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                            updated_at = excluded.updated_at",
            params![key, value, updated_at],
        )
        .map_err(|error| map_sqlite_error(db_path, &error))?;
    Ok(())
}

impl WalletStore for SqliteWalletStore {
    fn load_state(&mut self) -> CoreResult<CoinState> {
        let Some(raw) = self.kv_read(COIN_STATE_KEY)? else {
            let state = CoinState::default();
            self.save_state(&state)?;
            return Ok(state);
        };

        match serde_json::from_str::<CoinState>(&raw) {
            Ok(state) => Ok(state),
            Err(_) => {
                // Unreadable state resets to the default record.
                let state = CoinState::default();
                self.save_state(&state)?;
                Ok(state)
            }
        }
    }

    fn save_state(&mut self, state: &CoinState) -> CoreResult<()> {
        let body = serde_json::to_string(state)
            .map_err(|error| CoreError::internal_serialization(&error.to_string()))?;
        self.kv_write(COIN_STATE_KEY, &body)
    }

    fn load_history(&mut self) -> CoreResult<Vec<CoinEntry>> {
        let Some(raw) = self.kv_read(COIN_HISTORY_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<CoinEntry>>(&raw) {
            Ok(history) => Ok(history),
            Err(_) => Ok(Vec::new()),
        }
    }

    fn save_history(&mut self, history: &[CoinEntry]) -> CoreResult<()> {
        let body = serde_json::to_string(history)
            .map_err(|error| CoreError::internal_serialization(&error.to_string()))?;
        self.kv_write(COIN_HISTORY_KEY, &body)
    }

    fn save_state_and_history(
        &mut self,
        state: &CoinState,
        history: &[CoinEntry],
    ) -> CoreResult<()> {
        let state_body = serde_json::to_string(state)
            .map_err(|error| CoreError::internal_serialization(&error.to_string()))?;
        let history_body = serde_json::to_string(history)
            .map_err(|error| CoreError::internal_serialization(&error.to_string()))?;

        let transaction = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|error| map_sqlite_error(&self.db_path, &error))?;
        kv_upsert(&transaction, &self.db_path, COIN_STATE_KEY, &state_body)?;
        kv_upsert(&transaction, &self.db_path, COIN_HISTORY_KEY, &history_body)?;
        transaction
            .commit()
            .map_err(|error| map_sqlite_error(&self.db_path, &error))
    }
}

fn map_migration_error(db_path: &Path, error: &rusqlite_migration::Error) -> CoreError {
    match error {
        rusqlite_migration::Error::RusqliteError { query: _, err } => {
            let mapped = map_sqlite_error(db_path, err);
            if mapped.code == "wallet_locked"
                || mapped.code == "wallet_corrupt"
                || mapped.code == "wallet_init_permission_denied"
            {
                mapped
            } else {
                CoreError::migration_failed(db_path, &error.to_string())
            }
        }
        _ => CoreError::migration_failed(db_path, &error.to_string()),
    }
}

fn verify_core_tables(connection: &Connection, db_path: &Path) -> CoreResult<()> {
    for table_name in REQUIRED_CORE_TABLES {
        let found = connection
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![table_name],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(|error| map_sqlite_error(db_path, &error))?;
        if found.is_none() {
            return Err(CoreError::wallet_corrupt(db_path));
        }
    }
    Ok(())
}

fn restore_meta_keys(connection: &Connection, db_path: &Path) -> CoreResult<()> {
    // Insert-only repair: missing required keys are restored, existing values
    // are left untouched.
    for (meta_key, default_value) in REQUIRED_META_KEYS {
        connection
            .execute(
                "INSERT OR IGNORE INTO internal_meta (key, value) VALUES (?1, ?2)",
                params![meta_key, default_value],
            )
            .map_err(|error| map_sqlite_error(db_path, &error))?;
    }
    Ok(())
}

/// In-memory store used by unit tests and the wallet op tests.
#[derive(Debug, Default)]
pub struct MemoryWalletStore {
    pub state: CoinState,
    pub history: Vec<CoinEntry>,
}

impl WalletStore for MemoryWalletStore {
    fn load_state(&mut self) -> CoreResult<CoinState> {
        Ok(self.state.clone())
    }

    fn save_state(&mut self, state: &CoinState) -> CoreResult<()> {
        self.state = state.clone();
        Ok(())
    }

    fn load_history(&mut self) -> CoreResult<Vec<CoinEntry>> {
        Ok(self.history.clone())
    }

    fn save_history(&mut self, history: &[CoinEntry]) -> CoreResult<()> {
        self.history = history.to_vec();
        Ok(())
    }

    fn save_state_and_history(
        &mut self,
        state: &CoinState,
        history: &[CoinEntry],
    ) -> CoreResult<()> {
        self.state = state.clone();
        self.history = history.to_vec();
        Ok(())
    }
}
