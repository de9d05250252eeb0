mod support;

use karbon_core::state::wallet_db_path;
use karbon_core::wallet::store::{SqliteWalletStore, WalletStore};
use karbon_core::wallet::types::{CoinEntry, CoinEntryKind, CoinState};
use support::wallet_testkit::temp_home_in_tmp;

#[test]
fn opening_a_fresh_home_creates_the_wallet_db() {
    let temp = temp_home_in_tmp("karbon-store-fresh");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let store = SqliteWalletStore::open(Some(&home));
        assert!(store.is_ok());
        assert!(wallet_db_path(&home).exists());

        if let Ok(mut opened) = store {
            let state = opened.load_state();
            assert!(state.is_ok());
            if let Ok(loaded) = state {
                assert_eq!(loaded, CoinState::default());
            }
            let history = opened.load_history();
            assert!(history.is_ok());
            if let Ok(entries) = history {
                assert!(entries.is_empty());
            }
        }
    }
}

#[test]
fn state_and_history_survive_a_reopen() {
    let temp = temp_home_in_tmp("karbon-store-reopen");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        {
            let store = SqliteWalletStore::open(Some(&home));
            assert!(store.is_ok());
            if let Ok(mut opened) = store {
                let saved_state = opened.save_state(&CoinState {
                    balance: 77,
                    last_awarded_month: Some("2025-08".to_string()),
                });
                assert!(saved_state.is_ok());
                let saved_history = opened.save_history(&[CoinEntry {
                    id: "AWD-2025-08".to_string(),
                    ts: 1_755_000_000_000,
                    kind: CoinEntryKind::Award,
                    title: "Monthly award (2025-08)".to_string(),
                    amount_c: 77,
                    meta: None,
                }]);
                assert!(saved_history.is_ok());
            }
        }

        let reopened = SqliteWalletStore::open(Some(&home));
        assert!(reopened.is_ok());
        if let Ok(mut opened) = reopened {
            let state = opened.load_state();
            assert!(state.is_ok());
            if let Ok(loaded) = state {
                assert_eq!(loaded.balance, 77);
                assert_eq!(loaded.last_awarded_month.as_deref(), Some("2025-08"));
            }
            let history = opened.load_history();
            assert!(history.is_ok());
            if let Ok(entries) = history {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].kind, CoinEntryKind::Award);
            }
        }
    }
}

#[test]
fn combined_write_persists_both_records() {
    let temp = temp_home_in_tmp("karbon-store-combined");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        {
            let store = SqliteWalletStore::open(Some(&home));
            assert!(store.is_ok());
            if let Ok(mut opened) = store {
                let saved = opened.save_state_and_history(
                    &CoinState {
                        balance: 40,
                        last_awarded_month: Some("2025-08".to_string()),
                    },
                    &[CoinEntry {
                        id: "EV10-0001ABCD".to_string(),
                        ts: 1_755_000_000_000,
                        kind: CoinEntryKind::Redeem,
                        title: "EV charging voucher 10C".to_string(),
                        amount_c: 10,
                        meta: None,
                    }],
                );
                assert!(saved.is_ok());
            }
        }

        let reopened = SqliteWalletStore::open(Some(&home));
        assert!(reopened.is_ok());
        if let Ok(mut opened) = reopened {
            let state = opened.load_state();
            assert!(state.is_ok());
            if let Ok(loaded) = state {
                assert_eq!(loaded.balance, 40);
            }
            let history = opened.load_history();
            assert!(history.is_ok());
            if let Ok(entries) = history {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].kind, CoinEntryKind::Redeem);
            }
        }
    }
}

#[test]
fn corrupt_state_json_resets_to_the_default_record() {
    let temp = temp_home_in_tmp("karbon-store-corrupt");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        {
            let store = SqliteWalletStore::open(Some(&home));
            assert!(store.is_ok());
        }

        // Scribble over the persisted state outside the store API.
        let connection = rusqlite::Connection::open(wallet_db_path(&home));
        assert!(connection.is_ok());
        if let Ok(conn) = connection {
            let written = conn.execute(
                "INSERT INTO internal_kv (key, value, updated_at) VALUES ('coin_state', 'not json', '2025-08-01')
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                [],
            );
            assert!(written.is_ok());
        }

        let store = SqliteWalletStore::open(Some(&home));
        assert!(store.is_ok());
        if let Ok(mut opened) = store {
            let state = opened.load_state();
            assert!(state.is_ok());
            if let Ok(loaded) = state {
                assert_eq!(loaded, CoinState::default());
            }
        }
    }
}

#[test]
fn corrupt_history_json_reads_as_empty() {
    let temp = temp_home_in_tmp("karbon-store-corrupt-history");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        {
            let store = SqliteWalletStore::open(Some(&home));
            assert!(store.is_ok());
        }

        let connection = rusqlite::Connection::open(wallet_db_path(&home));
        assert!(connection.is_ok());
        if let Ok(conn) = connection {
            let written = conn.execute(
                "INSERT INTO internal_kv (key, value, updated_at) VALUES ('coin_history', '{broken', '2025-08-01')
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                [],
            );
            assert!(written.is_ok());
        }

        let store = SqliteWalletStore::open(Some(&home));
        assert!(store.is_ok());
        if let Ok(mut opened) = store {
            let history = opened.load_history();
            assert!(history.is_ok());
            if let Ok(entries) = history {
                assert!(entries.is_empty());
            }
        }
    }
}
