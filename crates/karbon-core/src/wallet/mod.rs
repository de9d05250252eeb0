pub mod catalog;
pub mod ops;
pub mod store;
pub mod types;

pub use store::{MemoryWalletStore, SqliteWalletStore, WalletStore};
pub use types::{CoinEntry, CoinEntryKind, CoinState};
