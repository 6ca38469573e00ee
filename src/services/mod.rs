// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod ledger;
pub mod seed;

pub use ledger::{LedgerService, TxReceipt, WalletSession};
