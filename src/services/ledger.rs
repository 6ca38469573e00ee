// SPDX-License-Identifier: MIT

//! Simulated blockchain ledger.
//!
//! Every value here is synthetic: wallet addresses, gas prices, transaction
//! hashes and block numbers are generated locally and the configured latency
//! stands in for network round-trips. No contract, network or cryptographic
//! operation is performed. Call sites only see the async API, so a real
//! chain client could replace this service without touching the routes.

use std::sync::RwLock;
use std::time::Duration;

use chrono::{DateTime, Utc};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};

/// Fixed demo registry contract address.
pub const CONTRACT_ADDRESS: &str = "0x7a2c8b5f91e3d64a0c9f1b8e25d7a3c6e4f90b12";

const EXPLORER_BASE_URL: &str = "https://etherscan.io";

/// Block height the simulation anchors its receipts around.
const BASE_BLOCK_NUMBER: u64 = 18_950_000;

/// A simulated connected wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WalletSession {
    /// 0x-prefixed 20-byte hex address
    pub address: String,
    /// Simulated gas price in gwei
    pub gas_price_gwei: u32,
}

/// Receipt for a simulated on-chain transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TxReceipt {
    /// 0x-prefixed 20-byte hex transaction hash
    pub hash: String,
    pub block_number: u64,
    pub gas_used: u64,
    pub explorer_url: String,
    pub timestamp: DateTime<Utc>,
}

/// Simulated ledger client. Owns the wallet-connected flag.
pub struct LedgerService {
    latency: Duration,
    wallet: RwLock<Option<WalletSession>>,
    rng: SystemRandom,
}

impl LedgerService {
    /// `latency` is the simulated round-trip delay; tests pass zero.
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            wallet: RwLock::new(None),
            rng: SystemRandom::new(),
        }
    }

    /// Simulate connecting a wallet: wait out the latency, then mint a random
    /// address and gas price. Reconnecting replaces the previous session.
    pub async fn connect_wallet(&self) -> Result<WalletSession> {
        self.simulate_delay().await;

        let session = WalletSession {
            address: format!("0x{}", self.random_hex(20)?),
            gas_price_gwei: 20 + (self.random_u64()? % 40) as u32,
        };

        *self.wallet.write().expect("wallet lock poisoned") = Some(session.clone());
        tracing::info!(address = %session.address, "Wallet connected (simulated)");
        Ok(session)
    }

    /// Drop the wallet session.
    pub fn disconnect_wallet(&self) {
        *self.wallet.write().expect("wallet lock poisoned") = None;
        tracing::info!("Wallet disconnected");
    }

    /// Current wallet session, if connected.
    pub fn wallet(&self) -> Option<WalletSession> {
        self.wallet.read().expect("wallet lock poisoned").clone()
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.read().expect("wallet lock poisoned").is_some()
    }

    /// Submit a simulated transaction and return its receipt.
    ///
    /// Requires a connected wallet, mirroring the UI which disables issuance
    /// until one exists.
    pub async fn submit_transaction(&self, label: &str) -> Result<TxReceipt> {
        if !self.is_connected() {
            return Err(AppError::Ledger("wallet not connected".to_string()));
        }

        self.simulate_delay().await;

        let hash = format!("0x{}", self.random_hex(20)?);
        let receipt = TxReceipt {
            explorer_url: explorer_tx_url(&hash),
            hash,
            block_number: BASE_BLOCK_NUMBER + self.random_u64()? % 1000,
            gas_used: 30_000 + self.random_u64()? % 30_000,
            timestamp: Utc::now(),
        };

        tracing::info!(
            hash = %receipt.hash,
            block = receipt.block_number,
            label = %label,
            "Simulated transaction confirmed"
        );
        Ok(receipt)
    }

    async fn simulate_delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn random_hex(&self, bytes: usize) -> Result<String> {
        let mut buf = vec![0u8; bytes];
        self.rng
            .fill(&mut buf)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("RNG failure")))?;
        Ok(hex::encode(buf))
    }

    fn random_u64(&self) -> Result<u64> {
        let mut buf = [0u8; 8];
        self.rng
            .fill(&mut buf)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("RNG failure")))?;
        Ok(u64::from_le_bytes(buf))
    }
}

/// Explorer link for a transaction hash.
pub fn explorer_tx_url(hash: &str) -> String {
    format!("{}/tx/{}", EXPLORER_BASE_URL, hash)
}

/// Explorer link for the registry contract.
pub fn explorer_contract_url() -> String {
    format!("{}/address/{}", EXPLORER_BASE_URL, CONTRACT_ADDRESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_requires_connected_wallet() {
        let ledger = LedgerService::new(Duration::ZERO);
        let err = ledger.submit_transaction("issue").await.unwrap_err();
        assert!(matches!(err, AppError::Ledger(_)));
    }

    #[tokio::test]
    async fn test_receipt_shape() {
        let ledger = LedgerService::new(Duration::ZERO);
        ledger.connect_wallet().await.unwrap();

        let receipt = ledger.submit_transaction("issue").await.unwrap();

        assert!(receipt.hash.starts_with("0x"));
        assert_eq!(receipt.hash.len(), 42);
        assert!(receipt.hash[2..].chars().all(|c| c.is_ascii_hexdigit()));
        assert!(receipt.block_number >= BASE_BLOCK_NUMBER);
        assert!(receipt.block_number < BASE_BLOCK_NUMBER + 1000);
        assert_eq!(receipt.explorer_url, explorer_tx_url(&receipt.hash));
    }

    #[tokio::test]
    async fn test_wallet_connect_disconnect() {
        let ledger = LedgerService::new(Duration::ZERO);
        assert!(!ledger.is_connected());

        let session = ledger.connect_wallet().await.unwrap();
        assert!(session.address.starts_with("0x"));
        assert_eq!(session.address.len(), 42);
        assert!(session.gas_price_gwei >= 20 && session.gas_price_gwei < 60);
        assert!(ledger.is_connected());

        ledger.disconnect_wallet();
        assert!(!ledger.is_connected());
        assert!(ledger.wallet().is_none());
    }
}
