use async_trait::async_trait;
use solana_client::client_error::ClientError;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use crate::error::{decode_transaction_error, Result, SocialGraphSdkError};

/// The slice of a Solana node the SDK needs. Implemented over RPC here and
/// in-memory by tests.
#[async_trait]
pub trait SolConnection: Send + Sync {
    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature>;
    async fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>>;
    async fn get_latest_blockhash(&self) -> Result<Hash>;
    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> Result<u64>;
}

pub struct RpcConnection {
    client: RpcClient,
}

impl RpcConnection {
    pub fn new(url: impl ToString) -> Self {
        Self::with_commitment(url, CommitmentConfig::confirmed())
    }

    pub fn with_commitment(url: impl ToString, commitment: CommitmentConfig) -> Self {
        Self {
            client: RpcClient::new_with_commitment(url.to_string(), commitment),
        }
    }
}

fn client_error(e: ClientError) -> SocialGraphSdkError {
    match e.get_transaction_error() {
        Some(tx_err) => decode_transaction_error(tx_err),
        None => SocialGraphSdkError::Connection(e.to_string()),
    }
}

#[async_trait]
impl SolConnection for RpcConnection {
    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature> {
        self.client
            .send_and_confirm_transaction(tx)
            .await
            .map_err(client_error)
    }

    async fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>> {
        self.client
            .get_account_with_commitment(pubkey, self.client.commitment())
            .await
            .map(|response| response.value)
            .map_err(client_error)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash> {
        self.client.get_latest_blockhash().await.map_err(client_error)
    }

    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> Result<u64> {
        self.client
            .get_minimum_balance_for_rent_exemption(data_len)
            .await
            .map_err(client_error)
    }
}
