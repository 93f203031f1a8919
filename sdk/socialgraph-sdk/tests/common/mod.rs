#![allow(dead_code)]

use async_trait::async_trait;
use socialgraph_sdk::core::connection::SolConnection;
use socialgraph_sdk::error::{decode_transaction_error, Result, SocialGraphSdkError};
use socialgraph_sdk::state::AccountState;
use solana_sdk::{
    account::Account,
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    transaction::{Transaction, TransactionError},
};
use std::collections::HashMap;
use tokio::sync::Mutex;

/// In-memory stand-in for a cluster: serves stored accounts and records the
/// transactions it is asked to send without executing them.
#[derive(Default)]
pub struct MockConnection {
    accounts: Mutex<HashMap<Pubkey, Account>>,
    sent: Mutex<Vec<Transaction>>,
    fail_with: Mutex<Option<TransactionError>>,
}

impl MockConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_entity<T: AccountState>(&self, address: Pubkey, owner: Pubkey, entity: &T) {
        let mut data = vec![0u8; T::LEN];
        entity.store(&mut data).unwrap();
        self.accounts.lock().await.insert(
            address,
            Account {
                lamports: 1_000_000,
                data,
                owner,
                executable: false,
                rent_epoch: 0,
            },
        );
    }

    pub async fn fail_next(&self, err: TransactionError) {
        *self.fail_with.lock().await = Some(err);
    }

    pub async fn sent(&self) -> Vec<Transaction> {
        self.sent.lock().await.clone()
    }

    pub async fn last_sent(&self) -> Transaction {
        self.sent.lock().await.last().cloned().expect("nothing sent")
    }
}

#[async_trait]
impl SolConnection for MockConnection {
    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature> {
        if let Some(err) = self.fail_with.lock().await.take() {
            return Err(decode_transaction_error(err));
        }
        tx.verify()
            .map_err(SocialGraphSdkError::Transaction)?;
        self.sent.lock().await.push(tx.clone());
        Ok(tx.signatures[0])
    }

    async fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>> {
        Ok(self.accounts.lock().await.get(pubkey).cloned())
    }

    async fn get_latest_blockhash(&self) -> Result<Hash> {
        Ok(Hash::new_unique())
    }

    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> Result<u64> {
        Ok((data_len as u64 + 128) * 6_960)
    }
}
