use socialgraph_state::SocialGraphError;
use solana_sdk::instruction::InstructionError;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::TransactionError;
use thiserror::Error;

/// SDK-specific error types for social graph operations
#[derive(Debug, Error)]
pub enum SocialGraphSdkError {
    /// Connection or RPC error
    #[error("Connection error: {0}")]
    Connection(String),

    /// No live entity at the address
    #[error("Account does not exist {0}")]
    AccountNotFound(Pubkey),

    /// Invalid account data or deserialization error
    #[error("Invalid account data: {0}")]
    InvalidAccountData(String),

    /// Program error raised on-chain, or by local validation before sending
    #[error("Program error: {0}")]
    Program(#[from] SocialGraphError),

    /// Transaction rejected by the runtime for a reason the program did not raise
    #[error("Transaction failed: {0}")]
    Transaction(TransactionError),

    /// Signing failed, usually because a required signer is missing
    #[error("Signing error: {0}")]
    Signing(String),

    /// Borsh serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] std::io::Error),
}

impl SocialGraphSdkError {
    /// The program error carried by this failure, if any.
    pub fn program_error(&self) -> Option<SocialGraphError> {
        match self {
            Self::Program(e) => Some(*e),
            _ => None,
        }
    }
}

/// Maps a failed transaction back onto the program's error taxonomy.
///
/// Write-lock collisions surface as [`SocialGraphError::Conflict`]; they are
/// never retried here.
pub fn decode_transaction_error(err: TransactionError) -> SocialGraphSdkError {
    match err {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
            match SocialGraphError::from_code(code) {
                Some(e) => SocialGraphSdkError::Program(e),
                None => SocialGraphSdkError::Transaction(err),
            }
        },
        TransactionError::AccountInUse
        | TransactionError::InstructionError(_, InstructionError::AccountBorrowFailed) => {
            SocialGraphSdkError::Program(SocialGraphError::Conflict)
        },
        other => SocialGraphSdkError::Transaction(other),
    }
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, SocialGraphSdkError>;
