use solana_sdk::pubkey;
use solana_sdk::pubkey::Pubkey;

// Default Program ID for Devnet/Testnet
pub const DEFAULT_PROGRAM_ID: Pubkey = pubkey!("SocGraph11111111111111111111111111111111111");
