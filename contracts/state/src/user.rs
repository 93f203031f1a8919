use bytemuck::{Pod, Zeroable};
use pinocchio::pubkey::Pubkey;

use crate::{AccountState, Discriminator};

/// Root identity account.
///
/// PDA Seeds: ["user", random_hash]
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Pod, Zeroable)]
pub struct User {
    /// Account type discriminator (= 1)
    pub discriminator: u8,

    /// PDA bump seed
    pub bump: u8,

    pub reserved: [u8; 6],

    /// Identity whose signature mutates everything under this user
    pub authority: Pubkey,

    /// Uniqueness hash chosen by the client at creation
    pub random_hash: [u8; 32],

    /// Fee payer that funded the account
    pub payer: Pubkey,
}

impl User {
    pub fn new(authority: Pubkey, random_hash: [u8; 32], payer: Pubkey, bump: u8) -> Self {
        Self {
            discriminator: Discriminator::User as u8,
            bump,
            reserved: [0; 6],
            authority,
            random_hash,
            payer,
        }
    }
}

impl AccountState for User {
    const DISCRIMINATOR: Discriminator = Discriminator::User;
}
