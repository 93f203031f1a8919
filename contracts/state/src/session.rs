//! Delegated session credentials.
//!
//! A session token lets a stand-in signer act for a grantor until it expires.
//! Its slot is keyed by (target program, session signer) while the grant
//! recorded inside names the grantor, so re-issuing for the same signer
//! overwrites the previous grant.

use bytemuck::{Pod, Zeroable};
use pinocchio::pubkey::Pubkey;

use crate::constants::{DEFAULT_SESSION_TTL, MAX_SESSION_TTL};
use crate::{AccountState, Discriminator, SocialGraphError};

/// PDA Seeds: ["session_token", target_program, session_signer]
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Pod, Zeroable)]
pub struct SessionToken {
    /// Account type discriminator (= 4)
    pub discriminator: u8,

    /// PDA bump seed
    pub bump: u8,

    pub reserved: [u8; 6],

    /// Grantor whose authority the session carries
    pub authority: Pubkey,

    /// Program the session may be used against
    pub target_program: Pubkey,

    /// Delegate key that signs in place of the grantor
    pub session_signer: Pubkey,

    /// Little-endian unix timestamp after which the session is dead
    pub valid_until: [u8; 8],
}

impl SessionToken {
    pub fn issue(
        grantor: Pubkey,
        session_signer: Pubkey,
        target_program: Pubkey,
        now: i64,
        ttl: Option<i64>,
        bump: u8,
    ) -> Result<Self, SocialGraphError> {
        let ttl = resolve_ttl(ttl)?;
        let valid_until = now
            .checked_add(ttl)
            .ok_or(SocialGraphError::ArithmeticOverflow)?;
        Ok(Self {
            discriminator: Discriminator::SessionToken as u8,
            bump,
            reserved: [0; 6],
            authority: grantor,
            target_program,
            session_signer,
            valid_until: valid_until.to_le_bytes(),
        })
    }

    pub fn valid_until(&self) -> i64 {
        i64::from_le_bytes(self.valid_until)
    }

    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.valid_until()
    }

    /// Returns the grantor if the session is still live at `now`.
    pub fn validate(&self, now: i64) -> Result<&Pubkey, SocialGraphError> {
        if self.is_expired(now) {
            return Err(SocialGraphError::Expired);
        }
        Ok(&self.authority)
    }
}

impl AccountState for SessionToken {
    const DISCRIMINATOR: Discriminator = Discriminator::SessionToken;
}

/// Applies the default lifetime and enforces `0 < ttl <= MAX_SESSION_TTL`.
pub fn resolve_ttl(ttl: Option<i64>) -> Result<i64, SocialGraphError> {
    match ttl.unwrap_or(DEFAULT_SESSION_TTL) {
        ttl if ttl > 0 && ttl <= MAX_SESSION_TTL => Ok(ttl),
        _ => Err(SocialGraphError::InvalidSessionTtl),
    }
}
