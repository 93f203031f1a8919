use serde::Serialize;
use socialgraph_state::{Post, Profile, SessionToken, User};
use solana_sdk::pubkey::Pubkey;

use crate::error::{Result, SocialGraphSdkError};

/// A root identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    pub address: Pubkey,
    pub authority: Pubkey,
    pub random_hash: [u8; 32],
    /// Funded the account; not an authority
    pub payer: Pubkey,
    pub bump: u8,
}

impl UserInfo {
    pub fn from_state(address: Pubkey, user: &User) -> Self {
        Self {
            address,
            authority: Pubkey::new_from_array(user.authority),
            random_hash: user.random_hash,
            payer: Pubkey::new_from_array(user.payer),
            bump: user.bump,
        }
    }
}

/// A labelled persona under a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileInfo {
    pub address: Pubkey,
    pub user: Pubkey,
    pub label: String,
    pub bump: u8,
}

impl ProfileInfo {
    pub fn from_state(address: Pubkey, profile: &Profile) -> Result<Self> {
        let label = profile
            .label()
            .map_err(|e| SocialGraphSdkError::InvalidAccountData(e.to_string()))?;
        Ok(Self {
            address,
            user: Pubkey::new_from_array(profile.user),
            label: label.to_string(),
            bump: profile.bump,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostInfo {
    pub address: Pubkey,
    pub profile: Pubkey,
    pub random_hash: [u8; 32],
    pub metadata_uri: String,
    pub bump: u8,
}

impl PostInfo {
    pub fn from_state(address: Pubkey, post: &Post) -> Result<Self> {
        let metadata_uri = post
            .metadata_uri()
            .map_err(|e| SocialGraphSdkError::InvalidAccountData(e.to_string()))?;
        Ok(Self {
            address,
            profile: Pubkey::new_from_array(post.profile),
            random_hash: post.random_hash,
            metadata_uri: metadata_uri.to_string(),
            bump: post.bump,
        })
    }
}

/// A delegated credential as stored on-chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionInfo {
    pub address: Pubkey,
    /// Grantor whose authority the session carries
    pub authority: Pubkey,
    pub target_program: Pubkey,
    pub session_signer: Pubkey,
    /// Unix timestamp at which the session stops working
    pub valid_until: i64,
}

impl SessionInfo {
    pub fn from_state(address: Pubkey, token: &SessionToken) -> Self {
        Self {
            address,
            authority: Pubkey::new_from_array(token.authority),
            target_program: Pubkey::new_from_array(token.target_program),
            session_signer: Pubkey::new_from_array(token.session_signer),
            valid_until: token.valid_until(),
        }
    }

    pub fn is_active(&self, now: i64) -> bool {
        now < self.valid_until
    }
}
