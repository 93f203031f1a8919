use bytemuck::{Pod, Zeroable};
use pinocchio::pubkey::Pubkey;

use crate::constants::MAX_METADATA_URI_LEN;
use crate::{AccountState, Discriminator, SocialGraphError};

/// A piece of content published under a profile.
///
/// PDA Seeds: ["post", profile, random_hash]
///
/// Storage is sized for the longest metadata URI up front, so updates never
/// reallocate the account.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Pod, Zeroable)]
pub struct Post {
    /// Account type discriminator (= 3)
    pub discriminator: u8,

    /// PDA bump seed
    pub bump: u8,

    /// Little-endian length of `metadata_uri`
    pub metadata_uri_len: [u8; 2],

    pub reserved: [u8; 4],

    /// Owning profile. Never changes after creation.
    pub profile: Pubkey,

    /// Uniqueness hash chosen by the client at creation
    pub random_hash: [u8; 32],

    /// Opaque URI, zero padded
    pub metadata_uri: [u8; MAX_METADATA_URI_LEN],
}

impl Post {
    pub fn new(
        profile: Pubkey,
        random_hash: [u8; 32],
        metadata_uri: &str,
        bump: u8,
    ) -> Result<Self, SocialGraphError> {
        let mut post = Self {
            discriminator: Discriminator::Post as u8,
            bump,
            metadata_uri_len: [0; 2],
            reserved: [0; 4],
            profile,
            random_hash,
            metadata_uri: [0; MAX_METADATA_URI_LEN],
        };
        post.set_metadata_uri(metadata_uri)?;
        Ok(post)
    }

    /// Replaces the URI in place; the owning profile is left untouched.
    pub fn set_metadata_uri(&mut self, metadata_uri: &str) -> Result<(), SocialGraphError> {
        let bytes = metadata_uri.as_bytes();
        if bytes.len() > MAX_METADATA_URI_LEN {
            return Err(SocialGraphError::MetadataUriTooLong);
        }
        self.metadata_uri = [0; MAX_METADATA_URI_LEN];
        self.metadata_uri[..bytes.len()].copy_from_slice(bytes);
        self.metadata_uri_len = (bytes.len() as u16).to_le_bytes();
        Ok(())
    }

    pub fn metadata_uri_bytes(&self) -> &[u8] {
        let len = (u16::from_le_bytes(self.metadata_uri_len) as usize).min(MAX_METADATA_URI_LEN);
        &self.metadata_uri[..len]
    }

    pub fn metadata_uri(&self) -> Result<&str, SocialGraphError> {
        core::str::from_utf8(self.metadata_uri_bytes())
            .map_err(|_| SocialGraphError::InvalidAccountData)
    }
}

impl AccountState for Post {
    const DISCRIMINATOR: Discriminator = Discriminator::Post;
}
