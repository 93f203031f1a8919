use bytemuck::{Pod, Zeroable};
use pinocchio::pubkey::Pubkey;

use crate::constants::MAX_PROFILE_LABEL_LEN;
use crate::derive::check_label;
use crate::{AccountState, Discriminator, SocialGraphError};

/// A user's profile under a label such as "Personal".
///
/// PDA Seeds: ["profile", user, label]
///
/// The profile carries no authority of its own: it acts for whoever is the
/// authority of `user`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Pod, Zeroable)]
pub struct Profile {
    /// Account type discriminator (= 2)
    pub discriminator: u8,

    /// PDA bump seed
    pub bump: u8,

    /// Number of meaningful bytes in `label`
    pub label_len: u8,

    pub reserved: [u8; 5],

    /// Owning user account
    pub user: Pubkey,

    /// UTF-8 label, zero padded
    pub label: [u8; MAX_PROFILE_LABEL_LEN],
}

impl Profile {
    pub fn new(user: Pubkey, label: &str, bump: u8) -> Result<Self, SocialGraphError> {
        check_label(label)?;
        let mut stored = [0u8; MAX_PROFILE_LABEL_LEN];
        stored[..label.len()].copy_from_slice(label.as_bytes());
        Ok(Self {
            discriminator: Discriminator::Profile as u8,
            bump,
            label_len: label.len() as u8,
            reserved: [0; 5],
            user,
            label: stored,
        })
    }

    pub fn label_bytes(&self) -> &[u8] {
        let len = (self.label_len as usize).min(MAX_PROFILE_LABEL_LEN);
        &self.label[..len]
    }

    pub fn label(&self) -> Result<&str, SocialGraphError> {
        core::str::from_utf8(self.label_bytes()).map_err(|_| SocialGraphError::InvalidAccountData)
    }
}

impl AccountState for Profile {
    const DISCRIMINATOR: Discriminator = Discriminator::Profile;
}
