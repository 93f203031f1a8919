use solana_sdk::pubkey::Pubkey;
use solana_sdk::signer::Signer;

use crate::basic::actions::{
    CreatePostBuilder, CreateProfileBuilder, CreateSessionBuilder, CreateUserBuilder,
    DeletePostBuilder, RevokeSessionBuilder, UpdatePostBuilder,
};
use crate::core::connection::SolConnection;
use crate::core::constants;
use crate::error::Result;
use crate::types::{PostInfo, ProfileInfo, SessionInfo, UserInfo};
use crate::utils;

/// Handle on a deployed social graph program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialGraph {
    pub program_id: Pubkey,
}

impl Default for SocialGraph {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROGRAM_ID)
    }
}

impl SocialGraph {
    pub const DEFAULT_PROGRAM_ID: Pubkey = constants::DEFAULT_PROGRAM_ID;

    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    pub fn create_user<'a>(&self) -> CreateUserBuilder<'a> {
        CreateUserBuilder::new(self.program_id)
    }

    pub fn create_profile<'a>(&self, user: Pubkey, label: impl Into<String>) -> CreateProfileBuilder<'a> {
        CreateProfileBuilder::new(self.program_id, user, label)
    }

    pub fn create_post<'a>(
        &self,
        user: Pubkey,
        profile: Pubkey,
        metadata_uri: impl Into<String>,
    ) -> CreatePostBuilder<'a> {
        CreatePostBuilder::new(self.program_id, user, profile, metadata_uri)
    }

    pub fn update_post<'a>(
        &self,
        user: Pubkey,
        profile: Pubkey,
        post: Pubkey,
        metadata_uri: impl Into<String>,
    ) -> UpdatePostBuilder<'a> {
        UpdatePostBuilder::new(self.program_id, user, profile, post, metadata_uri)
    }

    pub fn delete_post<'a>(
        &self,
        user: Pubkey,
        profile: Pubkey,
        post: Pubkey,
        refund_receiver: Pubkey,
    ) -> DeletePostBuilder<'a> {
        DeletePostBuilder::new(self.program_id, user, profile, post, refund_receiver)
    }

    pub fn create_session<'a>(&self, session_signer: &'a dyn Signer) -> CreateSessionBuilder<'a> {
        CreateSessionBuilder::new(self.program_id, session_signer)
    }

    pub fn revoke_session<'a>(&self, session_token: Pubkey) -> RevokeSessionBuilder<'a> {
        RevokeSessionBuilder::new(self.program_id, session_token)
    }

    pub async fn fetch_user(&self, connection: &impl SolConnection, address: &Pubkey) -> Result<UserInfo> {
        utils::fetch_user(connection, &self.program_id, address).await
    }

    pub async fn fetch_profile(
        &self,
        connection: &impl SolConnection,
        address: &Pubkey,
    ) -> Result<ProfileInfo> {
        utils::fetch_profile(connection, &self.program_id, address).await
    }

    pub async fn fetch_post(&self, connection: &impl SolConnection, address: &Pubkey) -> Result<PostInfo> {
        utils::fetch_post(connection, &self.program_id, address).await
    }

    pub async fn fetch_session_token(
        &self,
        connection: &impl SolConnection,
        address: &Pubkey,
    ) -> Result<SessionInfo> {
        utils::fetch_session_token(connection, &self.program_id, address).await
    }
}
