//! Social Graph Instruction Definitions

use borsh::{BorshDeserialize, BorshSerialize};
use pinocchio::program_error::ProgramError;

/// Instruction discriminators (borsh variant index of [`SocialGraphInstruction`])
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InstructionDiscriminator {
    CreateUser = 0,
    CreateProfile = 1,
    CreatePost = 2,
    UpdatePost = 3,
    DeletePost = 4,
    CreateSession = 5,
    RevokeSession = 6,
}

/// Optional accounts (the session token) are passed as the program id when
/// absent.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub enum SocialGraphInstruction {
    /// Create a root user identity
    ///
    /// Accounts:
    /// 0. `[writable]` User PDA: ["user", random_hash]
    /// 1. `[writable, signer]` Payer
    /// 2. `[signer]` Authority recorded on the user
    /// 3. `[]` System program
    CreateUser {
        /// Client-chosen uniqueness hash
        random_hash: [u8; 32],
    },

    /// Create a labelled profile under a user
    ///
    /// Accounts:
    /// 0. `[writable]` Profile PDA: ["profile", user, label]
    /// 1. `[]` User
    /// 2. `[writable, signer]` Payer
    /// 3. `[signer]` Authority (must be the user's authority)
    /// 4. `[]` System program
    CreateProfile {
        /// Profile label, e.g. "Personal"
        label: String,
    },

    /// Publish a post under a profile
    ///
    /// Accounts:
    /// 0. `[writable]` Post PDA: ["post", profile, random_hash]
    /// 1. `[]` Profile
    /// 2. `[]` User
    /// 3. `[]` Session token, or the program id
    /// 4. `[writable, signer]` Payer
    /// 5. `[signer]` Authority (user authority, or the session signer)
    /// 6. `[]` System program
    CreatePost {
        metadata_uri: String,
        /// Client-chosen uniqueness hash
        random_hash: [u8; 32],
    },

    /// Replace a post's metadata URI
    ///
    /// Accounts:
    /// 0. `[writable]` Post
    /// 1. `[]` Profile
    /// 2. `[]` User
    /// 3. `[]` Session token, or the program id
    /// 4. `[signer]` Authority
    UpdatePost { metadata_uri: String },

    /// Delete a post and refund its rent
    ///
    /// Accounts:
    /// 0. `[writable]` Post
    /// 1. `[]` Profile
    /// 2. `[]` User
    /// 3. `[]` Session token, or the program id
    /// 4. `[signer]` Authority
    /// 5. `[writable]` Refund receiver
    DeletePost,

    /// Issue (or re-issue) a session token
    ///
    /// Accounts:
    /// 0. `[writable]` Session token PDA: ["session_token", target_program, session_signer]
    /// 1. `[signer]` Authority granting the session
    /// 2. `[signer]` Session signer
    /// 3. `[writable, signer]` Payer
    /// 4. `[]` System program
    CreateSession {
        /// Program the session may be used against
        target_program: [u8; 32],
        /// Lifetime in seconds; defaults to one hour
        ttl_seconds: Option<i64>,
    },

    /// Revoke a session token and refund its rent
    ///
    /// Accounts:
    /// 0. `[writable]` Session token
    /// 1. `[signer]` Grantor or session signer
    /// 2. `[writable]` Refund receiver
    RevokeSession,
}

impl SocialGraphInstruction {
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        Self::try_from_slice(input).map_err(|_| ProgramError::InvalidInstructionData)
    }

    pub fn discriminator(&self) -> InstructionDiscriminator {
        match self {
            Self::CreateUser { .. } => InstructionDiscriminator::CreateUser,
            Self::CreateProfile { .. } => InstructionDiscriminator::CreateProfile,
            Self::CreatePost { .. } => InstructionDiscriminator::CreatePost,
            Self::UpdatePost { .. } => InstructionDiscriminator::UpdatePost,
            Self::DeletePost => InstructionDiscriminator::DeletePost,
            Self::CreateSession { .. } => InstructionDiscriminator::CreateSession,
            Self::RevokeSession => InstructionDiscriminator::RevokeSession,
        }
    }
}
