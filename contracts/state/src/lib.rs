//! Social Graph State Module
//!
//! Account layouts, deterministic addressing, session credentials and the
//! authorization rules shared by the on-chain program and its clients.

pub mod authorize;
pub mod constants;
pub mod derive;
pub mod error;
pub mod lifecycle;
pub mod post;
pub mod profile;
pub mod session;
pub mod transmute;
pub mod user;

pub use authorize::{Action, Authorizer, Grant, SessionCredential, SignerSet};
pub use derive::{
    derive_address, post_address, profile_address, session_token_address, user_address,
    EntityKind,
};
pub use error::SocialGraphError;
pub use lifecycle::{load_live, SlotState};
pub use post::Post;
pub use profile::Profile;
pub use session::SessionToken;
pub use transmute::AccountState;
pub use user::User;

/// Represents the type discriminator for different account types in the system.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Discriminator {
    User = 1,
    Profile = 2,
    Post = 3,
    SessionToken = 4,
}

impl TryFrom<u8> for Discriminator {
    type Error = SocialGraphError;

    fn try_from(discriminator: u8) -> Result<Self, Self::Error> {
        match discriminator {
            1 => Ok(Discriminator::User),
            2 => Ok(Discriminator::Profile),
            3 => Ok(Discriminator::Post),
            4 => Ok(Discriminator::SessionToken),
            _ => Err(SocialGraphError::InvalidAccountData),
        }
    }
}
