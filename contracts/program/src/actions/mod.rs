pub mod create_post;
pub mod create_profile;
pub mod create_session;
pub mod create_user;
pub mod delete_post;
pub mod revoke_session;
pub mod update_post;

pub use create_post::*;
pub use create_profile::*;
pub use create_session::*;
pub use create_user::*;
pub use delete_post::*;
pub use revoke_session::*;
pub use update_post::*;

use pinocchio::{account_info::AccountInfo, msg, program_error::ProgramError, pubkey::Pubkey};
use socialgraph_state::{Post, Profile, SessionToken, SocialGraphError, User};

use crate::util::load_entity;

/// Reads the session token presented with a post action, if any.
///
/// Anything that is not a live SessionToken of this program is rejected as an
/// invalid credential rather than a missing entity.
pub fn load_session(
    account: Option<&AccountInfo>,
    program_id: &Pubkey,
) -> Result<Option<SessionToken>, ProgramError> {
    match account {
        None => Ok(None),
        Some(account) => load_entity::<SessionToken>(account, program_id)
            .map(Some)
            .map_err(|_| SocialGraphError::InvalidToken.into()),
    }
}

/// Loads the profile and user a post action runs under and checks that the
/// profile hangs off that user.
pub fn load_post_parents(
    profile_account: &AccountInfo,
    user_account: &AccountInfo,
    program_id: &Pubkey,
) -> Result<(Profile, User), ProgramError> {
    let profile = load_entity::<Profile>(profile_account, program_id)?;
    let user = load_entity::<User>(user_account, program_id)?;
    if profile.user != *user_account.key() {
        msg!("Profile {:?} does not belong to user {:?}", profile_account.key(), user_account.key());
        return Err(SocialGraphError::OwnershipMismatch.into());
    }
    Ok((profile, user))
}

/// Same as [`load_post_parents`], starting from an existing post.
pub fn load_post_chain(
    post_account: &AccountInfo,
    profile_account: &AccountInfo,
    user_account: &AccountInfo,
    program_id: &Pubkey,
) -> Result<(Post, User), ProgramError> {
    let post = load_entity::<Post>(post_account, program_id)?;
    if post.profile != *profile_account.key() {
        msg!("Post {:?} does not belong to profile {:?}", post_account.key(), profile_account.key());
        return Err(SocialGraphError::OwnershipMismatch.into());
    }
    let (_, user) = load_post_parents(profile_account, user_account, program_id)?;
    Ok((post, user))
}
