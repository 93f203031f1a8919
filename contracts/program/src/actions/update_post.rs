//! UpdatePost instruction handler

use pinocchio::{
    account_info::AccountInfo, msg, program_error::ProgramError, pubkey::Pubkey, ProgramResult,
};
use socialgraph_assertions::check_writable;
use socialgraph_state::{AccountState, Action, Authorizer, Post, SessionCredential};

use super::{load_post_chain, load_session};
use crate::util::{current_timestamp, optional_account, TransactionSigners};

pub fn process_update_post(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    metadata_uri: &str,
) -> ProgramResult {
    let [post_account, profile_account, user_account, session_account, authority_account, ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_writable(post_account, ProgramError::Immutable)?;

    let (_, user) = load_post_chain(post_account, profile_account, user_account, program_id)?;

    let session_account = optional_account(session_account, program_id);
    let session = load_session(session_account, program_id)?;
    let credential = session_account
        .zip(session.as_ref())
        .map(|(account, token)| SessionCredential {
            address: account.key(),
            token,
        });

    let grant = Authorizer::new(program_id, current_timestamp()?).authorize(
        Action::UpdatePost,
        &user.authority,
        authority_account.key(),
        &TransactionSigners(accounts),
        credential,
    )?;

    let mut data = post_account.try_borrow_mut_data()?;
    let post = Post::load_mut(&mut data)?;
    post.set_metadata_uri(metadata_uri)?;

    msg!("Post updated: {:?} ({:?})", post_account.key(), grant);
    Ok(())
}
