//! DeletePost instruction handler

use pinocchio::{
    account_info::AccountInfo, msg, program_error::ProgramError, pubkey::Pubkey, ProgramResult,
};
use socialgraph_assertions::{check_key_differs, check_writable};
use socialgraph_state::{Action, Authorizer, SessionCredential};

use super::{load_post_chain, load_session};
use crate::util::{close_account, current_timestamp, optional_account, TransactionSigners};

pub fn process_delete_post(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let [post_account, profile_account, user_account, session_account, authority_account, refund_receiver, ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_writable(post_account, ProgramError::Immutable)?;
    check_writable(refund_receiver, ProgramError::Immutable)?;
    check_key_differs(refund_receiver, post_account.key(), ProgramError::InvalidArgument)?;

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
        Action::DeletePost,
        &user.authority,
        authority_account.key(),
        &TransactionSigners(accounts),
        credential,
    )?;

    let reclaimed = close_account(post_account, refund_receiver)?;

    msg!("Post deleted: {:?} ({:?})", post_account.key(), grant);
    msg!("  Refunded {} lamports to {:?}", reclaimed, refund_receiver.key());
    Ok(())
}
