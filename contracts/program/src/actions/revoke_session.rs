//! RevokeSession instruction handler

use pinocchio::{
    account_info::AccountInfo, msg, program_error::ProgramError, pubkey::Pubkey, ProgramResult,
};
use socialgraph_assertions::{check_key_differs, check_writable};
use socialgraph_state::{SessionToken, SocialGraphError};

use crate::util::{close_account, load_entity};

pub fn process_revoke_session(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let [session_account, authority_account, refund_receiver, ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_writable(session_account, ProgramError::Immutable)?;
    check_writable(refund_receiver, ProgramError::Immutable)?;
    check_key_differs(refund_receiver, session_account.key(), ProgramError::InvalidArgument)?;

    let token = load_entity::<SessionToken>(session_account, program_id)?;

    // either end of the grant may tear it down
    let key = authority_account.key();
    let party = *key == token.authority || *key == token.session_signer;
    if !party || !authority_account.is_signer() {
        msg!("Only the grantor or the session signer can revoke a session");
        return Err(SocialGraphError::MissingAuthority.into());
    }

    let reclaimed = close_account(session_account, refund_receiver)?;

    msg!("Session revoked: {:?}", session_account.key());
    msg!("  Refunded {} lamports to {:?}", reclaimed, refund_receiver.key());
    Ok(())
}
