//! CreateSession instruction handler

use pinocchio::{
    account_info::AccountInfo, instruction::Seed, msg, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};
use socialgraph_assertions::{
    check_signer, check_system_program, check_writable, check_writable_signer,
};
use socialgraph_state::{
    constants::SESSION_TOKEN_SEED, session_token_address, AccountState, SessionToken,
    SlotState, SocialGraphError,
};

use crate::util::{
    allocate_account, current_timestamp, load_entity, slot_state, store_entity,
};

/// Issues a session token, or re-issues it in place when the signer already
/// holds one for `target_program`.
pub fn process_create_session(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    target_program: [u8; 32],
    ttl_seconds: Option<i64>,
) -> ProgramResult {
    let [session_account, authority_account, session_signer, payer_account, system_program, ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_signer(authority_account, SocialGraphError::MissingAuthority)?;
    check_signer(session_signer, SocialGraphError::UnknownSigner)?;
    check_writable_signer(payer_account, ProgramError::MissingRequiredSignature)?;
    check_writable(session_account, ProgramError::Immutable)?;
    check_system_program(system_program, ProgramError::IncorrectProgramId)?;

    let (expected, bump) =
        session_token_address(&target_program, session_signer.key(), program_id)?;
    if session_account.key() != &expected {
        msg!("Session token account does not match its derived address");
        return Err(SocialGraphError::InvalidAddress.into());
    }

    let token = SessionToken::issue(
        *authority_account.key(),
        *session_signer.key(),
        target_program,
        current_timestamp()?,
        ttl_seconds,
        bump,
    )?;

    match slot_state(session_account, program_id)? {
        SlotState::Absent => {
            let bump_seed = [bump];
            let seeds = [
                Seed::from(SESSION_TOKEN_SEED),
                Seed::from(&target_program[..]),
                Seed::from(&session_signer.key()[..]),
                Seed::from(&bump_seed[..]),
            ];
            allocate_account(
                payer_account,
                session_account,
                SessionToken::LEN,
                program_id,
                &seeds,
            )?;
        },
        SlotState::Live => {
            let previous = load_entity::<SessionToken>(session_account, program_id)?;
            msg!("Replacing session granted by {:?}", previous.authority);
        },
        SlotState::Foreign => return Err(SocialGraphError::AlreadyExists.into()),
    }
    store_entity(session_account, &token)?;

    msg!("Session created: {:?}", session_account.key());
    msg!("  Grantor: {:?}", authority_account.key());
    msg!("  Signer: {:?}", session_signer.key());
    msg!("  Valid until: {}", token.valid_until());
    Ok(())
}
