//! CreatePost instruction handler

use pinocchio::{
    account_info::AccountInfo, instruction::Seed, msg, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};
use socialgraph_assertions::{check_system_program, check_writable, check_writable_signer};
use socialgraph_state::{
    constants::POST_SEED, post_address, AccountState, Action, Authorizer, Post,
    SessionCredential, SocialGraphError,
};

use super::{load_post_parents, load_session};
use crate::util::{
    allocate_account, current_timestamp, optional_account, slot_state, store_entity,
    TransactionSigners,
};

pub fn process_create_post(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    metadata_uri: &str,
    random_hash: [u8; 32],
) -> ProgramResult {
    let [post_account, profile_account, user_account, session_account, payer_account, authority_account, system_program, ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_writable_signer(payer_account, ProgramError::MissingRequiredSignature)?;
    check_writable(post_account, ProgramError::Immutable)?;
    check_system_program(system_program, ProgramError::IncorrectProgramId)?;

    let (_, user) = load_post_parents(profile_account, user_account, program_id)?;

    let (expected, bump) = post_address(profile_account.key(), &random_hash, program_id)?;
    if post_account.key() != &expected {
        msg!("Post account does not match its derived address");
        return Err(SocialGraphError::InvalidAddress.into());
    }
    slot_state(post_account, program_id)?.ensure_absent()?;

    let session_account = optional_account(session_account, program_id);
    let session = load_session(session_account, program_id)?;
    let credential = session_account
        .zip(session.as_ref())
        .map(|(account, token)| SessionCredential {
            address: account.key(),
            token,
        });

    let grant = Authorizer::new(program_id, current_timestamp()?).authorize(
        Action::CreatePost,
        &user.authority,
        authority_account.key(),
        &TransactionSigners(accounts),
        credential,
    )?;

    // validate before any lamports move
    let post = Post::new(*profile_account.key(), random_hash, metadata_uri, bump)?;

    let bump_seed = [bump];
    let seeds = [
        Seed::from(POST_SEED),
        Seed::from(&profile_account.key()[..]),
        Seed::from(&random_hash[..]),
        Seed::from(&bump_seed[..]),
    ];
    allocate_account(payer_account, post_account, Post::LEN, program_id, &seeds)?;
    store_entity(post_account, &post)?;

    msg!("Post created: {:?} ({:?})", post_account.key(), grant);
    Ok(())
}
