//! CreateUser instruction handler

use pinocchio::{
    account_info::AccountInfo, instruction::Seed, msg, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};
use socialgraph_assertions::{check_system_program, check_writable, check_writable_signer};
use socialgraph_state::{
    constants::USER_SEED, user_address, AccountState, Action, Authorizer, SocialGraphError, User,
};

use crate::util::{allocate_account, current_timestamp, slot_state, store_entity, TransactionSigners};

pub fn process_create_user(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    random_hash: [u8; 32],
) -> ProgramResult {
    let [user_account, payer_account, authority_account, system_program, ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_writable_signer(payer_account, ProgramError::MissingRequiredSignature)?;
    check_writable(user_account, ProgramError::Immutable)?;
    check_system_program(system_program, ProgramError::IncorrectProgramId)?;

    let (expected, bump) = user_address(&random_hash, program_id)?;
    if user_account.key() != &expected {
        msg!("User account does not match its derived address");
        return Err(SocialGraphError::InvalidAddress.into());
    }
    slot_state(user_account, program_id)?.ensure_absent()?;

    let authority = authority_account.key();
    let grant = Authorizer::new(program_id, current_timestamp()?).authorize(
        Action::CreateUser,
        authority,
        authority,
        &TransactionSigners(accounts),
        None,
    )?;

    let bump_seed = [bump];
    let seeds = [
        Seed::from(USER_SEED),
        Seed::from(&random_hash[..]),
        Seed::from(&bump_seed[..]),
    ];
    let rent = allocate_account(payer_account, user_account, User::LEN, program_id, &seeds)?;

    let user = User::new(*authority, random_hash, *payer_account.key(), bump);
    store_entity(user_account, &user)?;

    msg!("User created: {:?}", user_account.key());
    msg!("  Authority: {:?} ({:?})", authority, grant);
    msg!("  Rent paid: {}", rent);
    Ok(())
}
