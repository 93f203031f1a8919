//! CreateProfile instruction handler

use pinocchio::{
    account_info::AccountInfo, instruction::Seed, msg, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};
use socialgraph_assertions::{check_system_program, check_writable, check_writable_signer};
use socialgraph_state::{
    constants::PROFILE_SEED, profile_address, AccountState, Action, Authorizer, Profile,
    SocialGraphError, User,
};

use crate::util::{
    allocate_account, current_timestamp, load_entity, slot_state, store_entity,
    TransactionSigners,
};

pub fn process_create_profile(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    label: &str,
) -> ProgramResult {
    let [profile_account, user_account, payer_account, authority_account, system_program, ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_writable_signer(payer_account, ProgramError::MissingRequiredSignature)?;
    check_writable(profile_account, ProgramError::Immutable)?;
    check_system_program(system_program, ProgramError::IncorrectProgramId)?;

    let user = load_entity::<User>(user_account, program_id)?;

    let (expected, bump) = profile_address(user_account.key(), label, program_id)?;
    if profile_account.key() != &expected {
        msg!("Profile account does not match its derived address");
        return Err(SocialGraphError::InvalidAddress.into());
    }
    slot_state(profile_account, program_id)?.ensure_absent()?;

    // profiles are never delegated
    let grant = Authorizer::new(program_id, current_timestamp()?).authorize(
        Action::CreateProfile,
        &user.authority,
        authority_account.key(),
        &TransactionSigners(accounts),
        None,
    )?;

    let bump_seed = [bump];
    let seeds = [
        Seed::from(PROFILE_SEED),
        Seed::from(&user_account.key()[..]),
        Seed::from(label.as_bytes()),
        Seed::from(&bump_seed[..]),
    ];
    allocate_account(payer_account, profile_account, Profile::LEN, program_id, &seeds)?;

    let profile = Profile::new(*user_account.key(), label, bump)?;
    store_entity(profile_account, &profile)?;

    msg!("Profile '{}' created: {:?} ({:?})", label, profile_account.key(), grant);
    Ok(())
}
