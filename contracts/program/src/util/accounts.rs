//! Account acquisition, allocation and reclamation helpers.

use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
    sysvars::{clock::Clock, rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_system::instructions::{Allocate, Assign, CreateAccount, Transfer};
use socialgraph_state::lifecycle::{reclaim, rent_shortfall};
use socialgraph_state::{load_live, AccountState, SlotState};

/// An optional account slot holds the program id when the caller omits it.
pub fn optional_account<'a>(
    account: &'a AccountInfo,
    program_id: &Pubkey,
) -> Option<&'a AccountInfo> {
    if account.key() == program_id {
        None
    } else {
        Some(account)
    }
}

pub fn slot_state(account: &AccountInfo, program_id: &Pubkey) -> Result<SlotState, ProgramError> {
    let data = account.try_borrow_data()?;
    let owner = unsafe { account.owner() };
    Ok(SlotState::classify(owner, &data, program_id))
}

/// Copies a live entity of type `T` out of `account`.
pub fn load_entity<T: AccountState>(
    account: &AccountInfo,
    program_id: &Pubkey,
) -> Result<T, ProgramError> {
    let data = account.try_borrow_data()?;
    let owner = unsafe { account.owner() };
    load_live::<T>(owner, &data, program_id).map_err(|e| {
        msg!("Account {:?} is not a live {:?}: {}", account.key(), T::DISCRIMINATOR, e);
        e.into()
    })
}

/// Writes `entity` into a freshly allocated account.
pub fn store_entity<T: AccountState>(account: &AccountInfo, entity: &T) -> ProgramResult {
    let mut data = account.try_borrow_mut_data()?;
    entity.store(&mut data)?;
    Ok(())
}

/// Allocates `space` bytes at a PDA owned by `owner`, with `payer` funding
/// rent exemption.
///
/// A slot that somebody already sent lamports to cannot go through
/// `CreateAccount`; it is topped up, allocated and assigned instead.
pub fn allocate_account(
    payer: &AccountInfo,
    account: &AccountInfo,
    space: usize,
    owner: &Pubkey,
    signer_seeds: &[Seed],
) -> Result<u64, ProgramError> {
    let rent = Rent::get()?;
    let required = rent.minimum_balance(space);
    let current = account.lamports();

    if current == 0 {
        CreateAccount {
            from: payer,
            to: account,
            lamports: required,
            space: space as u64,
            owner,
        }
        .invoke_signed(&[Signer::from(signer_seeds)])?;
        return Ok(required);
    }

    let shortfall = rent_shortfall(required, current);
    if shortfall > 0 {
        Transfer {
            from: payer,
            to: account,
            lamports: shortfall,
        }
        .invoke()?;
    }
    Allocate {
        account,
        space: space as u64,
    }
    .invoke_signed(&[Signer::from(signer_seeds)])?;
    Assign { account, owner }.invoke_signed(&[Signer::from(signer_seeds)])?;
    Ok(shortfall)
}

/// Drains every lamport from `account` into `receiver`, wipes the data and
/// hands the slot back to the system program. Returns the amount reclaimed.
pub fn close_account(account: &AccountInfo, receiver: &AccountInfo) -> Result<u64, ProgramError> {
    let (receiver_balance, reclaimed) = reclaim(account.lamports(), receiver.lamports())?;
    *receiver.try_borrow_mut_lamports()? = receiver_balance;
    *account.try_borrow_mut_lamports()? = 0;
    account.try_borrow_mut_data()?.fill(0);
    account.close()?;
    Ok(reclaimed)
}

pub fn current_timestamp() -> Result<i64, ProgramError> {
    Ok(Clock::get()?.unix_timestamp)
}
