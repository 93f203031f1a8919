//! Instruction Processor
//!
//! Thin dispatcher that routes instructions to individual handlers.

use pinocchio::{account_info::AccountInfo, msg, pubkey::Pubkey, ProgramResult};

use crate::actions;
use crate::instruction::SocialGraphInstruction;

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = SocialGraphInstruction::unpack(instruction_data).map_err(|e| {
        msg!("Failed to unpack instruction: {:?}", e);
        e
    })?;
    msg!("Instruction: {:?}", instruction.discriminator());

    match instruction {
        SocialGraphInstruction::CreateUser { random_hash } => {
            actions::process_create_user(program_id, accounts, random_hash)
        },
        SocialGraphInstruction::CreateProfile { label } => {
            actions::process_create_profile(program_id, accounts, &label)
        },
        SocialGraphInstruction::CreatePost {
            metadata_uri,
            random_hash,
        } => actions::process_create_post(program_id, accounts, &metadata_uri, random_hash),
        SocialGraphInstruction::UpdatePost { metadata_uri } => {
            actions::process_update_post(program_id, accounts, &metadata_uri)
        },
        SocialGraphInstruction::DeletePost => actions::process_delete_post(program_id, accounts),
        SocialGraphInstruction::CreateSession {
            target_program,
            ttl_seconds,
        } => actions::process_create_session(program_id, accounts, target_program, ttl_seconds),
        SocialGraphInstruction::RevokeSession => {
            actions::process_revoke_session(program_id, accounts)
        },
    }
}
