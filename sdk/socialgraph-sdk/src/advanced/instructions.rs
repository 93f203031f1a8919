//! Raw instruction builders. Every account is explicit; nothing defaults.

use socialgraph_program::instruction::SocialGraphInstruction;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

use crate::error::Result;
use crate::utils::{derive_post_pda, derive_profile_pda, derive_session_token_pda, derive_user_pda};

fn build(
    program_id: &Pubkey,
    accounts: Vec<AccountMeta>,
    instruction: &SocialGraphInstruction,
) -> Result<Instruction> {
    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: borsh::to_vec(instruction)?,
    })
}

/// The program id stands in for an omitted session token.
fn session_meta(program_id: &Pubkey, session_token: Option<&Pubkey>) -> AccountMeta {
    AccountMeta::new_readonly(*session_token.unwrap_or(program_id), false)
}

pub fn create_user(
    program_id: &Pubkey,
    payer: &Pubkey,
    authority: &Pubkey,
    random_hash: [u8; 32],
) -> Result<Instruction> {
    let (user, _) = derive_user_pda(program_id, &random_hash)?;
    let accounts = vec![
        AccountMeta::new(user, false),
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    build(
        program_id,
        accounts,
        &SocialGraphInstruction::CreateUser { random_hash },
    )
}

pub fn create_profile(
    program_id: &Pubkey,
    payer: &Pubkey,
    authority: &Pubkey,
    user: &Pubkey,
    label: &str,
) -> Result<Instruction> {
    let (profile, _) = derive_profile_pda(program_id, user, label)?;
    let accounts = vec![
        AccountMeta::new(profile, false),
        AccountMeta::new_readonly(*user, false),
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    build(
        program_id,
        accounts,
        &SocialGraphInstruction::CreateProfile {
            label: label.to_string(),
        },
    )
}

#[allow(clippy::too_many_arguments)]
pub fn create_post(
    program_id: &Pubkey,
    payer: &Pubkey,
    authority: &Pubkey,
    user: &Pubkey,
    profile: &Pubkey,
    session_token: Option<&Pubkey>,
    metadata_uri: &str,
    random_hash: [u8; 32],
) -> Result<Instruction> {
    let (post, _) = derive_post_pda(program_id, profile, &random_hash)?;
    let accounts = vec![
        AccountMeta::new(post, false),
        AccountMeta::new_readonly(*profile, false),
        AccountMeta::new_readonly(*user, false),
        session_meta(program_id, session_token),
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    build(
        program_id,
        accounts,
        &SocialGraphInstruction::CreatePost {
            metadata_uri: metadata_uri.to_string(),
            random_hash,
        },
    )
}

pub fn update_post(
    program_id: &Pubkey,
    authority: &Pubkey,
    user: &Pubkey,
    profile: &Pubkey,
    post: &Pubkey,
    session_token: Option<&Pubkey>,
    metadata_uri: &str,
) -> Result<Instruction> {
    let accounts = vec![
        AccountMeta::new(*post, false),
        AccountMeta::new_readonly(*profile, false),
        AccountMeta::new_readonly(*user, false),
        session_meta(program_id, session_token),
        AccountMeta::new_readonly(*authority, true),
    ];
    build(
        program_id,
        accounts,
        &SocialGraphInstruction::UpdatePost {
            metadata_uri: metadata_uri.to_string(),
        },
    )
}

pub fn delete_post(
    program_id: &Pubkey,
    authority: &Pubkey,
    user: &Pubkey,
    profile: &Pubkey,
    post: &Pubkey,
    session_token: Option<&Pubkey>,
    refund_receiver: &Pubkey,
) -> Result<Instruction> {
    let accounts = vec![
        AccountMeta::new(*post, false),
        AccountMeta::new_readonly(*profile, false),
        AccountMeta::new_readonly(*user, false),
        session_meta(program_id, session_token),
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new(*refund_receiver, false),
    ];
    build(program_id, accounts, &SocialGraphInstruction::DeletePost)
}

pub fn create_session(
    program_id: &Pubkey,
    payer: &Pubkey,
    authority: &Pubkey,
    session_signer: &Pubkey,
    target_program: &Pubkey,
    ttl_seconds: Option<i64>,
) -> Result<Instruction> {
    let (session_token, _) = derive_session_token_pda(program_id, target_program, session_signer)?;
    let accounts = vec![
        AccountMeta::new(session_token, false),
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new_readonly(*session_signer, true),
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    build(
        program_id,
        accounts,
        &SocialGraphInstruction::CreateSession {
            target_program: target_program.to_bytes(),
            ttl_seconds,
        },
    )
}

pub fn revoke_session(
    program_id: &Pubkey,
    session_token: &Pubkey,
    authority: &Pubkey,
    refund_receiver: &Pubkey,
) -> Result<Instruction> {
    let accounts = vec![
        AccountMeta::new(*session_token, false),
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new(*refund_receiver, false),
    ];
    build(program_id, accounts, &SocialGraphInstruction::RevokeSession)
}
