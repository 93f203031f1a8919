//! Deterministic account addressing.
//!
//! Every entity lives at a program derived address computed from its kind
//! prefix and its logical identity. Clients compute the same address before
//! the account exists, and the program never needs an index to find it.

use pinocchio::pubkey::Pubkey;

use crate::constants::{
    MAX_PROFILE_LABEL_LEN, MAX_SEEDS, MAX_SEED_LEN, POST_SEED, PROFILE_SEED, SESSION_TOKEN_SEED,
    USER_SEED,
};
use crate::SocialGraphError;

/// Kind of account being addressed. Selects the seed prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Profile,
    Post,
    SessionToken,
}

impl EntityKind {
    pub const fn seed_prefix(self) -> &'static [u8] {
        match self {
            EntityKind::User => USER_SEED,
            EntityKind::Profile => PROFILE_SEED,
            EntityKind::Post => POST_SEED,
            EntityKind::SessionToken => SESSION_TOKEN_SEED,
        }
    }
}

/// Finds the canonical address for `seeds` under `kind`.
///
/// Bumps are tried from 255 down to 0 and the first off-curve address wins.
/// Returns the address together with the bump that proves it.
pub fn derive_address(
    kind: EntityKind,
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), SocialGraphError> {
    check_seeds(seeds)?;
    for bump in (0..=u8::MAX).rev() {
        if let Some(address) = program_address(kind, seeds, bump, program_id) {
            return Ok((address, bump));
        }
    }
    Err(SocialGraphError::AddressExhausted)
}

/// Single derivation attempt with a known bump.
pub fn create_address(
    kind: EntityKind,
    seeds: &[&[u8]],
    bump: u8,
    program_id: &Pubkey,
) -> Result<Pubkey, SocialGraphError> {
    check_seeds(seeds)?;
    program_address(kind, seeds, bump, program_id).ok_or(SocialGraphError::InvalidAddress)
}

/// Checks that `expected` is the address `seeds` and `bump` derive to.
pub fn verify_address(
    kind: EntityKind,
    seeds: &[&[u8]],
    bump: u8,
    program_id: &Pubkey,
    expected: &Pubkey,
) -> Result<(), SocialGraphError> {
    if create_address(kind, seeds, bump, program_id)? == *expected {
        Ok(())
    } else {
        Err(SocialGraphError::InvalidAddress)
    }
}

pub fn user_address(
    random_hash: &[u8; 32],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), SocialGraphError> {
    derive_address(EntityKind::User, &[random_hash], program_id)
}

pub fn profile_address(
    user: &Pubkey,
    label: &str,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), SocialGraphError> {
    check_label(label)?;
    derive_address(EntityKind::Profile, &[user, label.as_bytes()], program_id)
}

pub fn post_address(
    profile: &Pubkey,
    random_hash: &[u8; 32],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), SocialGraphError> {
    derive_address(EntityKind::Post, &[profile, random_hash], program_id)
}

/// Session slots are keyed by signer and target program, never by grantor.
pub fn session_token_address(
    target_program: &Pubkey,
    session_signer: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), SocialGraphError> {
    derive_address(
        EntityKind::SessionToken,
        &[target_program, session_signer],
        program_id,
    )
}

/// Profile labels must be non-empty and fit in a single seed.
pub fn check_label(label: &str) -> Result<(), SocialGraphError> {
    if label.is_empty() || label.len() > MAX_PROFILE_LABEL_LEN {
        return Err(SocialGraphError::InvalidSeed);
    }
    Ok(())
}

fn check_seeds(seeds: &[&[u8]]) -> Result<(), SocialGraphError> {
    // prefix and bump take two slots
    if seeds.len() + 2 > MAX_SEEDS {
        return Err(SocialGraphError::InvalidSeed);
    }
    if seeds.iter().any(|seed| seed.len() > MAX_SEED_LEN) {
        return Err(SocialGraphError::InvalidSeed);
    }
    Ok(())
}

fn program_address(
    kind: EntityKind,
    seeds: &[&[u8]],
    bump: u8,
    program_id: &Pubkey,
) -> Option<Pubkey> {
    let bump = [bump];
    let mut full: [&[u8]; MAX_SEEDS] = [&[]; MAX_SEEDS];
    full[0] = kind.seed_prefix();
    full[1..=seeds.len()].copy_from_slice(seeds);
    full[seeds.len() + 1] = &bump;
    create_program_address(&full[..seeds.len() + 2], program_id)
}

#[cfg(target_os = "solana")]
fn create_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> Option<Pubkey> {
    pinocchio::pubkey::create_program_address(seeds, program_id).ok()
}

#[cfg(not(target_os = "solana"))]
fn create_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> Option<Pubkey> {
    let program_id = solana_pubkey::Pubkey::new_from_array(*program_id);
    solana_pubkey::Pubkey::create_program_address(seeds, &program_id)
        .ok()
        .map(|address| address.to_bytes())
}
