use socialgraph_state::{
    post_address, profile_address, session_token_address, user_address, AccountState, Post,
    Profile, SessionToken, SocialGraphError, User,
};
use solana_sdk::pubkey::Pubkey;

use crate::core::connection::SolConnection;
use crate::error::{Result, SocialGraphSdkError};
use crate::types::{PostInfo, ProfileInfo, SessionInfo, UserInfo};

//=============================================================================
// PDA Derivation Helpers
//=============================================================================

fn to_pda(derived: std::result::Result<([u8; 32], u8), SocialGraphError>) -> Result<(Pubkey, u8)> {
    let (address, bump) = derived?;
    Ok((Pubkey::new_from_array(address), bump))
}

pub fn derive_user_pda(program_id: &Pubkey, random_hash: &[u8; 32]) -> Result<(Pubkey, u8)> {
    to_pda(user_address(random_hash, &program_id.to_bytes()))
}

/// Fails with `InvalidSeed` for an empty label or one longer than 32 bytes.
pub fn derive_profile_pda(program_id: &Pubkey, user: &Pubkey, label: &str) -> Result<(Pubkey, u8)> {
    to_pda(profile_address(&user.to_bytes(), label, &program_id.to_bytes()))
}

pub fn derive_post_pda(
    program_id: &Pubkey,
    profile: &Pubkey,
    random_hash: &[u8; 32],
) -> Result<(Pubkey, u8)> {
    to_pda(post_address(&profile.to_bytes(), random_hash, &program_id.to_bytes()))
}

pub fn derive_session_token_pda(
    program_id: &Pubkey,
    target_program: &Pubkey,
    session_signer: &Pubkey,
) -> Result<(Pubkey, u8)> {
    to_pda(session_token_address(
        &target_program.to_bytes(),
        &session_signer.to_bytes(),
        &program_id.to_bytes(),
    ))
}

//=============================================================================
// Account Fetching & Parsing
//=============================================================================

/// Fetch the data of a live account owned by `program_id`.
///
/// Missing, drained and foreign accounts all read as `AccountNotFound`.
pub async fn fetch_account_data(
    connection: &impl SolConnection,
    program_id: &Pubkey,
    address: &Pubkey,
) -> Result<Vec<u8>> {
    let account = connection
        .get_account(address)
        .await?
        .filter(|account| account.lamports > 0 && account.owner == *program_id)
        .filter(|account| !account.data.is_empty())
        .ok_or(SocialGraphSdkError::AccountNotFound(*address))?;

    Ok(account.data)
}

/// Decode an entity of type `T` from raw account data.
pub fn parse_entity<T: AccountState>(data: &[u8]) -> Result<T> {
    T::load(data).copied().map_err(|e| {
        SocialGraphSdkError::InvalidAccountData(format!(
            "Expected {:?} account: {}",
            T::DISCRIMINATOR,
            e
        ))
    })
}

pub async fn fetch_user(
    connection: &impl SolConnection,
    program_id: &Pubkey,
    address: &Pubkey,
) -> Result<UserInfo> {
    let data = fetch_account_data(connection, program_id, address).await?;
    let user = parse_entity::<User>(&data)?;
    Ok(UserInfo::from_state(*address, &user))
}

pub async fn fetch_profile(
    connection: &impl SolConnection,
    program_id: &Pubkey,
    address: &Pubkey,
) -> Result<ProfileInfo> {
    let data = fetch_account_data(connection, program_id, address).await?;
    let profile = parse_entity::<Profile>(&data)?;
    ProfileInfo::from_state(*address, &profile)
}

pub async fn fetch_post(
    connection: &impl SolConnection,
    program_id: &Pubkey,
    address: &Pubkey,
) -> Result<PostInfo> {
    let data = fetch_account_data(connection, program_id, address).await?;
    let post = parse_entity::<Post>(&data)?;
    PostInfo::from_state(*address, &post)
}

pub async fn fetch_session_token(
    connection: &impl SolConnection,
    program_id: &Pubkey,
    address: &Pubkey,
) -> Result<SessionInfo> {
    let data = fetch_account_data(connection, program_id, address).await?;
    let token = parse_entity::<SessionToken>(&data)?;
    Ok(SessionInfo::from_state(*address, &token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_matches_find_program_address() {
        let program_id = Pubkey::new_unique();
        let hash = [7u8; 32];
        let (user, bump) = derive_user_pda(&program_id, &hash).unwrap();
        assert_eq!(
            (user, bump),
            Pubkey::find_program_address(&[b"user", &hash], &program_id)
        );

        let (profile, _) = derive_profile_pda(&program_id, &user, "Personal").unwrap();
        assert_eq!(
            profile,
            Pubkey::find_program_address(&[b"profile", user.as_ref(), b"Personal"], &program_id).0
        );
    }

    #[test]
    fn test_invalid_label_is_program_error() {
        let program_id = Pubkey::new_unique();
        let err = derive_profile_pda(&program_id, &Pubkey::new_unique(), "").unwrap_err();
        assert_eq!(err.program_error(), Some(SocialGraphError::InvalidSeed));
    }

    #[test]
    fn test_parse_entity_rejects_wrong_kind() {
        let user = User::new([1u8; 32], [2u8; 32], [3u8; 32], 255);
        let mut data = vec![0u8; User::LEN];
        user.store(&mut data).unwrap();
        assert!(parse_entity::<User>(&data).is_ok());
        assert!(matches!(
            parse_entity::<Post>(&data),
            Err(SocialGraphSdkError::InvalidAccountData(_))
        ));
    }
}
