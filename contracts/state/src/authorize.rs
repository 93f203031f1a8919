//! Authorization of entity mutations.
//!
//! A mutation is allowed either by a direct signature from the entity's
//! authority, or by a live session token whose grantor is that authority and
//! whose session signer signed the transaction. Nothing is cached: the
//! target authority is passed in fresh on every call.

use pinocchio::pubkey::Pubkey;

use crate::derive::{verify_address, EntityKind};
use crate::session::SessionToken;
use crate::SocialGraphError;

/// The set of keys that signed the current transaction.
pub trait SignerSet {
    fn contains_signer(&self, key: &Pubkey) -> bool;
}

impl SignerSet for [Pubkey] {
    fn contains_signer(&self, key: &Pubkey) -> bool {
        self.iter().any(|signer| signer == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateUser,
    CreateProfile,
    CreatePost,
    UpdatePost,
    DeletePost,
}

impl Action {
    /// Only content under a profile can be touched through a session.
    pub const fn accepts_session(self) -> bool {
        matches!(
            self,
            Action::CreatePost | Action::UpdatePost | Action::DeletePost
        )
    }
}

/// A session token as presented with a request: the slot it was read from
/// and its decoded contents.
#[derive(Debug, Clone, Copy)]
pub struct SessionCredential<'a> {
    pub address: &'a Pubkey,
    pub token: &'a SessionToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    /// The entity authority signed directly.
    Direct,
    /// A session signer acted for `grantor`.
    Delegated { grantor: Pubkey },
}

pub struct Authorizer<'a> {
    program_id: &'a Pubkey,
    now: i64,
}

impl<'a> Authorizer<'a> {
    pub fn new(program_id: &'a Pubkey, now: i64) -> Self {
        Self { program_id, now }
    }

    /// Decides whether `claimed_authority` may perform `action` on an entity
    /// owned by `target_authority`.
    pub fn authorize<S: SignerSet + ?Sized>(
        &self,
        action: Action,
        target_authority: &Pubkey,
        claimed_authority: &Pubkey,
        signers: &S,
        session: Option<SessionCredential<'_>>,
    ) -> Result<Grant, SocialGraphError> {
        match session {
            None => {
                if claimed_authority != target_authority
                    || !signers.contains_signer(claimed_authority)
                {
                    return Err(SocialGraphError::MissingAuthority);
                }
                Ok(Grant::Direct)
            },
            Some(credential) => {
                self.check_scope(action, &credential)?;
                let grantor = credential.token.validate(self.now)?;
                if grantor != target_authority {
                    return Err(SocialGraphError::InvalidToken);
                }
                let session_signer = &credential.token.session_signer;
                if claimed_authority != session_signer || !signers.contains_signer(session_signer)
                {
                    return Err(SocialGraphError::UnknownSigner);
                }
                Ok(Grant::Delegated { grantor: *grantor })
            },
        }
    }

    /// The token must sit at its own derived address and target this program.
    fn check_scope(
        &self,
        action: Action,
        credential: &SessionCredential<'_>,
    ) -> Result<(), SocialGraphError> {
        let token = credential.token;
        if !action.accepts_session() || token.target_program != *self.program_id {
            return Err(SocialGraphError::InvalidToken);
        }
        verify_address(
            EntityKind::SessionToken,
            &[&token.target_program, &token.session_signer],
            token.bump,
            self.program_id,
            credential.address,
        )
        .map_err(|_| SocialGraphError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::session_token_address;

    const PROGRAM_ID: Pubkey = [42u8; 32];
    const NOW: i64 = 1_700_000_000;

    const ALICE: Pubkey = [1u8; 32];
    const BOB: Pubkey = [2u8; 32];
    const DELEGATE: Pubkey = [3u8; 32];
    const MALLORY: Pubkey = [4u8; 32];

    fn issue(grantor: Pubkey, signer: Pubkey) -> (Pubkey, SessionToken) {
        let (address, bump) = session_token_address(&PROGRAM_ID, &signer, &PROGRAM_ID).unwrap();
        let token =
            SessionToken::issue(grantor, signer, PROGRAM_ID, NOW - 10, Some(3_600), bump).unwrap();
        (address, token)
    }

    fn authorizer() -> Authorizer<'static> {
        Authorizer::new(&PROGRAM_ID, NOW)
    }

    #[test]
    fn test_direct_signature_allowed() {
        let grant = authorizer()
            .authorize(Action::UpdatePost, &ALICE, &ALICE, &[ALICE][..], None)
            .unwrap();
        assert_eq!(grant, Grant::Direct);
    }

    #[test]
    fn test_direct_requires_signature() {
        let result = authorizer().authorize(Action::UpdatePost, &ALICE, &ALICE, &[BOB][..], None);
        assert_eq!(result, Err(SocialGraphError::MissingAuthority));
    }

    #[test]
    fn test_direct_requires_matching_authority() {
        // Bob signs and claims to be himself, but Alice owns the entity.
        let result = authorizer().authorize(Action::DeletePost, &ALICE, &BOB, &[BOB][..], None);
        assert_eq!(result, Err(SocialGraphError::MissingAuthority));
    }

    #[test]
    fn test_fee_payer_signature_is_irrelevant() {
        // Alice signs only as fee payer while Bob is claimed as authority.
        let result =
            authorizer().authorize(Action::CreatePost, &BOB, &BOB, &[ALICE][..], None);
        assert_eq!(result, Err(SocialGraphError::MissingAuthority));
    }

    #[test]
    fn test_session_allows_delegate() {
        let (address, token) = issue(ALICE, DELEGATE);
        let credential = SessionCredential {
            address: &address,
            token: &token,
        };
        let grant = authorizer()
            .authorize(
                Action::CreatePost,
                &ALICE,
                &DELEGATE,
                &[DELEGATE][..],
                Some(credential),
            )
            .unwrap();
        assert_eq!(grant, Grant::Delegated { grantor: ALICE });
    }

    #[test]
    fn test_session_from_other_grantor_is_invalid() {
        // Token granted by Alice, used against Bob's entity.
        let (address, token) = issue(ALICE, DELEGATE);
        let credential = SessionCredential {
            address: &address,
            token: &token,
        };
        let result = authorizer().authorize(
            Action::CreatePost,
            &BOB,
            &DELEGATE,
            &[DELEGATE, BOB][..],
            Some(credential),
        );
        assert_eq!(result, Err(SocialGraphError::InvalidToken));
    }

    #[test]
    fn test_session_signed_by_wrong_key() {
        let (address, token) = issue(ALICE, DELEGATE);
        let credential = SessionCredential {
            address: &address,
            token: &token,
        };
        let result = authorizer().authorize(
            Action::UpdatePost,
            &ALICE,
            &MALLORY,
            &[MALLORY][..],
            Some(credential),
        );
        assert_eq!(result, Err(SocialGraphError::UnknownSigner));
    }

    #[test]
    fn test_session_delegate_must_actually_sign() {
        let (address, token) = issue(ALICE, DELEGATE);
        let credential = SessionCredential {
            address: &address,
            token: &token,
        };
        let result = authorizer().authorize(
            Action::UpdatePost,
            &ALICE,
            &DELEGATE,
            &[ALICE][..],
            Some(credential),
        );
        assert_eq!(result, Err(SocialGraphError::UnknownSigner));
    }

    #[test]
    fn test_expired_session_denied() {
        let (address, token) = issue(ALICE, DELEGATE);
        let credential = SessionCredential {
            address: &address,
            token: &token,
        };
        let later = Authorizer::new(&PROGRAM_ID, token.valid_until());
        let result = later.authorize(
            Action::DeletePost,
            &ALICE,
            &DELEGATE,
            &[DELEGATE][..],
            Some(credential),
        );
        assert_eq!(result, Err(SocialGraphError::Expired));
    }

    #[test]
    fn test_session_at_wrong_address_denied() {
        let (_, token) = issue(ALICE, DELEGATE);
        let (other_address, _) = issue(ALICE, MALLORY);
        let credential = SessionCredential {
            address: &other_address,
            token: &token,
        };
        let result = authorizer().authorize(
            Action::CreatePost,
            &ALICE,
            &DELEGATE,
            &[DELEGATE][..],
            Some(credential),
        );
        assert_eq!(result, Err(SocialGraphError::InvalidToken));
    }

    #[test]
    fn test_session_for_other_program_denied() {
        let other_program = [9u8; 32];
        let (address, bump) =
            session_token_address(&other_program, &DELEGATE, &PROGRAM_ID).unwrap();
        let token =
            SessionToken::issue(ALICE, DELEGATE, other_program, NOW, Some(60), bump).unwrap();
        let credential = SessionCredential {
            address: &address,
            token: &token,
        };
        let result = authorizer().authorize(
            Action::CreatePost,
            &ALICE,
            &DELEGATE,
            &[DELEGATE][..],
            Some(credential),
        );
        assert_eq!(result, Err(SocialGraphError::InvalidToken));
    }

    #[test]
    fn test_session_not_accepted_for_profile_creation() {
        let (address, token) = issue(ALICE, DELEGATE);
        let credential = SessionCredential {
            address: &address,
            token: &token,
        };
        let result = authorizer().authorize(
            Action::CreateProfile,
            &ALICE,
            &DELEGATE,
            &[DELEGATE][..],
            Some(credential),
        );
        assert_eq!(result, Err(SocialGraphError::InvalidToken));
    }

    #[test]
    fn test_checks_each_target_independently() {
        let (address, token) = issue(ALICE, DELEGATE);
        let authorizer = authorizer();
        for (target, expected) in [
            (ALICE, Ok(Grant::Delegated { grantor: ALICE })),
            (BOB, Err(SocialGraphError::InvalidToken)),
            (ALICE, Ok(Grant::Delegated { grantor: ALICE })),
        ] {
            let credential = SessionCredential {
                address: &address,
                token: &token,
            };
            let result = authorizer.authorize(
                Action::UpdatePost,
                &target,
                &DELEGATE,
                &[DELEGATE][..],
                Some(credential),
            );
            assert_eq!(result, expected);
        }
    }

    #[test]
    fn test_unrelated_signer_never_allowed() {
        for _ in 0..32 {
            let owner = rand::random::<[u8; 32]>();
            let signer = rand::random::<[u8; 32]>();
            let result = authorizer().authorize(
                Action::DeletePost,
                &owner,
                &signer,
                &[signer][..],
                None,
            );
            assert_eq!(result, Err(SocialGraphError::MissingAuthority));
        }
    }
}
