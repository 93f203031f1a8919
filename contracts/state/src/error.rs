use pinocchio::program_error::ProgramError;
use thiserror::Error;

/// Errors raised by the social graph program.
///
/// Every variant maps to exactly one failed precondition so that a caller can
/// tell "already there" apart from "not authorized" or "credential expired".
/// Codes start at 6000 and are stable: clients decode
/// `ProgramError::Custom(code)` back into this enum.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u32)]
pub enum SocialGraphError {
    #[error("Seed exceeds the maximum seed length or count")]
    InvalidSeed = 6000,

    #[error("No bump seed yields a valid address")]
    AddressExhausted,

    #[error("Account already exists")]
    AlreadyExists,

    #[error("Account does not exist")]
    NotFound,

    #[error("Session token has expired")]
    Expired,

    #[error("Session token is invalid for this action")]
    InvalidToken,

    #[error("Session signer did not sign the transaction")]
    UnknownSigner,

    #[error("Missing signature from the entity authority")]
    MissingAuthority,

    #[error("Account is locked by a conflicting transaction")]
    Conflict,

    #[error("Account does not match its derived address")]
    InvalidAddress,

    #[error("Account does not belong to the supplied parent")]
    OwnershipMismatch,

    #[error("Metadata URI is too long")]
    MetadataUriTooLong,

    #[error("Session duration is out of bounds")]
    InvalidSessionTtl,

    #[error("Account data is invalid")]
    InvalidAccountData,

    #[error("Lamport arithmetic overflow")]
    ArithmeticOverflow,
}

impl SocialGraphError {
    const ALL: [SocialGraphError; 15] = [
        SocialGraphError::InvalidSeed,
        SocialGraphError::AddressExhausted,
        SocialGraphError::AlreadyExists,
        SocialGraphError::NotFound,
        SocialGraphError::Expired,
        SocialGraphError::InvalidToken,
        SocialGraphError::UnknownSigner,
        SocialGraphError::MissingAuthority,
        SocialGraphError::Conflict,
        SocialGraphError::InvalidAddress,
        SocialGraphError::OwnershipMismatch,
        SocialGraphError::MetadataUriTooLong,
        SocialGraphError::InvalidSessionTtl,
        SocialGraphError::InvalidAccountData,
        SocialGraphError::ArithmeticOverflow,
    ];

    /// Custom error code reported to the runtime.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Decodes a custom error code produced by this program.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.code() == code)
    }
}

impl From<SocialGraphError> for ProgramError {
    fn from(e: SocialGraphError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_sequential_from_6000() {
        for (offset, err) in SocialGraphError::ALL.iter().enumerate() {
            assert_eq!(err.code(), 6000 + offset as u32);
        }
    }

    #[test]
    fn test_from_code_roundtrips_every_variant() {
        for err in SocialGraphError::ALL {
            assert_eq!(SocialGraphError::from_code(err.code()), Some(err));
        }
        assert_eq!(SocialGraphError::from_code(42), None);
    }

    #[test]
    fn test_into_program_error() {
        let err: ProgramError = SocialGraphError::InvalidToken.into();
        assert_eq!(err, ProgramError::Custom(6005));
    }
}
