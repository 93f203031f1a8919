use bytemuck::Pod;

use crate::{Discriminator, SocialGraphError};

/// Zero-copy view over a program-owned account.
///
/// Implementors are `#[repr(C)]` structs built only from byte arrays, so they
/// have alignment 1 and can be read straight out of account data regardless
/// of where the runtime placed the buffer. The first byte of every layout is
/// its [`Discriminator`].
pub trait AccountState: Pod {
    const DISCRIMINATOR: Discriminator;
    const LEN: usize = core::mem::size_of::<Self>();

    /// Borrows the account stored at the start of `data`.
    fn load(data: &[u8]) -> Result<&Self, SocialGraphError> {
        let bytes = data
            .get(..Self::LEN)
            .ok_or(SocialGraphError::InvalidAccountData)?;
        if bytes[0] != Self::DISCRIMINATOR as u8 {
            return Err(SocialGraphError::InvalidAccountData);
        }
        bytemuck::try_from_bytes(bytes).map_err(|_| SocialGraphError::InvalidAccountData)
    }

    /// Mutably borrows the account stored at the start of `data`.
    fn load_mut(data: &mut [u8]) -> Result<&mut Self, SocialGraphError> {
        let bytes = data
            .get_mut(..Self::LEN)
            .ok_or(SocialGraphError::InvalidAccountData)?;
        if bytes[0] != Self::DISCRIMINATOR as u8 {
            return Err(SocialGraphError::InvalidAccountData);
        }
        bytemuck::try_from_bytes_mut(bytes).map_err(|_| SocialGraphError::InvalidAccountData)
    }

    /// Writes `self` over the first `LEN` bytes of an uninitialized buffer.
    fn store(&self, data: &mut [u8]) -> Result<(), SocialGraphError> {
        let dst = data
            .get_mut(..Self::LEN)
            .ok_or(SocialGraphError::InvalidAccountData)?;
        dst.copy_from_slice(self.as_bytes());
        Ok(())
    }

    fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
