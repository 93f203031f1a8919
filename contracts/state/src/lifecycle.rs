//! Slot lifecycle and rent accounting.
//!
//! Each entity address is a slot that is either Absent (unallocated, owned by
//! the system program) or Live (allocated and owned by this program). The
//! program acquires a slot, classifies it here, checks authorization, and
//! only then commits allocation, mutation or deallocation.

use pinocchio::pubkey::Pubkey;

use crate::constants::SYSTEM_PROGRAM_ID;
use crate::{AccountState, SocialGraphError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// No data; free to allocate.
    Absent,
    /// Allocated by this program.
    Live,
    /// Owned by another program, or a system account carrying data.
    Foreign,
}

impl SlotState {
    pub fn classify(owner: &Pubkey, data: &[u8], program_id: &Pubkey) -> Self {
        let owned = owner == program_id;
        match (owned, data.is_empty()) {
            (true, false) => SlotState::Live,
            (true, true) => SlotState::Absent,
            (false, true) if *owner == SYSTEM_PROGRAM_ID => SlotState::Absent,
            _ => SlotState::Foreign,
        }
    }

    pub fn ensure_absent(self) -> Result<(), SocialGraphError> {
        match self {
            SlotState::Absent => Ok(()),
            _ => Err(SocialGraphError::AlreadyExists),
        }
    }
}

/// Reads a live entity of type `T` out of a slot.
///
/// Absent and foreign slots are `NotFound`; a program-owned slot holding a
/// different entity kind is `InvalidAccountData`.
pub fn load_live<T: AccountState>(
    owner: &Pubkey,
    data: &[u8],
    program_id: &Pubkey,
) -> Result<T, SocialGraphError> {
    match SlotState::classify(owner, data, program_id) {
        SlotState::Live => T::load(data).copied(),
        SlotState::Absent | SlotState::Foreign => Err(SocialGraphError::NotFound),
    }
}

/// Lamports still missing from a pre-funded slot before it is rent exempt.
pub fn rent_shortfall(required: u64, current: u64) -> u64 {
    required.saturating_sub(current)
}

/// Moves the whole balance of a closing slot to the refund receiver.
///
/// Returns the receiver's new balance and the amount reclaimed.
pub fn reclaim(slot_lamports: u64, receiver_lamports: u64) -> Result<(u64, u64), SocialGraphError> {
    let receiver = receiver_lamports
        .checked_add(slot_lamports)
        .ok_or(SocialGraphError::ArithmeticOverflow)?;
    Ok((receiver, slot_lamports))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Post, User};

    const PROGRAM_ID: Pubkey = [11u8; 32];
    const OTHER_PROGRAM: Pubkey = [12u8; 32];

    fn user_bytes() -> Vec<u8> {
        let mut data = vec![0u8; User::LEN];
        User::new([1u8; 32], [2u8; 32], [3u8; 32], 255)
            .store(&mut data)
            .unwrap();
        data
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            SlotState::classify(&SYSTEM_PROGRAM_ID, &[], &PROGRAM_ID),
            SlotState::Absent
        );
        assert_eq!(
            SlotState::classify(&PROGRAM_ID, &user_bytes(), &PROGRAM_ID),
            SlotState::Live
        );
        assert_eq!(
            SlotState::classify(&OTHER_PROGRAM, &[], &PROGRAM_ID),
            SlotState::Foreign
        );
        assert_eq!(
            SlotState::classify(&SYSTEM_PROGRAM_ID, &[0u8; 8], &PROGRAM_ID),
            SlotState::Foreign
        );
    }

    #[test]
    fn test_ensure_absent() {
        assert!(SlotState::Absent.ensure_absent().is_ok());
        assert_eq!(
            SlotState::Live.ensure_absent(),
            Err(SocialGraphError::AlreadyExists)
        );
        assert_eq!(
            SlotState::Foreign.ensure_absent(),
            Err(SocialGraphError::AlreadyExists)
        );
    }

    #[test]
    fn test_load_live() {
        let data = user_bytes();
        let user = load_live::<User>(&PROGRAM_ID, &data, &PROGRAM_ID).unwrap();
        assert_eq!(user.authority, [1u8; 32]);

        assert_eq!(
            load_live::<User>(&SYSTEM_PROGRAM_ID, &[], &PROGRAM_ID),
            Err(SocialGraphError::NotFound)
        );
        assert_eq!(
            load_live::<User>(&OTHER_PROGRAM, &data, &PROGRAM_ID),
            Err(SocialGraphError::NotFound)
        );
        assert_eq!(
            load_live::<Post>(&PROGRAM_ID, &data, &PROGRAM_ID),
            Err(SocialGraphError::InvalidAccountData)
        );
    }

    #[test]
    fn test_deleted_slot_reads_not_found_repeatedly() {
        for _ in 0..3 {
            assert_eq!(
                load_live::<Post>(&SYSTEM_PROGRAM_ID, &[], &PROGRAM_ID),
                Err(SocialGraphError::NotFound)
            );
        }
    }

    #[test]
    fn test_reclaim_moves_entire_balance() {
        assert_eq!(reclaim(2_500_000, 1_000), Ok((2_501_000, 2_500_000)));
        assert_eq!(reclaim(0, 7), Ok((7, 0)));
        assert_eq!(
            reclaim(1, u64::MAX),
            Err(SocialGraphError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_rent_shortfall() {
        assert_eq!(rent_shortfall(1_000, 400), 600);
        assert_eq!(rent_shortfall(1_000, 5_000), 0);
    }
}
