#[cfg(target_os = "solana")]
use pinocchio::syscalls::sol_memcmp_;
use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey, ProgramResult};
use pinocchio_system::ID as SYSTEM_ID;

#[allow(unused_imports)]
use std::mem::MaybeUninit;

#[inline(always)]
#[cfg(target_os = "solana")]
pub fn sol_assert_bytes_eq(left: &[u8], right: &[u8], len: usize) -> bool {
    if left.len() != len || right.len() != len {
        return false;
    }
    unsafe {
        let mut result = MaybeUninit::<i32>::uninit();
        sol_memcmp_(
            left.as_ptr(),
            right.as_ptr(),
            len as u64,
            result.as_mut_ptr() as *mut i32,
        );
        result.assume_init() == 0
    }
}

#[cfg(not(target_os = "solana"))]
pub fn sol_assert_bytes_eq(left: &[u8], right: &[u8], len: usize) -> bool {
    left.len() == len && right.len() == len && left == right
}

macro_rules! sol_assert {
  ($func_name:ident, $($param:ident: $type:ty),* $(,)? | $check:expr) => {
      #[inline(always)]
      pub fn $func_name<E: Into<ProgramError>>($($param: $type,)* error: E) -> ProgramResult {
          if $check {
              Ok(())
          } else {
              Err(error.into())
          }
      }
  };
}

sol_assert!(check_signer, account: &AccountInfo |
  account.is_signer()
);

sol_assert!(check_writable, account: &AccountInfo |
  account.is_writable()
);

sol_assert!(check_writable_signer, account: &AccountInfo |
  account.is_writable() && account.is_signer()
);

sol_assert!(check_key_differs, account: &AccountInfo, other_key: &Pubkey |
  !sol_assert_bytes_eq(account.key().as_ref(), other_key.as_ref(), 32)
);

sol_assert!(check_system_program, account: &AccountInfo |
  sol_assert_bytes_eq(account.key().as_ref(), SYSTEM_ID.as_ref(), 32)
);
