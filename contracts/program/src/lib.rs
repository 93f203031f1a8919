//! Social Graph Program - Main Entry Point
//!
//! Users, profiles and posts stored at deterministic addresses, mutated by
//! their authority directly or through a delegated session token.

pub mod actions;
pub mod instruction;
pub mod processor;
pub mod util;

use pinocchio_pubkey::declare_id;

declare_id!("SocGraph11111111111111111111111111111111111");

#[cfg(not(feature = "no-entrypoint"))]
use processor::process_instruction;

#[cfg(not(feature = "no-entrypoint"))]
pinocchio::entrypoint!(process_instruction);
