//! Seeds and limits shared by the program and its clients.

/// PDA: ["user", random_hash]
pub const USER_SEED: &[u8] = b"user";

/// PDA: ["profile", user, label]
pub const PROFILE_SEED: &[u8] = b"profile";

/// PDA: ["post", profile, random_hash]
pub const POST_SEED: &[u8] = b"post";

/// PDA: ["session_token", target_program, session_signer]
pub const SESSION_TOKEN_SEED: &[u8] = b"session_token";

/// Longest single seed accepted by the runtime.
pub const MAX_SEED_LEN: usize = 32;

/// Most seeds in one derivation, bump included.
pub const MAX_SEEDS: usize = 16;

/// Profile labels are PDA seeds, so they share the seed length limit.
pub const MAX_PROFILE_LABEL_LEN: usize = MAX_SEED_LEN;

pub const MAX_METADATA_URI_LEN: usize = 128;

/// Session lifetime used when the issuer does not pick one (seconds).
pub const DEFAULT_SESSION_TTL: i64 = 60 * 60;

/// Upper bound on a session lifetime (seconds).
pub const MAX_SESSION_TTL: i64 = 7 * 24 * 60 * 60;

/// Owner of every unallocated account.
pub const SYSTEM_PROGRAM_ID: [u8; 32] = [0u8; 32];
