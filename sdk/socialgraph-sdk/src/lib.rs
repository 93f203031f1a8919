pub mod advanced;
pub mod basic;
pub mod core;
pub mod error;
pub mod types;
pub mod utils;

pub use crate::basic::graph::SocialGraph;
pub use crate::core::connection::{RpcConnection, SolConnection};
pub use crate::error::{Result, SocialGraphSdkError};
pub use crate::types::{PostInfo, ProfileInfo, SessionInfo, UserInfo};
pub use crate::utils::{
    derive_post_pda, derive_profile_pda, derive_session_token_pda, derive_user_pda, fetch_post,
    fetch_profile, fetch_session_token, fetch_user,
};

pub mod state {
    pub use socialgraph_state::constants;
    pub use socialgraph_state::{
        AccountState, Post, Profile, SessionToken, SocialGraphError, User,
    };
}
