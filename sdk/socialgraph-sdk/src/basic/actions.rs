//! Transaction builders. Payer and authority default to the signer passed to
//! `send`; the session token defaults to none.

use socialgraph_state::constants::MAX_METADATA_URI_LEN;
use socialgraph_state::SocialGraphError;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;

use crate::advanced::instructions;
use crate::core::connection::SolConnection;
use crate::error::{Result, SocialGraphSdkError};
use crate::utils::{derive_post_pda, derive_profile_pda, derive_session_token_pda, derive_user_pda};

fn or_signer<'s>(explicit: Option<&'s dyn Signer>, signer: &'s dyn Signer) -> &'s dyn Signer {
    explicit.unwrap_or(signer)
}

fn key_or(explicit: Option<&dyn Signer>, signer: &Pubkey) -> Pubkey {
    explicit.map(|s| s.pubkey()).unwrap_or(*signer)
}

fn fresh_hash() -> [u8; 32] {
    Keypair::new().pubkey().to_bytes()
}

/// Signs `instruction` with `fee_payer` plus `signers` and sends it.
pub async fn submit(
    connection: &impl SolConnection,
    instruction: Instruction,
    fee_payer: &dyn Signer,
    signers: &[&dyn Signer],
) -> Result<Signature> {
    let mut all: Vec<&dyn Signer> = vec![fee_payer];
    for signer in signers {
        if !all.iter().any(|s| s.pubkey() == signer.pubkey()) {
            all.push(*signer);
        }
    }

    let blockhash = connection.get_latest_blockhash().await?;
    let mut tx = Transaction::new_with_payer(&[instruction], Some(&fee_payer.pubkey()));
    tx.try_sign(&all, blockhash)
        .map_err(|e| SocialGraphSdkError::Signing(e.to_string()))?;
    connection.send_transaction(&tx).await
}

//=============================================================================
// CreateUser
//=============================================================================

pub struct CreateUserBuilder<'a> {
    program_id: Pubkey,
    random_hash: [u8; 32],
    payer: Option<&'a dyn Signer>,
    authority: Option<&'a dyn Signer>,
}

impl<'a> CreateUserBuilder<'a> {
    /// Starts with a freshly generated uniqueness hash.
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            random_hash: fresh_hash(),
            payer: None,
            authority: None,
        }
    }

    pub fn with_random_hash(mut self, random_hash: [u8; 32]) -> Self {
        self.random_hash = random_hash;
        self
    }

    pub fn with_payer(mut self, payer: &'a dyn Signer) -> Self {
        self.payer = Some(payer);
        self
    }

    pub fn with_authority(mut self, authority: &'a dyn Signer) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn random_hash(&self) -> [u8; 32] {
        self.random_hash
    }

    pub fn address(&self) -> Result<Pubkey> {
        Ok(derive_user_pda(&self.program_id, &self.random_hash)?.0)
    }

    pub fn instruction(&self, signer: &Pubkey) -> Result<Instruction> {
        instructions::create_user(
            &self.program_id,
            &key_or(self.payer, signer),
            &key_or(self.authority, signer),
            self.random_hash,
        )
    }

    /// Creates the user and returns its address.
    pub async fn send(&self, connection: &impl SolConnection, signer: &dyn Signer) -> Result<Pubkey> {
        let ix = self.instruction(&signer.pubkey())?;
        let payer = or_signer(self.payer, signer);
        let authority = or_signer(self.authority, signer);
        submit(connection, ix, payer, &[authority]).await?;
        self.address()
    }
}

//=============================================================================
// CreateProfile
//=============================================================================

pub struct CreateProfileBuilder<'a> {
    program_id: Pubkey,
    user: Pubkey,
    label: String,
    payer: Option<&'a dyn Signer>,
    authority: Option<&'a dyn Signer>,
}

impl<'a> CreateProfileBuilder<'a> {
    pub fn new(program_id: Pubkey, user: Pubkey, label: impl Into<String>) -> Self {
        Self {
            program_id,
            user,
            label: label.into(),
            payer: None,
            authority: None,
        }
    }

    pub fn with_payer(mut self, payer: &'a dyn Signer) -> Self {
        self.payer = Some(payer);
        self
    }

    pub fn with_authority(mut self, authority: &'a dyn Signer) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn address(&self) -> Result<Pubkey> {
        Ok(derive_profile_pda(&self.program_id, &self.user, &self.label)?.0)
    }

    pub fn instruction(&self, signer: &Pubkey) -> Result<Instruction> {
        instructions::create_profile(
            &self.program_id,
            &key_or(self.payer, signer),
            &key_or(self.authority, signer),
            &self.user,
            &self.label,
        )
    }

    /// Creates the profile and returns its address.
    pub async fn send(&self, connection: &impl SolConnection, signer: &dyn Signer) -> Result<Pubkey> {
        let ix = self.instruction(&signer.pubkey())?;
        let payer = or_signer(self.payer, signer);
        let authority = or_signer(self.authority, signer);
        submit(connection, ix, payer, &[authority]).await?;
        self.address()
    }
}

//=============================================================================
// CreatePost
//=============================================================================

pub struct CreatePostBuilder<'a> {
    program_id: Pubkey,
    user: Pubkey,
    profile: Pubkey,
    metadata_uri: String,
    random_hash: [u8; 32],
    session_token: Option<Pubkey>,
    payer: Option<&'a dyn Signer>,
    authority: Option<&'a dyn Signer>,
}

impl<'a> CreatePostBuilder<'a> {
    pub fn new(
        program_id: Pubkey,
        user: Pubkey,
        profile: Pubkey,
        metadata_uri: impl Into<String>,
    ) -> Self {
        Self {
            program_id,
            user,
            profile,
            metadata_uri: metadata_uri.into(),
            random_hash: fresh_hash(),
            session_token: None,
            payer: None,
            authority: None,
        }
    }

    pub fn with_random_hash(mut self, random_hash: [u8; 32]) -> Self {
        self.random_hash = random_hash;
        self
    }

    /// Act through a session token; the authority is then the session signer.
    pub fn with_session_token(mut self, session_token: Pubkey) -> Self {
        self.session_token = Some(session_token);
        self
    }

    pub fn with_payer(mut self, payer: &'a dyn Signer) -> Self {
        self.payer = Some(payer);
        self
    }

    pub fn with_authority(mut self, authority: &'a dyn Signer) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn address(&self) -> Result<Pubkey> {
        Ok(derive_post_pda(&self.program_id, &self.profile, &self.random_hash)?.0)
    }

    pub fn instruction(&self, signer: &Pubkey) -> Result<Instruction> {
        check_metadata_uri(&self.metadata_uri)?;
        instructions::create_post(
            &self.program_id,
            &key_or(self.payer, signer),
            &key_or(self.authority, signer),
            &self.user,
            &self.profile,
            self.session_token.as_ref(),
            &self.metadata_uri,
            self.random_hash,
        )
    }

    /// Publishes the post and returns its address.
    pub async fn send(&self, connection: &impl SolConnection, signer: &dyn Signer) -> Result<Pubkey> {
        let ix = self.instruction(&signer.pubkey())?;
        let payer = or_signer(self.payer, signer);
        let authority = or_signer(self.authority, signer);
        submit(connection, ix, payer, &[authority]).await?;
        self.address()
    }
}

fn check_metadata_uri(metadata_uri: &str) -> Result<()> {
    if metadata_uri.len() > MAX_METADATA_URI_LEN {
        return Err(SocialGraphError::MetadataUriTooLong.into());
    }
    Ok(())
}

//=============================================================================
// UpdatePost / DeletePost
//=============================================================================

pub struct UpdatePostBuilder<'a> {
    program_id: Pubkey,
    user: Pubkey,
    profile: Pubkey,
    post: Pubkey,
    metadata_uri: String,
    session_token: Option<Pubkey>,
    authority: Option<&'a dyn Signer>,
}

impl<'a> UpdatePostBuilder<'a> {
    pub fn new(
        program_id: Pubkey,
        user: Pubkey,
        profile: Pubkey,
        post: Pubkey,
        metadata_uri: impl Into<String>,
    ) -> Self {
        Self {
            program_id,
            user,
            profile,
            post,
            metadata_uri: metadata_uri.into(),
            session_token: None,
            authority: None,
        }
    }

    pub fn with_session_token(mut self, session_token: Pubkey) -> Self {
        self.session_token = Some(session_token);
        self
    }

    pub fn with_authority(mut self, authority: &'a dyn Signer) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn instruction(&self, signer: &Pubkey) -> Result<Instruction> {
        check_metadata_uri(&self.metadata_uri)?;
        instructions::update_post(
            &self.program_id,
            &key_or(self.authority, signer),
            &self.user,
            &self.profile,
            &self.post,
            self.session_token.as_ref(),
            &self.metadata_uri,
        )
    }

    pub async fn send(&self, connection: &impl SolConnection, signer: &dyn Signer) -> Result<Signature> {
        let ix = self.instruction(&signer.pubkey())?;
        let authority = or_signer(self.authority, signer);
        submit(connection, ix, signer, &[authority]).await
    }
}

pub struct DeletePostBuilder<'a> {
    program_id: Pubkey,
    user: Pubkey,
    profile: Pubkey,
    post: Pubkey,
    refund_receiver: Pubkey,
    session_token: Option<Pubkey>,
    authority: Option<&'a dyn Signer>,
}

impl<'a> DeletePostBuilder<'a> {
    pub fn new(
        program_id: Pubkey,
        user: Pubkey,
        profile: Pubkey,
        post: Pubkey,
        refund_receiver: Pubkey,
    ) -> Self {
        Self {
            program_id,
            user,
            profile,
            post,
            refund_receiver,
            session_token: None,
            authority: None,
        }
    }

    pub fn with_session_token(mut self, session_token: Pubkey) -> Self {
        self.session_token = Some(session_token);
        self
    }

    pub fn with_authority(mut self, authority: &'a dyn Signer) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn instruction(&self, signer: &Pubkey) -> Result<Instruction> {
        instructions::delete_post(
            &self.program_id,
            &key_or(self.authority, signer),
            &self.user,
            &self.profile,
            &self.post,
            self.session_token.as_ref(),
            &self.refund_receiver,
        )
    }

    pub async fn send(&self, connection: &impl SolConnection, signer: &dyn Signer) -> Result<Signature> {
        let ix = self.instruction(&signer.pubkey())?;
        let authority = or_signer(self.authority, signer);
        submit(connection, ix, signer, &[authority]).await
    }
}

//=============================================================================
// Sessions
//=============================================================================

pub struct CreateSessionBuilder<'a> {
    program_id: Pubkey,
    target_program: Pubkey,
    session_signer: &'a dyn Signer,
    ttl_seconds: Option<i64>,
    payer: Option<&'a dyn Signer>,
    authority: Option<&'a dyn Signer>,
}

impl<'a> CreateSessionBuilder<'a> {
    /// Targets this program unless told otherwise; lifetime defaults on-chain.
    pub fn new(program_id: Pubkey, session_signer: &'a dyn Signer) -> Self {
        Self {
            program_id,
            target_program: program_id,
            session_signer,
            ttl_seconds: None,
            payer: None,
            authority: None,
        }
    }

    pub fn with_target_program(mut self, target_program: Pubkey) -> Self {
        self.target_program = target_program;
        self
    }

    pub fn with_ttl(mut self, ttl_seconds: i64) -> Self {
        self.ttl_seconds = Some(ttl_seconds);
        self
    }

    pub fn with_payer(mut self, payer: &'a dyn Signer) -> Self {
        self.payer = Some(payer);
        self
    }

    pub fn with_authority(mut self, authority: &'a dyn Signer) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn address(&self) -> Result<Pubkey> {
        Ok(derive_session_token_pda(
            &self.program_id,
            &self.target_program,
            &self.session_signer.pubkey(),
        )?
        .0)
    }

    pub fn instruction(&self, signer: &Pubkey) -> Result<Instruction> {
        instructions::create_session(
            &self.program_id,
            &key_or(self.payer, signer),
            &key_or(self.authority, signer),
            &self.session_signer.pubkey(),
            &self.target_program,
            self.ttl_seconds,
        )
    }

    /// Issues the session and returns the token address.
    pub async fn send(&self, connection: &impl SolConnection, signer: &dyn Signer) -> Result<Pubkey> {
        let ix = self.instruction(&signer.pubkey())?;
        let payer = or_signer(self.payer, signer);
        let authority = or_signer(self.authority, signer);
        submit(connection, ix, payer, &[authority, self.session_signer]).await?;
        self.address()
    }
}

pub struct RevokeSessionBuilder<'a> {
    program_id: Pubkey,
    session_token: Pubkey,
    refund_receiver: Option<Pubkey>,
    authority: Option<&'a dyn Signer>,
}

impl<'a> RevokeSessionBuilder<'a> {
    pub fn new(program_id: Pubkey, session_token: Pubkey) -> Self {
        Self {
            program_id,
            session_token,
            refund_receiver: None,
            authority: None,
        }
    }

    pub fn with_refund_receiver(mut self, refund_receiver: Pubkey) -> Self {
        self.refund_receiver = Some(refund_receiver);
        self
    }

    /// Either the grantor or the session signer.
    pub fn with_authority(mut self, authority: &'a dyn Signer) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn instruction(&self, signer: &Pubkey) -> Result<Instruction> {
        instructions::revoke_session(
            &self.program_id,
            &self.session_token,
            &key_or(self.authority, signer),
            &self.refund_receiver.unwrap_or(*signer),
        )
    }

    pub async fn send(&self, connection: &impl SolConnection, signer: &dyn Signer) -> Result<Signature> {
        let ix = self.instruction(&signer.pubkey())?;
        let authority = or_signer(self.authority, signer);
        submit(connection, ix, signer, &[authority]).await
    }
}
