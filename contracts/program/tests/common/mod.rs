#![allow(dead_code)]

use litesvm::{types::TransactionResult, LiteSVM};
use socialgraph_program::instruction::SocialGraphInstruction;
use socialgraph_state::{post_address, profile_address, session_token_address, user_address};
use solana_sdk::{
    clock::Clock,
    instruction::{AccountMeta, Instruction, InstructionError},
    message::{v0, VersionedMessage},
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
    system_program,
    transaction::{TransactionError, VersionedTransaction},
};

pub struct TestContext {
    pub svm: LiteSVM,
    pub payer: Keypair,
    pub program_id: Pubkey,
}

pub fn setup_test() -> TestContext {
    let payer = Keypair::new();
    let mut svm = LiteSVM::new();

    svm.airdrop(&payer.pubkey(), 10_000_000_000)
        .expect("Failed to airdrop");

    let program_id = Pubkey::new_from_array(socialgraph_program::ID);
    let path = "../../target/deploy/socialgraph_program.so";
    svm.add_program_from_file(program_id, path)
        .expect("Failed to load program");

    TestContext {
        svm,
        payer,
        program_id,
    }
}

impl TestContext {
    pub fn funded_keypair(&mut self) -> Keypair {
        let keypair = Keypair::new();
        self.svm
            .airdrop(&keypair.pubkey(), 1_000_000_000)
            .expect("Failed to airdrop");
        keypair
    }

    /// Sends `ix` paid by the context payer, co-signed by `signers`.
    pub fn send(&mut self, ix: Instruction, signers: &[&Keypair]) -> TransactionResult {
        self.svm.expire_blockhash();
        let message = v0::Message::try_compile(
            &self.payer.pubkey(),
            &[ix],
            &[],
            self.svm.latest_blockhash(),
        )
        .unwrap();
        let mut all: Vec<&Keypair> = vec![&self.payer];
        all.extend(
            signers
                .iter()
                .copied()
                .filter(|k| k.pubkey() != self.payer.pubkey()),
        );
        let tx = VersionedTransaction::try_new(VersionedMessage::V0(message), &all).unwrap();
        self.svm.send_transaction(tx)
    }

    pub fn warp_to(&mut self, unix_timestamp: i64) {
        let mut clock = self.svm.get_sysvar::<Clock>();
        clock.unix_timestamp = unix_timestamp;
        self.svm.set_sysvar::<Clock>(&clock);
    }

    pub fn now(&self) -> i64 {
        self.svm.get_sysvar::<Clock>().unix_timestamp
    }

    pub fn lamports(&self, address: &Pubkey) -> u64 {
        self.svm.get_balance(address).unwrap_or(0)
    }

    pub fn data(&self, address: &Pubkey) -> Option<Vec<u8>> {
        self.svm
            .get_account(address)
            .filter(|account| account.lamports > 0)
            .map(|account| account.data)
    }

    pub fn create_user(&mut self, authority: &Keypair) -> TransactionResult {
        let hash = rand::random::<[u8; 32]>();
        self.create_user_with_hash(authority, hash)
    }

    pub fn create_user_with_hash(&mut self, authority: &Keypair, hash: [u8; 32]) -> TransactionResult {
        let ix = create_user_ix(&self.program_id, &self.payer.pubkey(), &authority.pubkey(), hash);
        self.send(ix, &[authority])
    }
}

fn pda(result: Result<([u8; 32], u8), socialgraph_state::SocialGraphError>) -> Pubkey {
    Pubkey::new_from_array(result.unwrap().0)
}

pub fn user_pda(program_id: &Pubkey, hash: &[u8; 32]) -> Pubkey {
    pda(user_address(hash, &program_id.to_bytes()))
}

pub fn profile_pda(program_id: &Pubkey, user: &Pubkey, label: &str) -> Pubkey {
    pda(profile_address(&user.to_bytes(), label, &program_id.to_bytes()))
}

pub fn post_pda(program_id: &Pubkey, profile: &Pubkey, hash: &[u8; 32]) -> Pubkey {
    pda(post_address(&profile.to_bytes(), hash, &program_id.to_bytes()))
}

pub fn session_pda(program_id: &Pubkey, target_program: &Pubkey, signer: &Pubkey) -> Pubkey {
    pda(session_token_address(
        &target_program.to_bytes(),
        &signer.to_bytes(),
        &program_id.to_bytes(),
    ))
}

fn ix(program_id: &Pubkey, accounts: Vec<AccountMeta>, data: SocialGraphInstruction) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts,
        data: borsh::to_vec(&data).unwrap(),
    }
}

pub fn create_user_ix(program_id: &Pubkey, payer: &Pubkey, authority: &Pubkey, hash: [u8; 32]) -> Instruction {
    ix(
        program_id,
        vec![
            AccountMeta::new(user_pda(program_id, &hash), false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        SocialGraphInstruction::CreateUser { random_hash: hash },
    )
}

pub fn create_profile_ix(
    program_id: &Pubkey,
    payer: &Pubkey,
    authority: &Pubkey,
    user: &Pubkey,
    label: &str,
) -> Instruction {
    ix(
        program_id,
        vec![
            AccountMeta::new(profile_pda(program_id, user, label), false),
            AccountMeta::new_readonly(*user, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        SocialGraphInstruction::CreateProfile {
            label: label.to_string(),
        },
    )
}

#[allow(clippy::too_many_arguments)]
pub fn create_post_ix(
    program_id: &Pubkey,
    payer: &Pubkey,
    authority: &Pubkey,
    user: &Pubkey,
    profile: &Pubkey,
    session: Option<&Pubkey>,
    metadata_uri: &str,
    hash: [u8; 32],
) -> Instruction {
    ix(
        program_id,
        vec![
            AccountMeta::new(post_pda(program_id, profile, &hash), false),
            AccountMeta::new_readonly(*profile, false),
            AccountMeta::new_readonly(*user, false),
            AccountMeta::new_readonly(*session.unwrap_or(program_id), false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        SocialGraphInstruction::CreatePost {
            metadata_uri: metadata_uri.to_string(),
            random_hash: hash,
        },
    )
}

pub fn update_post_ix(
    program_id: &Pubkey,
    authority: &Pubkey,
    user: &Pubkey,
    profile: &Pubkey,
    post: &Pubkey,
    session: Option<&Pubkey>,
    metadata_uri: &str,
) -> Instruction {
    ix(
        program_id,
        vec![
            AccountMeta::new(*post, false),
            AccountMeta::new_readonly(*profile, false),
            AccountMeta::new_readonly(*user, false),
            AccountMeta::new_readonly(*session.unwrap_or(program_id), false),
            AccountMeta::new_readonly(*authority, true),
        ],
        SocialGraphInstruction::UpdatePost {
            metadata_uri: metadata_uri.to_string(),
        },
    )
}

pub fn delete_post_ix(
    program_id: &Pubkey,
    authority: &Pubkey,
    user: &Pubkey,
    profile: &Pubkey,
    post: &Pubkey,
    session: Option<&Pubkey>,
    refund_receiver: &Pubkey,
) -> Instruction {
    ix(
        program_id,
        vec![
            AccountMeta::new(*post, false),
            AccountMeta::new_readonly(*profile, false),
            AccountMeta::new_readonly(*user, false),
            AccountMeta::new_readonly(*session.unwrap_or(program_id), false),
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*refund_receiver, false),
        ],
        SocialGraphInstruction::DeletePost,
    )
}

pub fn create_session_ix(
    program_id: &Pubkey,
    payer: &Pubkey,
    authority: &Pubkey,
    session_signer: &Pubkey,
    ttl_seconds: Option<i64>,
) -> Instruction {
    ix(
        program_id,
        vec![
            AccountMeta::new(session_pda(program_id, program_id, session_signer), false),
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new_readonly(*session_signer, true),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        SocialGraphInstruction::CreateSession {
            target_program: program_id.to_bytes(),
            ttl_seconds,
        },
    )
}

pub fn revoke_session_ix(
    program_id: &Pubkey,
    session: &Pubkey,
    authority: &Pubkey,
    refund_receiver: &Pubkey,
) -> Instruction {
    ix(
        program_id,
        vec![
            AccountMeta::new(*session, false),
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*refund_receiver, false),
        ],
        SocialGraphInstruction::RevokeSession,
    )
}

/// Asserts that the first instruction failed with the given program error code.
pub fn assert_custom_error(result: TransactionResult, code: u32) {
    let err = result.expect_err("transaction should fail").err;
    assert_eq!(
        err,
        TransactionError::InstructionError(0, InstructionError::Custom(code))
    );
}

/// A user with one "Personal" profile, owned by `authority`.
pub struct Graph {
    pub authority: Keypair,
    pub user: Pubkey,
    pub profile: Pubkey,
}

pub fn setup_graph(context: &mut TestContext) -> Graph {
    let authority = context.funded_keypair();
    let hash = rand::random::<[u8; 32]>();
    let user = user_pda(&context.program_id, &hash);
    context
        .create_user_with_hash(&authority, hash)
        .expect("CreateUser failed");

    let ix = create_profile_ix(
        &context.program_id,
        &context.payer.pubkey(),
        &authority.pubkey(),
        &user,
        "Personal",
    );
    context.send(ix, &[&authority]).expect("CreateProfile failed");
    let profile = profile_pda(&context.program_id, &user, "Personal");

    Graph {
        authority,
        user,
        profile,
    }
}
