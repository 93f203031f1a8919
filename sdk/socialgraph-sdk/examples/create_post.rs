// Example: publishing a post under a fresh user and profile
//
// Run against a local validator with the program deployed:
//   solana-test-validator --bpf-program SocGraph11111111111111111111111111111111111 \
//       target/deploy/socialgraph_program.so

use socialgraph_sdk::{RpcConnection, SocialGraph};
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let connection = RpcConnection::new("http://127.0.0.1:8899");
    let graph = SocialGraph::default();

    // Fund this keypair before running (e.g. `solana airdrop`)
    let owner = Keypair::new();
    println!("Owner: {}", owner.pubkey());

    let user = graph.create_user().send(&connection, &owner).await?;
    println!("User: {}", user);

    let profile = graph
        .create_profile(user, "Personal")
        .send(&connection, &owner)
        .await?;
    println!("Profile: {}", profile);

    // Let a throwaway key post on the owner's behalf for ten minutes
    let delegate = Keypair::new();
    let session = graph
        .create_session(&delegate)
        .with_ttl(600)
        .send(&connection, &owner)
        .await?;
    println!("Session: {}", session);

    let post = graph
        .create_post(user, profile, "ipfs://hello")
        .with_session_token(session)
        .with_authority(&delegate)
        .send(&connection, &owner)
        .await?;
    println!("Post: {}", post);

    let info = graph.fetch_post(&connection, &post).await?;
    println!("  metadata: {}", info.metadata_uri);

    graph
        .delete_post(user, profile, post, owner.pubkey())
        .send(&connection, &owner)
        .await?;
    graph.revoke_session(session).send(&connection, &owner).await?;

    Ok(())
}
