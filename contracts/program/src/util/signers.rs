use pinocchio::{account_info::AccountInfo, pubkey::Pubkey};
use socialgraph_state::SignerSet;

/// Signers of the current instruction, read from its account list.
pub struct TransactionSigners<'a>(pub &'a [AccountInfo]);

impl SignerSet for TransactionSigners<'_> {
    fn contains_signer(&self, key: &Pubkey) -> bool {
        self.0
            .iter()
            .any(|account| account.is_signer() && account.key() == key)
    }
}
