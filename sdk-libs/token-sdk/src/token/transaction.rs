use mintage_client::Rpc;
use solana_instruction::Instruction;
use solana_message::Message;
use solana_pubkey::Pubkey;
use solana_transaction::Transaction;

use crate::error::TokenSdkError;

/// Wraps composed instructions into an unsigned legacy transaction paid for
/// by `payer`.
///
/// One blockhash read anchors the transaction's lifetime; signing and
/// submission stay with the caller.
pub async fn build_transaction<R: Rpc>(
    rpc: &R,
    instructions: &[Instruction],
    payer: &Pubkey,
) -> Result<Transaction, TokenSdkError> {
    let recent_blockhash = rpc.get_latest_blockhash().await?;
    let message = Message::new_with_blockhash(instructions, Some(payer), &recent_blockhash);
    Ok(Transaction::new_unsigned(message))
}
