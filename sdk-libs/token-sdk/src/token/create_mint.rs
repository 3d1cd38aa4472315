use mintage_client::Rpc;
use solana_instruction::Instruction;
use solana_pubkey::Pubkey;
use solana_system_interface::instruction::create_account;
use solana_transaction::Transaction;
use tracing::debug;

use crate::{
    error::TokenSdkError,
    token::{
        extensions::MintExtensionSet, space::mint_account_rent, transaction::build_transaction,
    },
};

/// Composes the instruction sequence that creates and initializes a
/// Token-2022 mint with a declarative set of extensions.
///
/// The emitted order is fixed: account creation, fixed-size extension setup,
/// base mint initialization, then variable-length metadata writes. Fixed
/// extensions must be configured while the mint is still uninitialized;
/// metadata can only be written to an initialized mint.
///
/// # Example
///
/// ```rust,ignore
/// use mintage_token_sdk::token::{CreateMint, MintExtensionSet};
///
/// let instructions = CreateMint::new(6, authority, mint_signer, payer)
///     .with_extensions(MintExtensionSet::new().with_permanent_delegate(delegate))
///     .instructions(&rpc)
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct CreateMint {
    pub payer: Pubkey,
    pub mint_signer: Pubkey,
    pub decimals: u8,
    /// Freeze authority of the new mint. The mint authority is the payer
    /// until reassigned by a separate authority transfer.
    pub authority: Pubkey,
    pub extensions: MintExtensionSet,
}

impl CreateMint {
    pub fn new(decimals: u8, authority: Pubkey, mint_signer: Pubkey, payer: Pubkey) -> Self {
        Self {
            payer,
            mint_signer,
            decimals,
            authority,
            extensions: MintExtensionSet::new(),
        }
    }

    pub fn with_extensions(mut self, extensions: MintExtensionSet) -> Self {
        self.extensions = extensions;
        self
    }

    /// Builds the full ordered instruction list.
    ///
    /// One rent-quote read; a failed quote aborts before any instruction is
    /// built, so a partial list is never returned. Composition after the
    /// quote is pure.
    pub async fn instructions<R: Rpc>(&self, rpc: &R) -> Result<Vec<Instruction>, TokenSdkError> {
        let (space, lamports) = mint_account_rent(rpc, &self.extensions).await?;
        debug!(space, lamports, "composing mint initialization");

        let mut instructions = Vec::with_capacity(self.extensions.len() + 2);
        instructions.push(create_account(
            &self.payer,
            &self.mint_signer,
            lamports,
            space as u64,
            &spl_token_2022::id(),
        ));

        for extension in self.extensions.pre_init() {
            instructions.extend(extension.setup_instructions(&self.mint_signer, &self.payer)?);
        }

        instructions.push(spl_token_2022::instruction::initialize_mint2(
            &spl_token_2022::id(),
            &self.mint_signer,
            &self.payer,
            Some(&self.authority),
            self.decimals,
        )?);

        for extension in self.extensions.post_init() {
            instructions.extend(extension.setup_instructions(&self.mint_signer, &self.payer)?);
        }

        Ok(instructions)
    }

    /// Composes the instructions and wraps them into an unsigned transaction
    /// anchored to the latest blockhash. Two chain reads in total.
    pub async fn transaction<R: Rpc>(&self, rpc: &R) -> Result<Transaction, TokenSdkError> {
        let instructions = self.instructions(rpc).await?;
        build_transaction(rpc, &instructions, &self.payer).await
    }
}
