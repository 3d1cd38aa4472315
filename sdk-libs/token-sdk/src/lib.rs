//! # Mintage Token SDK
//!
//! Instruction composition for creating Token-2022 mints with extensions.
//!
//! A mint with extensions is created in four steps, all bundled into a single
//! transaction by [`token::CreateMint`]:
//!
//! 1. allocate the mint account with space for every fixed-size extension,
//! 2. configure each fixed-size extension on the uninitialized account,
//! 3. initialize the base mint,
//! 4. write variable-length metadata to the initialized mint.
//!
//! Fixed-size extensions must be laid out before base initialization because
//! the token program validates the account length against the extension set.
//! Rich metadata has no fixed size; it is written afterwards and the account
//! is grown by a later reallocation when its content outgrows the allocation.
//!
//! ## Common Operations
//!
//! | Operation | Builder |
//! |-----------|---------|
//! | Declare extensions | [`MintExtensionSet`](token::MintExtensionSet) |
//! | Compute allocation size and rent | [`mint_account_rent`](token::mint_account_rent) |
//! | Compose initialization instructions | [`CreateMint`](token::CreateMint) |
//! | Assemble an unsigned transaction | [`build_transaction`](token::build_transaction) |
//!
//! Signing and submission are out of scope; the composed [`solana_transaction::Transaction`]
//! is handed back unsigned.

pub mod error;
pub mod token;

pub use error::TokenSdkError;
