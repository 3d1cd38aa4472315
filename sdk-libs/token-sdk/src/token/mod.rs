//! High-level builders for mint creation.
//!
//! ## Extensions
//!
//! - [`MintExtensionSet`] - Declare the extensions a new mint carries
//! - [`MintExtension`] - One configured extension
//!
//! ## Space and rent
//!
//! - [`mint_account_space`] - Allocation size for a set of extensions
//! - [`mint_account_rent`] - Allocation size plus its rent-exempt balance
//!
//! ## Mint
//!
//! - [`CreateMint`] - Compose the create-and-initialize instruction sequence
//! - [`build_transaction`] - Wrap instructions into an unsigned transaction
//!
//! # Example: Create a mint with metadata
//!
//! ```rust,ignore
//! use mintage_token_sdk::token::{CreateMint, MintExtensionSet};
//!
//! let extensions = MintExtensionSet::new()
//!     .with_metadata(authority, mint_signer, "Foo", "FOO", "https://x", vec![]);
//! let transaction = CreateMint::new(6, authority, mint_signer, payer)
//!     .with_extensions(extensions)
//!     .transaction(&rpc)
//!     .await?;
//! ```

mod create_mint;
mod extensions;
mod space;
mod transaction;

pub use create_mint::CreateMint;
pub use extensions::{ExtensionPhase, MintExtension, MintExtensionSet};
pub use space::{mint_account_rent, mint_account_space};
pub use transaction::build_transaction;
