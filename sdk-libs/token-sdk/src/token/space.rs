use mintage_client::Rpc;
use spl_token_2022::{extension::ExtensionType, state::Mint};
use tracing::debug;

use crate::{error::TokenSdkError, token::extensions::MintExtensionSet};

/// Byte size to allocate for a mint account carrying `extensions`.
///
/// Covers the base mint plus every fixed-size extension. Variable-length
/// metadata contributes nothing here: its size is only known from caller
/// content, and the account is grown for it after initialization.
pub fn mint_account_space(extensions: &MintExtensionSet) -> Result<usize, TokenSdkError> {
    let allocated: Vec<ExtensionType> = extensions
        .pre_init()
        .filter_map(|extension| extension.allocated_extension_type())
        .collect();
    let space = ExtensionType::try_calculate_account_len::<Mint>(&allocated)
        .map_err(|_| TokenSdkError::Configuration("mint account size overflow".to_string()))?;

    // Size the account will reach once variable-length extensions are
    // written. Allocation and the rent quote deliberately ignore it; a later
    // reallocation grows the account.
    let projected = extensions
        .post_init()
        .try_fold(space, |acc, extension| {
            extension.variable_len().map(|len| acc.saturating_add(len))
        })
        .map_err(|_| TokenSdkError::Configuration("metadata size overflow".to_string()))?;
    debug!("mint account space: {} allocated, {} projected", space, projected);

    Ok(space)
}

/// Allocation size and the lamport balance that keeps it rent exempt.
///
/// One chain read; a failed quote surfaces as
/// [`TokenSdkError::QuoteUnavailable`] and is not retried here.
pub async fn mint_account_rent<R: Rpc>(
    rpc: &R,
    extensions: &MintExtensionSet,
) -> Result<(usize, u64), TokenSdkError> {
    let space = mint_account_space(extensions)?;
    let lamports = rpc.get_minimum_balance_for_rent_exemption(space).await?;
    Ok((space, lamports))
}

#[cfg(test)]
mod tests {
    use solana_pubkey::Pubkey;

    use super::*;

    #[test]
    fn empty_set_allocates_base_mint_len() {
        let space = mint_account_space(&MintExtensionSet::new()).unwrap();
        let base = ExtensionType::try_calculate_account_len::<Mint>(&[]).unwrap();
        assert_eq!(space, base);
    }

    #[test]
    fn fixed_extensions_match_token_program_layout() {
        let authority = Pubkey::new_unique();
        let set = MintExtensionSet::new()
            .with_permanent_delegate(authority)
            .with_pausable(authority, false)
            .with_default_account_state(true);

        let expected = ExtensionType::try_calculate_account_len::<Mint>(&[
            ExtensionType::PermanentDelegate,
            ExtensionType::Pausable,
            ExtensionType::DefaultAccountState,
        ])
        .unwrap();
        assert_eq!(mint_account_space(&set).unwrap(), expected);
    }

    #[test]
    fn metadata_contributes_nothing_to_allocation() {
        let authority = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let without_metadata = MintExtensionSet::new().with_permanent_delegate(authority);
        let with_metadata = MintExtensionSet::new()
            .with_permanent_delegate(authority)
            .with_metadata(
                authority,
                mint,
                "Foo",
                "FOO",
                "https://x",
                vec![("description".to_string(), "a".repeat(512))],
            );

        let pointer_only = ExtensionType::try_calculate_account_len::<Mint>(&[
            ExtensionType::PermanentDelegate,
            ExtensionType::MetadataPointer,
        ])
        .unwrap();
        assert_eq!(mint_account_space(&with_metadata).unwrap(), pointer_only);
        assert!(
            mint_account_space(&with_metadata).unwrap()
                > mint_account_space(&without_metadata).unwrap()
        );
    }
}
