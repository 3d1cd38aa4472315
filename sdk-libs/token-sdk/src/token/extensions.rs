use solana_instruction::Instruction;
use solana_program_error::ProgramError;
use solana_pubkey::Pubkey;
use spl_pod::optional_keys::OptionalNonZeroPubkey;
use spl_token_2022::{
    extension::{
        confidential_transfer, default_account_state, metadata_pointer, pausable,
        scaled_ui_amount, ExtensionType,
    },
    instruction::initialize_permanent_delegate,
    state::AccountState,
};
use spl_token_metadata_interface::state::{Field, TokenMetadata};
use tracing::warn;

/// Where an extension's setup instruction runs relative to base mint
/// initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionPhase {
    /// Fixed size; allocated with the account and configured while the mint
    /// is still uninitialized.
    PreInit,
    /// Variable size; written after the base mint is initialized.
    PostInit,
}

/// One configured extension of a new Token-2022 mint.
///
/// Each variant carries everything needed to reserve its share of the mint
/// account and to produce its setup instruction(s).
#[derive(Debug, Clone, PartialEq)]
pub enum MintExtension {
    /// Points readers at the account holding the mint's metadata. Paired
    /// with [`MintExtension::Metadata`] when the metadata lives on the mint
    /// itself.
    MetadataPointer {
        authority: Pubkey,
        metadata_address: Pubkey,
    },
    /// Rich metadata written into the mint account after initialization.
    /// `additional_metadata` entries are emitted in order.
    Metadata {
        update_authority: Pubkey,
        name: String,
        symbol: String,
        uri: String,
        additional_metadata: Vec<(String, String)>,
    },
    /// A delegate with unconditional transfer and burn authority over every
    /// account of the mint.
    PermanentDelegate { delegate: Pubkey },
    /// Lets `authority` pause minting, transfers and burns. The extension
    /// always initializes unpaused; `paused` records the caller's declared
    /// initial state.
    Pausable { authority: Pubkey, paused: bool },
    /// Default state of newly created token accounts: initialized when
    /// `initialized` is set, frozen otherwise.
    DefaultAccountState { initialized: bool },
    /// Confidential balance support with `authority` approving accounts,
    /// optionally automatically.
    ConfidentialBalances {
        authority: Pubkey,
        auto_approve_new_accounts: bool,
    },
    /// UI amounts are displayed scaled by `multiplier`.
    ScaledUiAmount { authority: Pubkey, multiplier: f64 },
}

impl MintExtension {
    pub fn phase(&self) -> ExtensionPhase {
        match self {
            MintExtension::Metadata { .. } => ExtensionPhase::PostInit,
            _ => ExtensionPhase::PreInit,
        }
    }

    /// Extension type reserved in the allocated account, if any. Variable
    /// length extensions reserve nothing up front.
    pub(crate) fn allocated_extension_type(&self) -> Option<ExtensionType> {
        match self {
            MintExtension::MetadataPointer { .. } => Some(ExtensionType::MetadataPointer),
            MintExtension::Metadata { .. } => None,
            MintExtension::PermanentDelegate { .. } => Some(ExtensionType::PermanentDelegate),
            MintExtension::Pausable { .. } => Some(ExtensionType::Pausable),
            MintExtension::DefaultAccountState { .. } => Some(ExtensionType::DefaultAccountState),
            MintExtension::ConfidentialBalances { .. } => {
                Some(ExtensionType::ConfidentialTransferMint)
            }
            MintExtension::ScaledUiAmount { .. } => Some(ExtensionType::ScaledUiAmount),
        }
    }

    /// Encoded size of variable-length content, 0 for fixed extensions.
    pub(crate) fn variable_len(&self) -> Result<usize, ProgramError> {
        match self {
            MintExtension::Metadata {
                update_authority,
                name,
                symbol,
                uri,
                additional_metadata,
            } => TokenMetadata {
                update_authority: OptionalNonZeroPubkey::try_from(Some(*update_authority))?,
                mint: Pubkey::default(),
                name: name.clone(),
                symbol: symbol.clone(),
                uri: uri.clone(),
                additional_metadata: additional_metadata.clone(),
            }
            .tlv_size_of(),
            _ => Ok(0),
        }
    }

    /// Setup instruction(s) for this extension against `mint`.
    ///
    /// Fixed extensions produce exactly one instruction that must run before
    /// base initialization; metadata produces its initialize plus one field
    /// update per additional entry, all of which must run after it.
    pub(crate) fn setup_instructions(
        &self,
        mint: &Pubkey,
        mint_authority: &Pubkey,
    ) -> Result<Vec<Instruction>, ProgramError> {
        let token_program_id = spl_token_2022::id();
        match self {
            MintExtension::MetadataPointer {
                authority,
                metadata_address,
            } => Ok(vec![metadata_pointer::instruction::initialize(
                &token_program_id,
                mint,
                Some(*authority),
                Some(*metadata_address),
            )?]),
            MintExtension::Metadata {
                update_authority,
                name,
                symbol,
                uri,
                additional_metadata,
            } => {
                let mut instructions = vec![spl_token_metadata_interface::instruction::initialize(
                    &token_program_id,
                    mint,
                    update_authority,
                    mint,
                    mint_authority,
                    name.clone(),
                    symbol.clone(),
                    uri.clone(),
                )];
                for (key, value) in additional_metadata {
                    instructions.push(spl_token_metadata_interface::instruction::update_field(
                        &token_program_id,
                        mint,
                        update_authority,
                        Field::Key(key.clone()),
                        value.clone(),
                    ));
                }
                Ok(instructions)
            }
            MintExtension::PermanentDelegate { delegate } => Ok(vec![
                initialize_permanent_delegate(&token_program_id, mint, delegate)?,
            ]),
            MintExtension::Pausable { authority, paused } => {
                if *paused {
                    warn!("pausable mint initializes unpaused; pause it after initialization");
                }
                Ok(vec![pausable::instruction::initialize(
                    &token_program_id,
                    mint,
                    authority,
                )?])
            }
            MintExtension::DefaultAccountState { initialized } => {
                let state = if *initialized {
                    AccountState::Initialized
                } else {
                    AccountState::Frozen
                };
                Ok(vec![
                    default_account_state::instruction::initialize_default_account_state(
                        &token_program_id,
                        mint,
                        &state,
                    )?,
                ])
            }
            MintExtension::ConfidentialBalances {
                authority,
                auto_approve_new_accounts,
            } => Ok(vec![confidential_transfer::instruction::initialize_mint(
                &token_program_id,
                mint,
                Some(*authority),
                *auto_approve_new_accounts,
                None,
            )?]),
            MintExtension::ScaledUiAmount {
                authority,
                multiplier,
            } => Ok(vec![scaled_ui_amount::instruction::initialize(
                &token_program_id,
                mint,
                Some(*authority),
                *multiplier,
            )?]),
        }
    }
}

/// Ordered set of extension configurations for a new mint.
///
/// Builder methods append descriptors and return the owned set for chaining.
/// Insertion order is preserved and drives instruction order; duplicates and
/// conflicting combinations are neither deduplicated nor rejected, the token
/// program is the arbiter of validity.
///
/// ```rust
/// # use solana_pubkey::Pubkey;
/// use mintage_token_sdk::token::MintExtensionSet;
/// # let authority = Pubkey::new_unique();
/// # let delegate = Pubkey::new_unique();
///
/// let extensions = MintExtensionSet::new()
///     .with_permanent_delegate(delegate)
///     .with_pausable(authority, false);
/// assert_eq!(extensions.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MintExtensionSet {
    extensions: Vec<MintExtension>,
}

impl MintExtensionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rich on-mint metadata plus the pointer that locates it.
    ///
    /// Appends the fixed-size [`MintExtension::MetadataPointer`] followed by
    /// the variable-size [`MintExtension::Metadata`]. `metadata_address` is
    /// usually the mint itself; `authority` becomes both the pointer and the
    /// metadata update authority.
    pub fn with_metadata(
        mut self,
        authority: Pubkey,
        metadata_address: Pubkey,
        name: impl Into<String>,
        symbol: impl Into<String>,
        uri: impl Into<String>,
        additional_metadata: Vec<(String, String)>,
    ) -> Self {
        self.extensions.push(MintExtension::MetadataPointer {
            authority,
            metadata_address,
        });
        self.extensions.push(MintExtension::Metadata {
            update_authority: authority,
            name: name.into(),
            symbol: symbol.into(),
            uri: uri.into(),
            additional_metadata,
        });
        self
    }

    pub fn with_permanent_delegate(mut self, delegate: Pubkey) -> Self {
        self.extensions
            .push(MintExtension::PermanentDelegate { delegate });
        self
    }

    pub fn with_pausable(mut self, authority: Pubkey, paused: bool) -> Self {
        self.extensions
            .push(MintExtension::Pausable { authority, paused });
        self
    }

    pub fn with_default_account_state(mut self, initialized: bool) -> Self {
        self.extensions
            .push(MintExtension::DefaultAccountState { initialized });
        self
    }

    pub fn with_confidential_balances(
        mut self,
        authority: Pubkey,
        auto_approve_new_accounts: bool,
    ) -> Self {
        self.extensions.push(MintExtension::ConfidentialBalances {
            authority,
            auto_approve_new_accounts,
        });
        self
    }

    pub fn with_scaled_ui_amount(mut self, authority: Pubkey, multiplier: f64) -> Self {
        self.extensions.push(MintExtension::ScaledUiAmount {
            authority,
            multiplier,
        });
        self
    }

    /// Descriptors in insertion order.
    pub fn extensions(&self) -> &[MintExtension] {
        &self.extensions
    }

    pub fn into_extensions(self) -> Vec<MintExtension> {
        self.extensions
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub(crate) fn pre_init(&self) -> impl Iterator<Item = &MintExtension> {
        self.extensions
            .iter()
            .filter(|extension| extension.phase() == ExtensionPhase::PreInit)
    }

    pub(crate) fn post_init(&self) -> impl Iterator<Item = &MintExtension> {
        self.extensions
            .iter()
            .filter(|extension| extension.phase() == ExtensionPhase::PostInit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_metadata_appends_pointer_then_metadata() {
        let authority = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let set = MintExtensionSet::new().with_metadata(
            authority,
            mint,
            "Foo",
            "FOO",
            "https://x",
            vec![],
        );

        assert_eq!(set.len(), 2);
        assert_eq!(
            set.extensions()[0],
            MintExtension::MetadataPointer {
                authority,
                metadata_address: mint,
            }
        );
        assert!(matches!(
            &set.extensions()[1],
            MintExtension::Metadata { update_authority, name, .. }
                if *update_authority == authority && name == "Foo"
        ));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let authority = Pubkey::new_unique();
        let delegate = Pubkey::new_unique();
        let set = MintExtensionSet::new()
            .with_pausable(authority, false)
            .with_permanent_delegate(delegate)
            .with_default_account_state(true);

        assert!(matches!(
            set.extensions(),
            [
                MintExtension::Pausable { .. },
                MintExtension::PermanentDelegate { .. },
                MintExtension::DefaultAccountState { .. },
            ]
        ));
    }

    #[test]
    fn duplicates_are_kept() {
        let authority = Pubkey::new_unique();
        let set = MintExtensionSet::new()
            .with_pausable(authority, false)
            .with_pausable(authority, false);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn only_metadata_is_post_init() {
        let authority = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let set = MintExtensionSet::new()
            .with_metadata(authority, mint, "Foo", "FOO", "https://x", vec![])
            .with_permanent_delegate(authority)
            .with_confidential_balances(authority, true)
            .with_scaled_ui_amount(authority, 1.5);

        assert_eq!(set.pre_init().count(), 4);
        assert_eq!(set.post_init().count(), 1);
        assert!(set
            .post_init()
            .all(|extension| matches!(extension, MintExtension::Metadata { .. })));
    }

    #[test]
    fn metadata_variable_len_grows_with_content() {
        let authority = Pubkey::new_unique();
        let short = MintExtension::Metadata {
            update_authority: authority,
            name: "Foo".to_string(),
            symbol: "FOO".to_string(),
            uri: "https://x".to_string(),
            additional_metadata: vec![],
        };
        let long = MintExtension::Metadata {
            update_authority: authority,
            name: "Foo".to_string(),
            symbol: "FOO".to_string(),
            uri: "https://x".to_string(),
            additional_metadata: vec![("description".to_string(), "a token".to_string())],
        };

        let short_len = short.variable_len().unwrap();
        let long_len = long.variable_len().unwrap();
        assert!(short_len > 0);
        assert!(long_len > short_len);
    }

    #[test]
    fn fixed_extensions_have_no_variable_len() {
        let extension = MintExtension::PermanentDelegate {
            delegate: Pubkey::new_unique(),
        };
        assert_eq!(extension.variable_len().unwrap(), 0);
    }
}
