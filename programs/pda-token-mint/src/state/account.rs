//! Token Account State
//!
//! Read-only view of the program-wide token account.
//!
//! The account sits at the `b"token"` PDA but its *owner field* is a wallet:
//! the wallet that created it, or the owner named at creation. The PDA only
//! fixes where the account lives, not who owns the balance.
//!
//! # Size: 165 bytes for both models (no extensions are enabled)

use crate::error::PdaMintError;
use crate::state::TokenModel;
use solana_program::{
    account_info::AccountInfo, program_error::ProgramError, program_pack::Pack, pubkey::Pubkey,
    system_program,
};
use spl_token_2022::extension::{ExtensionType, StateWithExtensions};

// =============================================================================
// TOKEN ACCOUNT VIEW
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenAccountState {
    /// The mint this account holds. Immutable once set.
    pub mint: Pubkey,

    /// Wallet that owns the balance and may trigger minting.
    pub owner: Pubkey,

    /// Balance in base units. Only grows in this program.
    pub amount: u64,
}

impl TokenAccountState {
    /// Decode an initialized token account from raw data of either model.
    ///
    /// Uninitialized data is reported as `TokenAccountNotFound`.
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        let account = match StateWithExtensions::<spl_token_2022::state::Account>::unpack(data) {
            Ok(account) => account.base,
            Err(ProgramError::UninitializedAccount) => {
                return Err(PdaMintError::TokenAccountNotFound.into())
            }
            Err(e) => return Err(e),
        };

        Ok(TokenAccountState {
            mint: account.mint,
            owner: account.owner,
            amount: account.amount,
        })
    }
}

// =============================================================================
// ACCOUNT HELPERS
// =============================================================================

/// Space to allocate for a token account of `model`.
pub fn token_account_len(model: TokenModel) -> Result<usize, ProgramError> {
    match model {
        TokenModel::Legacy => Ok(spl_token::state::Account::LEN),
        TokenModel::Extended => {
            ExtensionType::try_calculate_account_len::<spl_token_2022::state::Account>(&[])
        }
    }
}

/// Read the token account held in `account_info`, with its owning model.
pub fn read_token_account(
    account_info: &AccountInfo,
) -> Result<(TokenModel, TokenAccountState), ProgramError> {
    if account_info.owner == &system_program::id() || account_info.data_is_empty() {
        return Err(PdaMintError::TokenAccountNotFound.into());
    }

    let model = TokenModel::from_program_id(account_info.owner)?;
    let account = TokenAccountState::unpack(&account_info.try_borrow_data()?)?;

    Ok((model, account))
}

// =============================================================================
// UNIT TESTS
// =============================================================================
