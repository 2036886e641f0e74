//! Token State Views
//!
//! This program stores no data of its own. The two accounts it controls are
//! owned by a token program, so this module only knows how to:
//! - pick the token program for a [`TokenModel`]
//! - size new accounts for that model
//! - read the mint and token account back, whichever model owns them
//!
//! # Token Models
//!
//! | Model | Program | Mint size | Account size |
//! |-------|---------|-----------|--------------|
//! | Legacy | SPL Token | 82 bytes | 165 bytes |
//! | Extended | Token-2022 | 82 bytes (no extensions) | 165 bytes (no extensions) |
//!
//! Both models share the base layouts, so one decoder
//! (`StateWithExtensions`) reads accounts of either program.

// =============================================================================
// SUBMODULES
// =============================================================================

pub mod account;
pub mod mint;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use account::{read_token_account, token_account_len, TokenAccountState};
pub use mint::{mint_len, read_mint, MintState, DEFAULT_DECIMALS, MAX_DECIMALS};

use crate::error::PdaMintError;
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// TOKEN MODEL
// =============================================================================

/// Which token program keeps the books for the mint.
///
/// Selected by the caller of `CreateMint`; later instructions follow the
/// program that owns the mint account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenModel {
    /// The original SPL Token program.
    #[default]
    Legacy,

    /// Token-2022, the extension-capable token program.
    Extended,
}

impl TokenModel {
    pub fn from_u8(value: u8) -> Result<Self, ProgramError> {
        match value {
            0 => Ok(TokenModel::Legacy),
            1 => Ok(TokenModel::Extended),
            _ => Err(PdaMintError::InvalidInstruction.into()),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            TokenModel::Legacy => 0,
            TokenModel::Extended => 1,
        }
    }

    /// Program id of the token program implementing this model.
    pub fn program_id(self) -> Pubkey {
        match self {
            TokenModel::Legacy => spl_token::id(),
            TokenModel::Extended => spl_token_2022::id(),
        }
    }

    /// Model implemented by `program_id`, if it is a known token program.
    pub fn from_program_id(program_id: &Pubkey) -> Result<Self, ProgramError> {
        if program_id == &spl_token::id() {
            Ok(TokenModel::Legacy)
        } else if program_id == &spl_token_2022::id() {
            Ok(TokenModel::Extended)
        } else {
            Err(PdaMintError::InvalidTokenProgram.into())
        }
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
