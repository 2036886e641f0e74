//! Mint State
//!
//! Read-only view of the program's mint, as stored by either token program.
//!
//! # What the Program Relies On
//!
//! 1. `mint_authority` is the mint PDA (checked before every mint)
//! 2. `freeze_authority` is absent
//! 3. `decimals` never changes after creation
//! 4. `supply` only grows, by exactly the minted amounts
//!
//! # Size: 82 bytes for both models (no extensions are enabled)

use crate::error::PdaMintError;
use crate::state::TokenModel;
use solana_program::{
    account_info::AccountInfo, program_error::ProgramError, program_pack::Pack, pubkey::Pubkey,
    system_program,
};
use spl_token_2022::extension::{ExtensionType, StateWithExtensions};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Decimals used by clients that do not pick their own.
pub const DEFAULT_DECIMALS: u8 = 6;

/// Largest accepted decimal precision.
pub const MAX_DECIMALS: u8 = 9;

// =============================================================================
// MINT VIEW
// =============================================================================

/// The fields of a mint this program cares about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MintState {
    /// Who may mint. For our mint: always `Some(mint PDA)`.
    pub mint_authority: Option<Pubkey>,

    /// Total base units in existence.
    pub supply: u64,

    /// Display precision, fixed at creation.
    pub decimals: u8,

    /// Who may freeze accounts. For our mint: always `None`.
    pub freeze_authority: Option<Pubkey>,
}

impl MintState {
    /// Decode an initialized mint from raw account data of either model.
    ///
    /// Uninitialized data is reported as `MintNotFound`.
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        let mint = match StateWithExtensions::<spl_token_2022::state::Mint>::unpack(data) {
            Ok(mint) => mint.base,
            Err(ProgramError::UninitializedAccount) => {
                return Err(PdaMintError::MintNotFound.into())
            }
            Err(e) => return Err(e),
        };

        Ok(MintState {
            mint_authority: mint.mint_authority.into(),
            supply: mint.supply,
            decimals: mint.decimals,
            freeze_authority: mint.freeze_authority.into(),
        })
    }
}

// =============================================================================
// ACCOUNT HELPERS
// =============================================================================

/// Space to allocate for a mint of `model`.
pub fn mint_len(model: TokenModel) -> Result<usize, ProgramError> {
    match model {
        TokenModel::Legacy => Ok(spl_token::state::Mint::LEN),
        TokenModel::Extended => {
            ExtensionType::try_calculate_account_len::<spl_token_2022::state::Mint>(&[])
        }
    }
}

/// Read the mint held in `mint_info`, together with the model that owns it.
///
/// Fails with `MintNotFound` while the account is still a bare system
/// account, and with `InvalidTokenProgram` if a non-token program owns it.
pub fn read_mint(mint_info: &AccountInfo) -> Result<(TokenModel, MintState), ProgramError> {
    if mint_info.owner == &system_program::id() || mint_info.data_is_empty() {
        return Err(PdaMintError::MintNotFound.into());
    }

    let model = TokenModel::from_program_id(mint_info.owner)?;
    let mint = MintState::unpack(&mint_info.try_borrow_data()?)?;

    Ok((model, mint))
}

// =============================================================================
// UNIT TESTS
// =============================================================================
