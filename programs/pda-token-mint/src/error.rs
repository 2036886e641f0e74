//! Custom Error Types
//!
//! Every failure of the PDA token mint program is reported as a distinct,
//! named error with a stable numeric code.
//!
//! # Error Code Ranges
//!
//! | Range | Category |
//! |-------|----------|
//! | 0 | Address derivation |
//! | 1-3 | Account lifecycle (exists / missing) |
//! | 4 | Authority |
//! | 5-7 | Instruction arguments |
//! | 8-11 | Account binding |
//!
//! # Usage
//!
//! ```ignore
//! use crate::error::PdaMintError;
//!
//! if amount == 0 {
//!     return Err(PdaMintError::InvalidAmount.into());
//! }
//! ```

use num_traits::FromPrimitive;
use solana_program::{
    decode_error::DecodeError,
    msg,
    program_error::{PrintProgramError, ProgramError},
};
use thiserror::Error;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by the PDA token mint program.
///
/// The code of a variant is its position in this enum.
/// Never reorder variants after deployment, only append.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PdaMintError {
    /// Error 0: No bump seed yields an off-curve address for these seeds.
    ///
    /// Fatal configuration error. Never retried with different seeds.
    #[error("Program address derivation failed")]
    DerivationFailed,

    /// Error 1: A create instruction targeted an account that already exists.
    ///
    /// Overwriting would allow the mint authority to be replaced,
    /// so re-creation is always rejected.
    #[error("Account already initialized")]
    AlreadyInitialized,

    /// Error 2: The mint has not been created yet.
    #[error("Mint not found")]
    MintNotFound,

    /// Error 3: The token account has not been created yet.
    #[error("Token account not found")]
    TokenAccountNotFound,

    /// Error 4: The re-derived mint authority does not match the mint.
    ///
    /// Signals a deployment inconsistency (wrong seed or program id).
    #[error("Derived authority does not match mint authority")]
    AuthorityMismatch,

    /// Error 5: Mint amount is zero or would overflow supply or balance.
    #[error("Invalid mint amount")]
    InvalidAmount,

    /// Error 6: Instruction data could not be parsed.
    #[error("Invalid instruction")]
    InvalidInstruction,

    /// Error 7: Decimals above `MAX_DECIMALS`.
    #[error("Invalid decimals")]
    InvalidDecimals,

    /// Error 8: An account key differs from its program-derived address.
    #[error("Account is not at the expected program address")]
    InvalidPdaAddress,

    /// Error 9: Token account and mint do not belong together.
    #[error("Mint mismatch")]
    MintMismatch,

    /// Error 10: The signer is not the owner of the token account.
    #[error("Owner mismatch")]
    OwnerMismatch,

    /// Error 11: The token program account is not the expected token program.
    #[error("Invalid token program")]
    InvalidTokenProgram,
}

// =============================================================================
// CONVERSION TO PROGRAMERROR
// =============================================================================

impl From<PdaMintError> for ProgramError {
    fn from(e: PdaMintError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

// =============================================================================
// DECODING
// =============================================================================

impl FromPrimitive for PdaMintError {
    fn from_i64(n: i64) -> Option<Self> {
        if n < 0 {
            return None;
        }
        Self::from_u64(n as u64)
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(match n {
            0 => PdaMintError::DerivationFailed,
            1 => PdaMintError::AlreadyInitialized,
            2 => PdaMintError::MintNotFound,
            3 => PdaMintError::TokenAccountNotFound,
            4 => PdaMintError::AuthorityMismatch,
            5 => PdaMintError::InvalidAmount,
            6 => PdaMintError::InvalidInstruction,
            7 => PdaMintError::InvalidDecimals,
            8 => PdaMintError::InvalidPdaAddress,
            9 => PdaMintError::MintMismatch,
            10 => PdaMintError::OwnerMismatch,
            11 => PdaMintError::InvalidTokenProgram,
            _ => return None,
        })
    }
}

impl<T> DecodeError<T> for PdaMintError {
    fn type_of() -> &'static str {
        "PdaMintError"
    }
}

impl PrintProgramError for PdaMintError {
    fn print<E>(&self)
    where
        E: 'static + std::error::Error + DecodeError<E> + PrintProgramError + FromPrimitive,
    {
        msg!("Error: {}", self);
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
