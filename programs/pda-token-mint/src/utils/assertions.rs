//! Assertion Helper Functions
//!
//! Common validation checks used by every processor.
//!
//! # Usage Pattern
//!
//! ```ignore
//! pub fn process(...) -> ProgramResult {
//!     // Validate everything first
//!     assert_signer(payer_info)?;
//!     assert_writable(mint_info)?;
//!     assert_uninitialized(mint_info)?;
//!
//!     // Then do the actual work
//!     ...
//! }
//! ```

use crate::error::PdaMintError;
use crate::state::TokenModel;
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program_error::ProgramError,
    system_program,
};

// =============================================================================
// SIGNER CHECKS
// =============================================================================

pub fn assert_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer {
        Err(ProgramError::MissingRequiredSignature)
    } else {
        Ok(())
    }
}

// =============================================================================
// WRITABLE CHECKS
// =============================================================================

pub fn assert_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable {
        Err(ProgramError::InvalidAccountData)
    } else {
        Ok(())
    }
}

// =============================================================================
// LIFECYCLE CHECKS
// =============================================================================

/// The account must still be a bare system account with no data.
///
/// A system account holding lamports is accepted: anyone can fund an
/// address, and that must not block creation.
pub fn assert_uninitialized(account: &AccountInfo) -> ProgramResult {
    if account.owner != &system_program::id() || !account.data_is_empty() {
        Err(PdaMintError::AlreadyInitialized.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// PROGRAM CHECKS
// =============================================================================

pub fn assert_system_program(account: &AccountInfo) -> ProgramResult {
    if account.key != &system_program::id() {
        Err(ProgramError::IncorrectProgramId)
    } else {
        Ok(())
    }
}

/// The supplied token program must be exactly the one implementing `model`.
pub fn assert_token_program(account: &AccountInfo, model: TokenModel) -> ProgramResult {
    if account.key != &model.program_id() {
        Err(PdaMintError::InvalidTokenProgram.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// CHECKED ARITHMETIC
// =============================================================================

pub fn checked_add(a: u64, b: u64) -> Result<u64, ProgramError> {
    a.checked_add(b)
        .ok_or_else(|| PdaMintError::InvalidAmount.into())
}

// =============================================================================
// UNIT TESTS
// =============================================================================
