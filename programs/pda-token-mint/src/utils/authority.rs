//! Authority Validation Utilities
//!
//! Two kinds of authority meet in `MintTokens`:
//!
//! 1. **Derived authority**: the mint PDA. It never signs a transaction; the
//!    program re-derives it and the runtime accepts its seeds as a signature.
//! 2. **Wallet owner**: the owner recorded in the token account. It must be
//!    a real signer of the transaction.
//!
//! # Example Usage
//!
//! ```ignore
//! let authority = DerivedAuthority::mint(program_id)?;
//! validate_mint_authority(&mint, &authority)?;
//! validate_owner(&token_account, owner_info)?;
//! ```

use crate::error::PdaMintError;
use crate::pda::DerivedAuthority;
use crate::state::{MintState, TokenAccountState};
use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult};

// =============================================================================
// DERIVED AUTHORITY VALIDATION
// =============================================================================

/// The mint must name the freshly re-derived PDA as its only mint authority.
///
/// A mismatch means the seed or the program id differs from the one used at
/// creation. It is reported as `AuthorityMismatch` and must not be retried.
pub fn validate_mint_authority(mint: &MintState, authority: &DerivedAuthority) -> ProgramResult {
    match mint.mint_authority {
        Some(stored) if &stored == authority.address() => Ok(()),
        _ => Err(PdaMintError::AuthorityMismatch.into()),
    }
}

// =============================================================================
// OWNER VALIDATION
// =============================================================================

pub fn validate_owner(account: &TokenAccountState, owner_info: &AccountInfo) -> ProgramResult {
    // CHECK 1: Key matches the recorded owner
    if owner_info.key != &account.owner {
        return Err(PdaMintError::OwnerMismatch.into());
    }

    // CHECK 2: Owner has signed the transaction
    crate::utils::assert_signer(owner_info)
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use solana_program::{program_error::ProgramError, pubkey::Pubkey};

    #[test]
    fn test_mint_authority_matches() {
        let program_id = Pubkey::new_unique();
        let authority = DerivedAuthority::mint(&program_id).unwrap();
        let mint = MintState {
            mint_authority: Some(*authority.address()),
            ..MintState::default()
        };

        assert!(validate_mint_authority(&mint, &authority).is_ok());
    }

    #[test]
    fn test_mint_authority_from_other_program_rejected() {
        let authority = DerivedAuthority::mint(&Pubkey::new_unique()).unwrap();
        let foreign = DerivedAuthority::mint(&Pubkey::new_unique()).unwrap();
        let mint = MintState {
            mint_authority: Some(*foreign.address()),
            ..MintState::default()
        };

        assert_eq!(
            validate_mint_authority(&mint, &authority),
            Err(PdaMintError::AuthorityMismatch.into())
        );
    }

    #[test]
    fn test_missing_mint_authority_rejected() {
        let authority = DerivedAuthority::mint(&Pubkey::new_unique()).unwrap();

        assert_eq!(
            validate_mint_authority(&MintState::default(), &authority),
            Err(PdaMintError::AuthorityMismatch.into())
        );
    }

    #[test]
    fn test_owner_must_match_and_sign() {
        let owner = Pubkey::new_unique();
        let system = Pubkey::default();
        let account = TokenAccountState {
            owner,
            ..TokenAccountState::default()
        };

        let mut lamports = 0;
        let mut data: Vec<u8> = vec![];
        let signed = AccountInfo::new(&owner, true, false, &mut lamports, &mut data, &system, false, 0);
        assert!(validate_owner(&account, &signed).is_ok());

        let mut lamports = 0;
        let mut data: Vec<u8> = vec![];
        let unsigned = AccountInfo::new(&owner, false, false, &mut lamports, &mut data, &system, false, 0);
        assert_eq!(
            validate_owner(&account, &unsigned),
            Err(ProgramError::MissingRequiredSignature)
        );

        let stranger = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data: Vec<u8> = vec![];
        let other = AccountInfo::new(&stranger, true, false, &mut lamports, &mut data, &system, false, 0);
        assert_eq!(
            validate_owner(&account, &other),
            Err(PdaMintError::OwnerMismatch.into())
        );
    }
}
