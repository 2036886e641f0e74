//! Program-Derived Addresses
//!
//! The mint and the token account live at addresses computed from a fixed
//! seed and this program's id. Nobody holds a private key for them; the
//! program proves control by recomputing the derivation and handing the
//! seeds to the runtime through `invoke_signed`.
//!
//! | Account | Seeds |
//! |---------|-------|
//! | Mint (also the mint authority) | `[b"mint"]` |
//! | Token account | `[b"token"]` |

use crate::error::PdaMintError;
use solana_program::pubkey::Pubkey;

// =============================================================================
// SEEDS
// =============================================================================

/// Seed of the mint account. The mint is its own mint authority.
pub const MINT_SEED: &[u8] = b"mint";

/// Seed of the program-wide token account.
pub const TOKEN_ACCOUNT_SEED: &[u8] = b"token";

// =============================================================================
// DERIVATION
// =============================================================================

/// Derive the program address and bump for `seeds`.
///
/// Deterministic: the same seeds and program id always give the same result.
/// Fails with `DerivationFailed` when no bump produces an off-curve address.
pub fn derive_address(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8), PdaMintError> {
    Pubkey::try_find_program_address(seeds, program_id).ok_or(PdaMintError::DerivationFailed)
}

/// Address and bump of the mint account.
pub fn find_mint_address(program_id: &Pubkey) -> Result<(Pubkey, u8), PdaMintError> {
    derive_address(&[MINT_SEED], program_id)
}

/// Address and bump of the token account.
pub fn find_token_account_address(program_id: &Pubkey) -> Result<(Pubkey, u8), PdaMintError> {
    derive_address(&[TOKEN_ACCOUNT_SEED], program_id)
}

// =============================================================================
// DERIVED AUTHORITY
// =============================================================================

/// The capability "this program, acting under `seed`, may sign".
///
/// Only constructed by [`DerivedAuthority::derive`], so every instance was
/// recomputed from its seed during the current instruction. Nothing about it
/// is ever written to account data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivedAuthority {
    seed: &'static [u8],
    address: Pubkey,
    bump: [u8; 1],
}

impl DerivedAuthority {
    /// Re-derive the authority for a single static seed.
    pub fn derive(seed: &'static [u8], program_id: &Pubkey) -> Result<Self, PdaMintError> {
        let (address, bump) = derive_address(&[seed], program_id)?;
        Ok(Self {
            seed,
            address,
            bump: [bump],
        })
    }

    /// Authority of the mint: the mint PDA itself.
    pub fn mint(program_id: &Pubkey) -> Result<Self, PdaMintError> {
        Self::derive(MINT_SEED, program_id)
    }

    /// Signing capability of the token account PDA (used once, to create it).
    pub fn token_account(program_id: &Pubkey) -> Result<Self, PdaMintError> {
        Self::derive(TOKEN_ACCOUNT_SEED, program_id)
    }

    pub fn address(&self) -> &Pubkey {
        &self.address
    }

    pub fn bump(&self) -> u8 {
        self.bump[0]
    }

    /// Seeds to pass to `invoke_signed`: `[seed, [bump]]`.
    pub fn signer_seeds(&self) -> [&[u8]; 2] {
        [self.seed, &self.bump]
    }

    /// Fail with `InvalidPdaAddress` unless `key` is this authority's address.
    pub fn expect_address(&self, key: &Pubkey) -> Result<(), PdaMintError> {
        if key != &self.address {
            return Err(PdaMintError::InvalidPdaAddress);
        }
        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_deterministic() {
        let program_id = Pubkey::new_unique();

        let first = find_mint_address(&program_id).unwrap();
        for _ in 0..8 {
            assert_eq!(find_mint_address(&program_id).unwrap(), first);
        }
    }

    #[test]
    fn test_mint_and_token_addresses_differ() {
        let program_id = Pubkey::new_unique();

        let (mint, _) = find_mint_address(&program_id).unwrap();
        let (token, _) = find_token_account_address(&program_id).unwrap();

        assert_ne!(mint, token);
    }

    #[test]
    fn test_addresses_depend_on_program_id() {
        let (a, _) = find_mint_address(&Pubkey::new_unique()).unwrap();
        let (b, _) = find_mint_address(&Pubkey::new_unique()).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_derived_address_is_off_curve() {
        let program_id = Pubkey::new_unique();
        let (mint, _) = find_mint_address(&program_id).unwrap();

        assert!(!mint.is_on_curve());
    }

    #[test]
    fn test_signer_seeds_recreate_address() {
        let program_id = Pubkey::new_unique();
        let authority = DerivedAuthority::mint(&program_id).unwrap();

        let recreated =
            Pubkey::create_program_address(&authority.signer_seeds(), &program_id).unwrap();

        assert_eq!(&recreated, authority.address());
        assert_eq!(authority.signer_seeds()[0], MINT_SEED);
        assert_eq!(authority.signer_seeds()[1], &[authority.bump()]);
    }

    #[test]
    fn test_authority_matches_find_mint_address() {
        let program_id = Pubkey::new_unique();
        let (mint, bump) = find_mint_address(&program_id).unwrap();
        let authority = DerivedAuthority::mint(&program_id).unwrap();

        assert_eq!(authority.address(), &mint);
        assert_eq!(authority.bump(), bump);
    }

    #[test]
    fn test_expect_address() {
        let program_id = Pubkey::new_unique();
        let authority = DerivedAuthority::token_account(&program_id).unwrap();
        let (mint, _) = find_mint_address(&program_id).unwrap();

        assert!(authority.expect_address(authority.address()).is_ok());
        assert_eq!(
            authority.expect_address(&mint),
            Err(PdaMintError::InvalidPdaAddress)
        );
    }
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

WHAT IS A PROGRAM-DERIVED ADDRESS?
==================================

A normal address is an ed25519 public key: a point on the curve, with a
private key somewhere that can sign for it.

A PDA is a hash that is deliberately NOT on the curve:

    address = sha256(seeds || [bump] || program_id || "ProgramDerivedAddress")

No point means no private key. Nobody can sign for it with a keypair.

THE BUMP
========

About half of all hashes land on the curve. find_program_address tries
bump = 255, 254, ... 0 and returns the first off-curve result. That first
hit is the "canonical" bump. try_find_program_address returns None if all
256 tries land on the curve, which is what DerivationFailed reports.

HOW THE PROGRAM "SIGNS"
=======================

    invoke_signed(&ix, &accounts, &[&[b"mint", &[bump]]])

The runtime recomputes create_program_address(seeds, calling_program_id).
If the result equals an account in `ix`, that account is treated as a
signer for this CPI. Only the program whose id went into the hash can do
this, so the seeds act as the program's signature.

WHY RE-DERIVE EVERY TIME
========================

    Instruction N:   derive -> (address, bump) -> use -> drop
    Instruction N+1: derive -> (address, bump) -> use -> drop

The derivation is a pure function of constants. Nothing is stored, so
there is nothing that can go stale or be overwritten by an attacker.
*/
