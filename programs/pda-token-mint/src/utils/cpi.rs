//! Program Address Account Creation
//!
//! Creating an account at a PDA needs the PDA's "signature", which only the
//! program can supply through `invoke_signed`.
//!
//! Two paths:
//!
//! ```text
//! PDA has 0 lamports:
//!   create_account(payer -> pda, rent, space, owner)      [signed by pda]
//!
//! PDA was funded by someone beforehand:
//!   transfer(payer -> pda, missing rent)                  [signed by payer]
//!   allocate(pda, space)                                  [signed by pda]
//!   assign(pda, owner)                                    [signed by pda]
//! ```
//!
//! `create_account` refuses an address that already holds lamports, so the
//! second path keeps a pre-funded PDA from blocking creation forever.

use crate::pda::DerivedAuthority;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    program::{invoke, invoke_signed},
    pubkey::Pubkey,
    rent::Rent,
    system_instruction,
    sysvar::Sysvar,
};

/// Create the account at `pda` with `space` bytes, owned by `owner`.
///
/// The payer covers rent exemption. `pda_info` must be `authority`'s address.
pub fn create_pda_account<'a>(
    payer_info: &AccountInfo<'a>,
    pda_info: &AccountInfo<'a>,
    system_program_info: &AccountInfo<'a>,
    authority: &DerivedAuthority,
    space: usize,
    owner: &Pubkey,
) -> ProgramResult {
    authority.expect_address(pda_info.key)?;

    let rent = Rent::get()?;
    let required_lamports = rent.minimum_balance(space);
    let seeds = authority.signer_seeds();

    if pda_info.lamports() == 0 {
        invoke_signed(
            &system_instruction::create_account(
                payer_info.key,
                pda_info.key,
                required_lamports,
                space as u64,
                owner,
            ),
            &[
                payer_info.clone(),
                pda_info.clone(),
                system_program_info.clone(),
            ],
            &[&seeds[..]],
        )?;
        return Ok(());
    }

    // Pre-funded address: top up, then allocate and assign under PDA seeds
    let missing_lamports = required_lamports.saturating_sub(pda_info.lamports());
    if missing_lamports > 0 {
        invoke(
            &system_instruction::transfer(payer_info.key, pda_info.key, missing_lamports),
            &[
                payer_info.clone(),
                pda_info.clone(),
                system_program_info.clone(),
            ],
        )?;
    }

    invoke_signed(
        &system_instruction::allocate(pda_info.key, space as u64),
        &[pda_info.clone(), system_program_info.clone()],
        &[&seeds[..]],
    )?;

    invoke_signed(
        &system_instruction::assign(pda_info.key, owner),
        &[pda_info.clone(), system_program_info.clone()],
        &[&seeds[..]],
    )
}
