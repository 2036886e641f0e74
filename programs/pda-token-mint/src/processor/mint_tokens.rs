//! MintTokens Instruction Processor
//!
//! Mints new tokens into the program-wide token account.
//!
//! No key signs for the mint authority. The processor re-derives the mint
//! PDA from `b"mint"`, checks it is the authority recorded in the mint, and
//! passes `[b"mint", [bump]]` to `invoke_signed` as the signature.

use crate::error::PdaMintError;
use crate::pda::DerivedAuthority;
use crate::state::{read_mint, read_token_account};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::invoke_signed,
    pubkey::Pubkey,
};

/// Process MintTokens instruction
///
/// Accounts expected:
/// 0. `[signer]` Token account owner
/// 1. `[writable]` Mint PDA
/// 2. `[writable]` Token account PDA
/// 3. `[]` Token program owning the mint
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Owner
    let owner_info = next_account_info(account_info_iter)?;

    // Account 1: Mint PDA
    let mint_info = next_account_info(account_info_iter)?;

    // Account 2: Token account PDA
    let token_account_info = next_account_info(account_info_iter)?;

    // Account 3: Token program
    let token_program_info = next_account_info(account_info_iter)?;

    // Minting nothing is rejected, not ignored
    if amount == 0 {
        return Err(PdaMintError::InvalidAmount.into());
    }

    assert_writable(mint_info)?;
    assert_writable(token_account_info)?;

    // Re-derive the signing authority; it is never read from storage
    let authority = DerivedAuthority::mint(program_id)?;
    authority.expect_address(mint_info.key)?;

    // Load and validate mint
    let (token_model, mint) = read_mint(mint_info)?;
    assert_token_program(token_program_info, token_model)?;
    validate_mint_authority(&mint, &authority)?;

    // Load and validate token account
    DerivedAuthority::token_account(program_id)?.expect_address(token_account_info.key)?;
    let (account_model, token_account) = read_token_account(token_account_info)?;
    if account_model != token_model || token_account.mint != *mint_info.key {
        return Err(PdaMintError::MintMismatch.into());
    }
    validate_owner(&token_account, owner_info)?;

    // Reject overflow up front so the failure carries our own error code
    checked_add(mint.supply, amount)?;
    checked_add(token_account.amount, amount)?;

    let seeds = authority.signer_seeds();
    invoke_signed(
        &spl_token_2022::instruction::mint_to(
            token_program_info.key,
            mint_info.key,
            token_account_info.key,
            authority.address(),
            &[],
            amount,
        )?,
        &[
            mint_info.clone(),
            token_account_info.clone(),
            mint_info.clone(),
            token_program_info.clone(),
        ],
        &[&seeds[..]],
    )?;

    msg!("Minted {} to {}", amount, token_account_info.key);

    Ok(())
}
