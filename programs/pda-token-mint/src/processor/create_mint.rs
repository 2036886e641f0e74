//! CreateMint Instruction Processor
//!
//! Creates the program's mint at the `b"mint"` PDA. The PDA is also the mint
//! authority, so only this program can ever mint.

use crate::error::PdaMintError;
use crate::pda::DerivedAuthority;
use crate::state::{mint_len, TokenModel, MAX_DECIMALS};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::invoke,
    pubkey::Pubkey,
};

/// Process CreateMint instruction
///
/// Accounts expected:
/// 0. `[writable, signer]` Payer
/// 1. `[writable]` Mint PDA
/// 2. `[]` Token program of `token_model`
/// 3. `[]` System program
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    decimals: u8,
    token_model: TokenModel,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Payer
    let payer_info = next_account_info(account_info_iter)?;

    // Account 1: Mint PDA
    let mint_info = next_account_info(account_info_iter)?;

    // Account 2: Token program
    let token_program_info = next_account_info(account_info_iter)?;

    // Account 3: System program
    let system_program_info = next_account_info(account_info_iter)?;

    if decimals > MAX_DECIMALS {
        return Err(PdaMintError::InvalidDecimals.into());
    }

    // Validate accounts
    assert_signer(payer_info)?;
    assert_writable(payer_info)?;
    assert_writable(mint_info)?;
    assert_token_program(token_program_info, token_model)?;
    assert_system_program(system_program_info)?;

    // Re-derive the authority and make sure we are creating *its* account
    let authority = DerivedAuthority::mint(program_id)?;
    authority.expect_address(mint_info.key)?;

    // Never overwrite: that would hand the mint to a new authority
    assert_uninitialized(mint_info)?;

    create_pda_account(
        payer_info,
        mint_info,
        system_program_info,
        &authority,
        mint_len(token_model)?,
        token_program_info.key,
    )?;

    invoke(
        &spl_token_2022::instruction::initialize_mint2(
            token_program_info.key,
            mint_info.key,
            authority.address(),
            None,
            decimals,
        )?,
        &[mint_info.clone(), token_program_info.clone()],
    )?;

    msg!("Created Mint Account: {}", mint_info.key);

    Ok(())
}
