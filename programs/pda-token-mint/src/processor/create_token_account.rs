//! CreateTokenAccount Instruction Processor
//!
//! Creates the program-wide token account at the `b"token"` PDA.

use crate::error::PdaMintError;
use crate::pda::DerivedAuthority;
use crate::state::{read_mint, token_account_len};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::invoke,
    pubkey::Pubkey,
};

/// Process CreateTokenAccount instruction
///
/// Accounts expected:
/// 0. `[writable, signer]` Payer
/// 1. `[writable]` Token account PDA
/// 2. `[]` Mint PDA
/// 3. `[]` Token program owning the mint
/// 4. `[]` System program
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    owner: Option<Pubkey>,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Payer
    let payer_info = next_account_info(account_info_iter)?;

    // Account 1: Token account PDA
    let token_account_info = next_account_info(account_info_iter)?;

    // Account 2: Mint PDA
    let mint_info = next_account_info(account_info_iter)?;

    // Account 3: Token program
    let token_program_info = next_account_info(account_info_iter)?;

    // Account 4: System program
    let system_program_info = next_account_info(account_info_iter)?;

    // Validate accounts
    assert_signer(payer_info)?;
    assert_writable(payer_info)?;
    assert_writable(token_account_info)?;
    assert_system_program(system_program_info)?;

    // Only the program's own mint can back the token account
    let mint_authority = DerivedAuthority::mint(program_id)?;
    if mint_info.key != mint_authority.address() {
        return Err(PdaMintError::MintMismatch.into());
    }

    // The mint must exist; its owner decides the token model from here on
    let (token_model, _) = read_mint(mint_info)?;
    assert_token_program(token_program_info, token_model)?;

    let authority = DerivedAuthority::token_account(program_id)?;
    authority.expect_address(token_account_info.key)?;

    // Re-creation would reset the balance
    assert_uninitialized(token_account_info)?;

    let owner = owner.unwrap_or(*payer_info.key);

    create_pda_account(
        payer_info,
        token_account_info,
        system_program_info,
        &authority,
        token_account_len(token_model)?,
        token_program_info.key,
    )?;

    invoke(
        &spl_token_2022::instruction::initialize_account3(
            token_program_info.key,
            token_account_info.key,
            mint_info.key,
            &owner,
        )?,
        &[
            token_account_info.clone(),
            mint_info.clone(),
            token_program_info.clone(),
        ],
    )?;

    msg!("Created Token Account: {}", token_account_info.key);

    Ok(())
}
