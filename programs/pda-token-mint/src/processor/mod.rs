//! Instruction Processors
//!
//! This module contains the business logic for each instruction.
//! Each instruction has its own file for clarity and maintainability.

pub mod create_mint;
pub mod create_token_account;
pub mod mint_tokens;

use crate::instruction::PdaMintInstruction;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Main processor that routes instructions to specific handlers
pub struct Processor;

impl Processor {
    /// Process a PDA token mint instruction
    pub fn process(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        instruction_data: &[u8],
    ) -> ProgramResult {
        // Parse the instruction
        let instruction = PdaMintInstruction::unpack(instruction_data)?;

        // Route to appropriate handler
        match instruction {
            PdaMintInstruction::CreateMint {
                decimals,
                token_model,
            } => {
                msg!("Instruction: CreateMint");
                create_mint::process(program_id, accounts, decimals, token_model)
            }

            PdaMintInstruction::CreateTokenAccount { owner } => {
                msg!("Instruction: CreateTokenAccount");
                create_token_account::process(program_id, accounts, owner)
            }

            PdaMintInstruction::MintTokens { amount } => {
                msg!("Instruction: MintTokens");
                mint_tokens::process(program_id, accounts, amount)
            }
        }
    }
}
