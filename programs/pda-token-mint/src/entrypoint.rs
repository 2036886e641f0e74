//! Program Entrypoint
//!
//! This module defines the entrypoint the Solana runtime calls for every
//! instruction addressed to this program.

// =============================================================================
// CONDITIONAL COMPILATION
// =============================================================================

// Only compile this module if the "no-entrypoint" feature is NOT enabled
// This allows other programs to use our crate without entrypoint conflicts
#![cfg(not(feature = "no-entrypoint"))]

// =============================================================================
// IMPORTS
// =============================================================================

use crate::{error::PdaMintError, processor::Processor};
use solana_program::{
    account_info::AccountInfo, entrypoint, entrypoint::ProgramResult,
    program_error::PrintProgramError, pubkey::Pubkey,
};

// =============================================================================
// ENTRYPOINT DECLARATION
// =============================================================================

entrypoint!(process_instruction);

// =============================================================================
// ENTRYPOINT FUNCTION
// =============================================================================

/// The main entrypoint for the PDA token mint program.
///
/// # Arguments
///
/// * `program_id` - The public key of this program; all PDAs derive from it
/// * `accounts` - Slice of all accounts involved in this instruction
/// * `instruction_data` - The raw bytes of instruction-specific data
///
/// # Returns
///
/// * `Ok(())` - Instruction executed successfully
/// * `Err(ProgramError)` - Nothing was applied; the runtime rolls back
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if let Err(error) = Processor::process(program_id, accounts, instruction_data) {
        // Log the named error before handing the code back to the runtime
        error.print::<PdaMintError>();
        return Err(error);
    }
    Ok(())
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

THE FLOW VISUALIZED
===================

User Transaction
     │
     ▼
┌─────────────────────────────┐
│ process_instruction()       │
│   - Delegates to Processor  │
│   - Logs named errors       │
└────────────┬────────────────┘
             │
             ▼
┌─────────────────────────────┐
│ Processor::process()        │
│   - Parses instruction      │
│   - Routes to handler       │
└────────────┬────────────────┘
             │
             ▼
┌─────────────────────────────┐
│ handler                     │
│   - Re-derives the PDA      │
│   - Validates accounts      │
│   - CPIs into token program │
│     (invoke_signed)         │
└─────────────────────────────┘

ERROR LOGGING
=============

ProgramError::print::<PdaMintError>() decodes Custom(n) back into the
matching PdaMintError variant and logs its message, e.g.

    Program log: Error: Invalid mint amount

Errors from the system or token programs are not Custom codes of ours;
they are logged by the runtime and returned unchanged.
*/
