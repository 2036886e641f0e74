//! # PDA Token Mint
//!
//! A program that acts as its own mint authority. The mint and the token
//! account live at program-derived addresses (PDAs), so no private key
//! controls them: minting happens only when this program's logic says so.
//!
//! ## Overview
//!
//! This program allows you to:
//! - Create the mint (the mint PDA is also its mint authority)
//! - Create the program-wide token account for that mint
//! - Mint tokens into it, signed by the mint PDA
//!
//! Balances and supply are kept by the SPL Token program or by Token-2022,
//! chosen when the mint is created.
//!
//! ## Accounts
//!
//! | Account | Address | Owner program |
//! |---------|---------|---------------|
//! | Mint | PDA of `[b"mint"]` | chosen token program |
//! | Token account | PDA of `[b"token"]` | chosen token program |
//!
//! ## Instructions
//!
//! | # | Instruction | Description |
//! |---|-------------|-------------|
//! | 0 | CreateMint | Create the mint at its PDA |
//! | 1 | CreateTokenAccount | Create the token account at its PDA |
//! | 2 | MintTokens | Mint into the token account |

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Program entrypoint - where Solana calls into our program
pub mod entrypoint;

/// Custom error types with unique codes
pub mod error;

/// Instruction definitions, parsing and client builders
pub mod instruction;

/// Program-derived address derivation and the derived authority
pub mod pda;

/// Instruction processors (business logic)
pub mod processor;

/// Token model selection and typed reads of mint / token account
pub mod state;

/// Utility functions for validation, math and PDA account creation
pub mod utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use error::PdaMintError;
pub use instruction::PdaMintInstruction;
pub use pda::{find_mint_address, find_token_account_address, DerivedAuthority};
pub use processor::Processor;
pub use state::{MintState, TokenAccountState, TokenModel};

// =============================================================================
// PROGRAM ID
// =============================================================================

solana_program::declare_id!("3Pqo8cxfmpL7NjVYNbQzMFkCTjuXxTSkPqJLjhDfuogX");
