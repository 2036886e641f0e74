//! Instruction Types
//!
//! This module defines the three instructions of the PDA token mint program,
//! their byte encoding, and client-side builders.
//!
//! # Instruction Format
//!
//! ```text
//! [discriminant: u8][data: varies]
//! ```
//!
//! | Value | Instruction | Data |
//! |-------|-------------|------|
//! | 0 | CreateMint | decimals: u8, token_model: u8 |
//! | 1 | CreateTokenAccount | owner: 0 \| 1 + Pubkey |
//! | 2 | MintTokens | amount: u64 (LE) |

use crate::error::PdaMintError;
use crate::pda::{find_mint_address, find_token_account_address};
use crate::state::TokenModel;
use arrayref::array_ref;
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program,
};

// =============================================================================
// INSTRUCTION ENUM
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PdaMintInstruction {
    /// Create the mint at the `b"mint"` PDA, with the PDA as mint authority.
    ///
    /// Accounts expected:
    /// 0. `[writable, signer]` Payer
    /// 1. `[writable]` Mint PDA
    /// 2. `[]` Token program of `token_model`
    /// 3. `[]` System program
    CreateMint {
        decimals: u8,
        token_model: TokenModel,
    },

    /// Create the token account at the `b"token"` PDA for the mint.
    ///
    /// Accounts expected:
    /// 0. `[writable, signer]` Payer
    /// 1. `[writable]` Token account PDA
    /// 2. `[]` Mint PDA
    /// 3. `[]` Token program owning the mint
    /// 4. `[]` System program
    CreateTokenAccount {
        /// Owner of the balance. `None` means the payer.
        owner: Option<Pubkey>,
    },

    /// Mint `amount` into the token account, signed by the mint PDA.
    ///
    /// Accounts expected:
    /// 0. `[signer]` Token account owner
    /// 1. `[writable]` Mint PDA
    /// 2. `[writable]` Token account PDA
    /// 3. `[]` Token program owning the mint
    MintTokens { amount: u64 },
}

// =============================================================================
// INSTRUCTION PARSING (UNPACK)
// =============================================================================

impl PdaMintInstruction {
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (&discriminant, rest) = input
            .split_first()
            .ok_or(PdaMintError::InvalidInstruction)?;

        Ok(match discriminant {
            0 => {
                if rest.len() < 2 {
                    return Err(PdaMintError::InvalidInstruction.into());
                }
                PdaMintInstruction::CreateMint {
                    decimals: rest[0],
                    token_model: TokenModel::from_u8(rest[1])?,
                }
            }

            1 => {
                let owner = match rest.first() {
                    // A missing tag reads as "no owner given"
                    None | Some(0) => None,
                    Some(1) => {
                        if rest.len() < 33 {
                            return Err(PdaMintError::InvalidInstruction.into());
                        }
                        Some(Pubkey::new_from_array(*array_ref![rest, 1, 32]))
                    }
                    Some(_) => return Err(PdaMintError::InvalidInstruction.into()),
                };
                PdaMintInstruction::CreateTokenAccount { owner }
            }

            2 => {
                if rest.len() < 8 {
                    return Err(PdaMintError::InvalidInstruction.into());
                }
                let amount = u64::from_le_bytes(*array_ref![rest, 0, 8]);
                PdaMintInstruction::MintTokens { amount }
            }

            _ => return Err(PdaMintError::InvalidInstruction.into()),
        })
    }

    // =========================================================================
    // INSTRUCTION PACKING (for tests and clients)
    // =========================================================================

    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(34);

        match self {
            PdaMintInstruction::CreateMint {
                decimals,
                token_model,
            } => {
                buf.push(0);
                buf.push(*decimals);
                buf.push(token_model.to_u8());
            }

            PdaMintInstruction::CreateTokenAccount { owner } => {
                buf.push(1);
                match owner {
                    Some(owner) => {
                        buf.push(1);
                        buf.extend_from_slice(owner.as_ref());
                    }
                    None => buf.push(0),
                }
            }

            PdaMintInstruction::MintTokens { amount } => {
                buf.push(2);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
        }

        buf
    }
}

// =============================================================================
// INSTRUCTION BUILDERS
// =============================================================================

/// Build `CreateMint`. The mint address is derived, not supplied.
pub fn create_mint(
    program_id: &Pubkey,
    payer: &Pubkey,
    decimals: u8,
    token_model: TokenModel,
) -> Result<Instruction, ProgramError> {
    let (mint, _) = find_mint_address(program_id)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(mint, false),
            AccountMeta::new_readonly(token_model.program_id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: PdaMintInstruction::CreateMint {
            decimals,
            token_model,
        }
        .pack(),
    })
}

/// Build `CreateTokenAccount`. `owner` defaults to `payer` on-chain.
pub fn create_token_account(
    program_id: &Pubkey,
    payer: &Pubkey,
    owner: Option<&Pubkey>,
    token_model: TokenModel,
) -> Result<Instruction, ProgramError> {
    let (mint, _) = find_mint_address(program_id)?;
    let (token_account, _) = find_token_account_address(program_id)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(token_account, false),
            AccountMeta::new_readonly(mint, false),
            AccountMeta::new_readonly(token_model.program_id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: PdaMintInstruction::CreateTokenAccount {
            owner: owner.copied(),
        }
        .pack(),
    })
}

/// Build `MintTokens`, signed by the token account `owner`.
pub fn mint_tokens(
    program_id: &Pubkey,
    owner: &Pubkey,
    amount: u64,
    token_model: TokenModel,
) -> Result<Instruction, ProgramError> {
    let (mint, _) = find_mint_address(program_id)?;
    let (token_account, _) = find_token_account_address(program_id)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new(mint, false),
            AccountMeta::new(token_account, false),
            AccountMeta::new_readonly(token_model.program_id(), false),
        ],
        data: PdaMintInstruction::MintTokens { amount }.pack(),
    })
}

// =============================================================================
// UNIT TESTS
// =============================================================================
