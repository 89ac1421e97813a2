//! Escrow Disbursement
//!
//! Outbound lamport movement from a market PDA. Every payout goes through
//! `can_release` + `release`: the market account must stay rent-exempt after
//! the debit, otherwise the runtime would garbage-collect the ledger.
//!
//! Callers choose what a failed `can_release` means. Resolve and cancel
//! absorb it (the deposit stays escrowed for a later `claim_deposit`);
//! the pull-based claim instructions fail the whole call so no settlement
//! flag is ever set without the lamports actually moving.

use anchor_lang::prelude::*;

/// True when `escrow` can release `amount` and remain rent-exempt.
pub fn can_release(escrow: &AccountInfo, amount: u64) -> Result<bool> {
    let rent = Rent::get()?;
    let min_balance = rent.minimum_balance(escrow.data_len());
    Ok(escrow.lamports().saturating_sub(amount) >= min_balance)
}

/// Moves `amount` lamports from a program-owned escrow account to `to`.
///
/// Callers must have verified `can_release` first; the subtraction here is
/// checked only by the workspace-wide overflow checks.
pub fn release<'info>(
    escrow: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    **escrow.try_borrow_mut_lamports()? -= amount;
    **to.try_borrow_mut_lamports()? += amount;
    Ok(())
}
