//! Deposit Claim
//!
//! Pull fallback for the creator deposit. Resolve and cancel already try
//! to push the deposit back; this instruction retries the same transfer
//! when that push was deferred. Anyone may trigger it, since the lamports
//! can only ever go to the recorded creator, so a helpful third party or
//! a keeper bot can unstick a creator's funds.

use anchor_lang::prelude::*;

use crate::escrow;
use crate::state::Market;

/// Event emitted when the creator deposit is settled through the pull path
#[event]
pub struct DepositClaimed {
    pub market_id: u64,
    pub creator: Pubkey,
    pub amount: u64,
}

/// Accounts for claiming the creator deposit
#[derive(Accounts)]
pub struct ClaimDeposit<'info> {
    /// Anyone may trigger the retry; funds always go to the creator
    pub caller: Signer<'info>,

    /// Settled market still holding the deposit
    #[account(
        mut,
        seeds = [Market::SEED, market.id.to_le_bytes().as_ref()],
        bump = market.bump,
        constraint = market.status.is_terminal() @ ClaimDepositError::MarketStillActive,
    )]
    pub market: Account<'info, Market>,

    /// CHECK: deposit recipient, pinned to the recorded market creator
    #[account(mut, address = market.creator)]
    pub creator: UncheckedAccount<'info>,
}

impl<'info> ClaimDeposit<'info> {
    pub fn claim_deposit(&mut self) -> Result<u64> {
        require!(!self.market.deposit_settled, ClaimDepositError::AlreadySettled);

        let amount = self.market.deposit;

        let market_info = self.market.to_account_info();
        require!(
            escrow::can_release(&market_info, amount)?,
            ClaimDepositError::InsufficientEscrow
        );
        escrow::release(&market_info, &self.creator.to_account_info(), amount)?;

        self.market.deposit_settled = true;

        emit!(DepositClaimed {
            market_id: self.market.id,
            creator: self.creator.key(),
            amount,
        });

        Ok(amount)
    }
}

#[error_code]
pub enum ClaimDepositError {
    #[msg("Market is not resolved or cancelled yet")]
    MarketStillActive,
    #[msg("Deposit already settled")]
    AlreadySettled,
    #[msg("Escrow cannot cover the deposit")]
    InsufficientEscrow,
}
