//! Cancellation Refund
//!
//! When a market is cancelled every bettor recovers exactly what they put
//! in, one pull per position, gated by the `refund_claimed` flag. Refunds
//! are independent of winnings: the two flags guard different terminal
//! states and a position can only ever settle through one of them.

use anchor_lang::prelude::*;

use crate::escrow;
use crate::state::{Bet, Market, MarketStatus};

/// Event emitted when a bettor recovers a cancelled stake
#[event]
pub struct BetRefunded {
    pub market_id: u64,
    pub bettor: Pubkey,
    pub amount: u64,
}

/// Accounts for claiming a refund
#[derive(Accounts)]
pub struct ClaimRefund<'info> {
    /// Bettor recovering their stake
    #[account(mut)]
    pub bettor: Signer<'info>,

    /// Cancelled market holding the escrow
    #[account(
        mut,
        seeds = [Market::SEED, market.id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,

    /// Bettor's position in this market
    #[account(
        mut,
        seeds = [Bet::SEED, market.key().as_ref(), bettor.key().as_ref()],
        bump = bet.bump,
        constraint = bet.market == market.key(),
        constraint = bet.bettor == bettor.key(),
    )]
    pub bet: Account<'info, Bet>,
}

impl<'info> ClaimRefund<'info> {
    pub fn claim_refund(&mut self) -> Result<u64> {
        require!(
            self.market.status == MarketStatus::Cancelled,
            ClaimRefundError::MarketNotCancelled
        );
        require!(!self.bet.refund_claimed, ClaimRefundError::AlreadySettled);

        let amount = self.bet.amount;

        let market_info = self.market.to_account_info();
        require!(
            escrow::can_release(&market_info, amount)?,
            ClaimRefundError::InsufficientEscrow
        );
        escrow::release(&market_info, &self.bettor.to_account_info(), amount)?;

        self.bet.refund_claimed = true;

        emit!(BetRefunded {
            market_id: self.market.id,
            bettor: self.bettor.key(),
            amount,
        });

        Ok(amount)
    }
}

#[error_code]
pub enum ClaimRefundError {
    #[msg("Market is not cancelled")]
    MarketNotCancelled,
    #[msg("Refund already claimed")]
    AlreadySettled,
    #[msg("Escrow cannot cover the refund")]
    InsufficientEscrow,
}
