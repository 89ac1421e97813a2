//! Winnings Claim
//!
//! After resolution, winners pull their payout. Payouts are never pushed:
//! each winner triggers their own transfer, gated by the `winnings_claimed`
//! flag on their position.
//!
//! ## Payout
//!
//! ```text
//! payout = amount + floor(amount * losing_pool / winning_pool)
//! ```
//!
//! For example:
//! - Bettor staked 0.01 SOL on YES
//! - YES pool: 0.01 SOL, NO pool: 0.01 SOL
//! - YES wins: payout = 0.01 + floor(0.01 * 0.01 / 0.01) = 0.02 SOL
//!
//! The flag is set in the same instruction as the lamport move, so a
//! replayed claim fails instead of paying twice, and a failed transfer
//! rolls the flag back with the rest of the transaction.

use anchor_lang::prelude::*;

use crate::escrow;
use crate::payout;
use crate::state::{Bet, Market, MarketStatus};

/// Event emitted when a winner claims their payout
#[event]
pub struct BetClaimed {
    pub market_id: u64,
    pub bettor: Pubkey,
    pub amount: u64,
}

/// Accounts for claiming winnings
#[derive(Accounts)]
pub struct ClaimWinnings<'info> {
    /// Winning bettor
    #[account(mut)]
    pub bettor: Signer<'info>,

    /// Resolved market holding the escrow
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

impl<'info> ClaimWinnings<'info> {
    pub fn claim_winnings(&mut self) -> Result<u64> {
        require!(
            self.market.status == MarketStatus::Resolved,
            ClaimWinningsError::MarketNotResolved
        );
        require!(
            self.bet.amount > 0 && self.market.outcome.matches_side(self.bet.side),
            ClaimWinningsError::NotAWinner
        );
        require!(!self.bet.winnings_claimed, ClaimWinningsError::AlreadyClaimed);

        let (winning_pool, losing_pool) = if self.bet.side {
            (self.market.yes_pool, self.market.no_pool)
        } else {
            (self.market.no_pool, self.market.yes_pool)
        };

        let amount = payout::winnings(self.bet.amount, winning_pool, losing_pool)
            .ok_or(ClaimWinningsError::MathOverflow)?;

        let market_info = self.market.to_account_info();
        require!(
            escrow::can_release(&market_info, amount)?,
            ClaimWinningsError::InsufficientEscrow
        );
        escrow::release(&market_info, &self.bettor.to_account_info(), amount)?;

        self.bet.winnings_claimed = true;

        emit!(BetClaimed {
            market_id: self.market.id,
            bettor: self.bettor.key(),
            amount,
        });

        Ok(amount)
    }
}

#[error_code]
pub enum ClaimWinningsError {
    #[msg("Market is not resolved")]
    MarketNotResolved,
    #[msg("Position did not bet on the winning side")]
    NotAWinner,
    #[msg("Winnings already claimed")]
    AlreadyClaimed,
    #[msg("Arithmetic overflow")]
    MathOverflow,
    #[msg("Escrow cannot cover the payout")]
    InsufficientEscrow,
}
