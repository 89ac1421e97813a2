//! Market Cancellation
//!
//! The admin can void a market that has not settled yet (bad question,
//! unresolvable event, off-chain dispute). Cancellation does not touch
//! individual bets; every bettor recovers their full stake through
//! `claim_refund`. The creator's deposit is pushed back with the same
//! absorb-on-failure behavior as resolution.

use anchor_lang::prelude::*;

use crate::escrow;
use crate::state::{Config, Market, MarketStatus};

/// Event emitted when a market is cancelled
#[event]
pub struct MarketCancelled {
    pub market_id: u64,
    pub deposit_settled: bool,
}

/// Accounts for market cancellation
#[derive(Accounts)]
pub struct CancelMarket<'info> {
    /// Admin authorized to cancel markets
    #[account(
        constraint = admin.key() == config.admin @ CancelMarketError::Unauthorized,
    )]
    pub admin: Signer<'info>,

    /// Protocol configuration
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Market to cancel
    #[account(
        mut,
        seeds = [Market::SEED, market.id.to_le_bytes().as_ref()],
        bump = market.bump,
        constraint = market.status.can_settle() @ CancelMarketError::MarketAlreadySettled,
    )]
    pub market: Account<'info, Market>,

    /// CHECK: deposit recipient, pinned to the recorded market creator
    #[account(mut, address = market.creator)]
    pub creator: UncheckedAccount<'info>,
}

impl<'info> CancelMarket<'info> {
    pub fn cancel_market(&mut self) -> Result<()> {
        self.market.status = MarketStatus::Cancelled;

        if !self.market.deposit_settled {
            let market_info = self.market.to_account_info();
            if escrow::can_release(&market_info, self.market.deposit)? {
                escrow::release(
                    &market_info,
                    &self.creator.to_account_info(),
                    self.market.deposit,
                )?;
                self.market.deposit_settled = true;
            } else {
                msg!(
                    "Deposit push deferred for market {}; claim_deposit can retry",
                    self.market.id
                );
            }
        }

        emit!(MarketCancelled {
            market_id: self.market.id,
            deposit_settled: self.market.deposit_settled,
        });

        msg!("Market {} cancelled", self.market.id);

        Ok(())
    }
}

#[error_code]
pub enum CancelMarketError {
    #[msg("Only the admin can cancel markets")]
    Unauthorized,
    #[msg("Market is already resolved or cancelled")]
    MarketAlreadySettled,
}
