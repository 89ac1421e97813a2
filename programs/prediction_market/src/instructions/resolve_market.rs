//! Market Resolution
//!
//! The admin declares the outcome once the deadline has passed. Resolution
//! accepts a market in either Open or Closed status: the Closed transition
//! is only triggered by late bets, so a quiet market may still be Open at
//! its deadline.
//!
//! ## Wire encoding
//!
//! The result argument uses the indexer's encoding: 1 = YES, 2 = NO.
//! Anything else is rejected.
//!
//! ## Deposit push
//!
//! Resolution attempts to push the creator's deposit back immediately. If
//! the escrow cannot cover the push (the PDA must stay rent-exempt) the
//! failure is absorbed: the market still resolves and the deposit stays
//! escrowed until someone calls `claim_deposit`. A defunct creator can
//! therefore never block resolution.

use anchor_lang::prelude::*;

use crate::escrow;
use crate::state::{Config, Market, MarketStatus, Outcome};

/// Event emitted when a market is resolved
#[event]
pub struct MarketResolved {
    pub market_id: u64,
    pub result: u8,
    pub yes_pool: u64,
    pub no_pool: u64,
    pub deposit_settled: bool,
}

/// Accounts for market resolution
#[derive(Accounts)]
pub struct ResolveMarket<'info> {
    /// Admin authorized to resolve markets
    #[account(
        constraint = admin.key() == config.admin @ ResolveMarketError::Unauthorized,
    )]
    pub admin: Signer<'info>,

    /// Protocol configuration
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Market to resolve
    #[account(
        mut,
        seeds = [Market::SEED, market.id.to_le_bytes().as_ref()],
        bump = market.bump,
        constraint = market.status.can_settle() @ ResolveMarketError::MarketAlreadySettled,
    )]
    pub market: Account<'info, Market>,

    /// CHECK: deposit recipient, pinned to the recorded market creator
    #[account(mut, address = market.creator)]
    pub creator: UncheckedAccount<'info>,
}

impl<'info> ResolveMarket<'info> {
    pub fn resolve_market(&mut self, result: u8) -> Result<()> {
        let clock = Clock::get()?;

        require!(
            clock.unix_timestamp >= self.market.deadline,
            ResolveMarketError::NotYetDue
        );

        let outcome =
            Outcome::from_result(result).ok_or(ResolveMarketError::InvalidOutcome)?;

        self.market.status = MarketStatus::Resolved;
        self.market.outcome = outcome;

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

        emit!(MarketResolved {
            market_id: self.market.id,
            result,
            yes_pool: self.market.yes_pool,
            no_pool: self.market.no_pool,
            deposit_settled: self.market.deposit_settled,
        });

        msg!("Market {} resolved: {:?}", self.market.id, outcome);

        Ok(())
    }
}

#[error_code]
pub enum ResolveMarketError {
    #[msg("Only the admin can resolve markets")]
    Unauthorized,
    #[msg("Market is already resolved or cancelled")]
    MarketAlreadySettled,
    #[msg("Market deadline has not passed yet")]
    NotYetDue,
    #[msg("Result must be 1 (YES) or 2 (NO)")]
    InvalidOutcome,
}
