//! Bet Placement
//!
//! Bets escrow lamports on the market PDA and accumulate per-bettor in a
//! `Bet` account created lazily on the first bet. A bettor's side is fixed
//! by that first bet.
//!
//! There is no timer process: the Open -> Closed transition happens here,
//! opportunistically, when a bet lands inside the closing window before
//! the deadline. Resolve and cancel re-check the deadline themselves, so
//! a market nobody bets on late still settles correctly.

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::state::{Bet, Config, Market, MarketStatus};

/// Event emitted for every accepted bet, with the updated pool totals
#[event]
pub struct BetPlaced {
    pub market_id: u64,
    pub bettor: Pubkey,
    pub side: bool,
    pub amount: u64,
    pub yes_pool: u64,
    pub no_pool: u64,
}

/// Event emitted when a bet pushes the market into its closing window
#[event]
pub struct MarketClosed {
    pub market_id: u64,
}

/// Accounts for bet placement
#[derive(Accounts)]
pub struct PlaceBet<'info> {
    /// Bettor; pays the stake and (on first bet) the position rent
    #[account(mut)]
    pub bettor: Signer<'info>,

    /// Protocol configuration
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Market being bet on
    #[account(
        mut,
        seeds = [Market::SEED, market.id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,

    /// Bettor's position, created on first bet
    #[account(
        init_if_needed,
        payer = bettor,
        space = 8 + Bet::INIT_SPACE,
        seeds = [Bet::SEED, market.key().as_ref(), bettor.key().as_ref()],
        bump,
    )]
    pub bet: Account<'info, Bet>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> PlaceBet<'info> {
    pub fn place_bet(&mut self, side: bool, amount: u64, bumps: &PlaceBetBumps) -> Result<()> {
        let clock = Clock::get()?;
        let now = clock.unix_timestamp;

        require!(
            self.market.status == MarketStatus::Open,
            PlaceBetError::MarketNotOpen
        );
        require!(now < self.market.deadline, PlaceBetError::PastDeadline);
        require!(amount >= self.config.min_bet, PlaceBetError::BelowMinimumStake);
        require!(
            self.bet.amount == 0 || self.bet.side == side,
            PlaceBetError::SideMismatch
        );

        system_program::transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                system_program::Transfer {
                    from: self.bettor.to_account_info(),
                    to: self.market.to_account_info(),
                },
            ),
            amount,
        )?;

        if self.bet.amount == 0 {
            self.bet.market = self.market.key();
            self.bet.bettor = self.bettor.key();
            self.bet.side = side;
            self.bet.bump = bumps.bet;
        }
        self.bet.amount = self
            .bet
            .amount
            .checked_add(amount)
            .ok_or(PlaceBetError::MathOverflow)?;

        let pool = if side {
            &mut self.market.yes_pool
        } else {
            &mut self.market.no_pool
        };
        *pool = pool.checked_add(amount).ok_or(PlaceBetError::MathOverflow)?;

        emit!(BetPlaced {
            market_id: self.market.id,
            bettor: self.bettor.key(),
            side,
            amount,
            yes_pool: self.market.yes_pool,
            no_pool: self.market.no_pool,
        });

        // Lazy closing-window evaluation: this bet was accepted, but any
        // later one must find the market Closed.
        if self
            .market
            .in_closing_window(now, self.config.closing_window_secs)
        {
            self.market.status = MarketStatus::Closed;
            emit!(MarketClosed {
                market_id: self.market.id,
            });
        }

        Ok(())
    }
}

#[error_code]
pub enum PlaceBetError {
    #[msg("Market is not open for betting")]
    MarketNotOpen,
    #[msg("Market deadline has passed")]
    PastDeadline,
    #[msg("Bet below the configured minimum")]
    BelowMinimumStake,
    #[msg("Cannot bet both sides of a market")]
    SideMismatch,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
