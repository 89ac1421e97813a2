//! # Pari-mutuel Prediction Markets
//!
//! On-chain escrow and settlement for binary-outcome prediction markets.
//!
//! ## Overview
//!
//! Anyone posts a market by escrowing a deposit alongside a content hash
//! and a deadline. Bettors stake lamports on YES or NO; both pools and the
//! deposit sit on the market PDA. After the deadline the admin declares
//! the outcome and winners split the losing pool in proportion to their
//! stake, or the admin cancels the market and every bettor pulls their
//! stake back.
//!
//! ## Settlement model
//!
//! The creator deposit is pushed back on resolve/cancel, with a pull
//! retry (`claim_deposit`) when the push cannot be covered. Winnings and
//! refunds are pull-only. Every disbursement path is guarded by its own
//! settled flag set atomically with the transfer, so replays fail instead
//! of paying twice.

use anchor_lang::prelude::*;

pub mod escrow;
pub mod instructions;
pub mod payout;
pub mod state;

pub use instructions::*;

declare_id!("HqLHTH2WSoBc3152Z9e36x6iG5AVJ8TH3itGWbX6zUHj");

#[program]
pub mod prediction_market {
    use super::*;

    /// Initialize the protocol with global configuration
    pub fn initialize(
        ctx: Context<Initialize>,
        min_deposit: u64,
        min_bet: u64,
        closing_window_secs: i64,
    ) -> Result<()> {
        ctx.accounts
            .initialize(min_deposit, min_bet, closing_window_secs, &ctx.bumps)
    }

    /// Post a new market backed by an escrowed deposit
    pub fn create_market(
        ctx: Context<CreateMarket>,
        content_hash: [u8; 32],
        deadline: i64,
        group_owner: Pubkey,
        deposit: u64,
    ) -> Result<u64> {
        ctx.accounts
            .create_market(content_hash, deadline, group_owner, deposit, &ctx.bumps)
    }

    /// Stake lamports on one side of an open market
    pub fn place_bet(ctx: Context<PlaceBet>, side: bool, amount: u64) -> Result<()> {
        ctx.accounts.place_bet(side, amount, &ctx.bumps)
    }

    /// Declare the outcome (admin only; 1 = YES, 2 = NO)
    pub fn resolve_market(ctx: Context<ResolveMarket>, result: u8) -> Result<()> {
        ctx.accounts.resolve_market(result)
    }

    /// Void a market (admin only)
    pub fn cancel_market(ctx: Context<CancelMarket>) -> Result<()> {
        ctx.accounts.cancel_market()
    }

    /// Pull a winning payout after resolution
    pub fn claim_winnings(ctx: Context<ClaimWinnings>) -> Result<u64> {
        ctx.accounts.claim_winnings()
    }

    /// Pull a stake back after cancellation
    pub fn claim_refund(ctx: Context<ClaimRefund>) -> Result<u64> {
        ctx.accounts.claim_refund()
    }

    /// Retry a deferred creator-deposit push
    pub fn claim_deposit(ctx: Context<ClaimDeposit>) -> Result<u64> {
        ctx.accounts.claim_deposit()
    }
}
