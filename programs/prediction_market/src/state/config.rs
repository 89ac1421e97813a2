//! Global Protocol Configuration
//!
//! Protocol-wide parameters that apply to every market.

use anchor_lang::prelude::*;

/// Global configuration account (singleton PDA)
///
/// Seeds: ["config"]
#[account]
#[derive(InitSpace)]
pub struct Config {
    /// Administrator authorized to resolve and cancel markets
    pub admin: Pubkey,

    /// Minimum creator deposit in lamports
    pub min_deposit: u64,

    /// Minimum bet size in lamports
    pub min_bet: u64,

    /// Betting stops this many seconds before a market's deadline
    /// (30 minutes in the reference deployment)
    pub closing_window_secs: i64,

    /// Total markets created (used as incrementing ID)
    pub market_count: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl Config {
    pub const SEED: &'static [u8] = b"config";
}
