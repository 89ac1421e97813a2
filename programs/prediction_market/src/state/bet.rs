//! Bettor Position State

use anchor_lang::prelude::*;

/// One bettor's cumulative position in one market
///
/// Seeds: ["bet", market, bettor]
///
/// The side is fixed by the first bet; later bets on the same market must
/// use the same side and add to `amount`. The two settlement flags are
/// independent: `winnings_claimed` guards the resolved path,
/// `refund_claimed` guards the cancelled path.
#[account]
#[derive(InitSpace)]
pub struct Bet {
    /// Market this position belongs to
    pub market: Pubkey,

    /// Owner of the position
    pub bettor: Pubkey,

    /// Cumulative lamports bet
    pub amount: u64,

    /// Chosen side; true = YES, false = NO
    pub side: bool,

    /// True once winnings have been paid out
    pub winnings_claimed: bool,

    /// True once a cancellation refund has been paid out
    pub refund_claimed: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl Bet {
    pub const SEED: &'static [u8] = b"bet";
}
