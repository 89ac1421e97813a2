//! Market State
//!
//! Each market is a single yes/no question backed by a creator deposit.
//! The market PDA is also the escrow: the deposit and every bet are held
//! as lamports on the account itself, and the fields below are the ledger
//! that says who is owed what.
//!
//! Market accounts are never closed; a settled market remains on chain as
//! a permanently queryable record.

use anchor_lang::prelude::*;

/// Individual prediction market account
///
/// Seeds: ["market", id.to_le_bytes()]
#[account]
#[derive(InitSpace)]
pub struct Market {
    /// Unique market identifier, assigned sequentially at creation
    pub id: u64,

    /// Hash of the market's content (question text, metadata). Opaque to
    /// the program; an off-chain registry is responsible for uniqueness.
    pub content_hash: [u8; 32],

    /// Unix timestamp after which betting stops
    pub deadline: i64,

    /// Unix timestamp when the market was created
    pub created_at: i64,

    /// Market creator; owns the escrowed deposit
    pub creator: Pubkey,

    /// Beneficiary hint recorded for off-chain consumers (e.g. the group
    /// a question was posted in). Not read by settlement logic.
    pub group_owner: Pubkey,

    /// Escrowed creation deposit in lamports
    pub deposit: u64,

    /// Cumulative lamports bet on YES
    pub yes_pool: u64,

    /// Cumulative lamports bet on NO
    pub no_pool: u64,

    /// Lifecycle status
    pub status: MarketStatus,

    /// Winning outcome (only meaningful once Resolved)
    pub outcome: Outcome,

    /// True once the deposit has left escrow (push or pull)
    pub deposit_settled: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl Market {
    pub const SEED: &'static [u8] = b"market";

    /// True when `now` has entered the pre-deadline closing window and the
    /// market should stop accepting bets.
    pub fn in_closing_window(&self, now: i64, window_secs: i64) -> bool {
        self.deadline.saturating_sub(now) <= window_secs
    }
}

/// Market lifecycle status
///
/// Transitions only move forward: Open -> Closed -> {Resolved, Cancelled},
/// with Closed optionally skipped when nobody bets inside the closing
/// window. Resolved and Cancelled are terminal.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default)]
pub enum MarketStatus {
    /// Market is open for betting
    #[default]
    Open,
    /// Betting ended, awaiting resolution or cancellation
    Closed,
    /// Outcome declared, winners may claim
    Resolved,
    /// Market voided, bettors may claim refunds
    Cancelled,
}

impl MarketStatus {
    /// True for the two terminal states.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MarketStatus::Resolved | MarketStatus::Cancelled)
    }

    /// True while the market can still be resolved or cancelled.
    pub fn can_settle(&self) -> bool {
        matches!(self, MarketStatus::Open | MarketStatus::Closed)
    }
}

/// Declared outcome of a market
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default)]
pub enum Outcome {
    /// Not yet determined
    #[default]
    Undetermined,
    /// YES won
    Yes,
    /// NO won
    No,
}

impl Outcome {
    /// Maps the resolver's wire encoding (1 = YES, 2 = NO) to an outcome.
    /// Anything else is rejected by the resolve instruction.
    pub fn from_result(result: u8) -> Option<Self> {
        match result {
            1 => Some(Outcome::Yes),
            2 => Some(Outcome::No),
            _ => None,
        }
    }

    /// Whether a bet on `side` (true = YES) won under this outcome.
    pub fn matches_side(&self, side: bool) -> bool {
        match self {
            Outcome::Yes => side,
            Outcome::No => !side,
            Outcome::Undetermined => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market_with_deadline(deadline: i64) -> Market {
        Market {
            id: 0,
            content_hash: [0u8; 32],
            deadline,
            created_at: 0,
            creator: Pubkey::default(),
            group_owner: Pubkey::default(),
            deposit: 0,
            yes_pool: 0,
            no_pool: 0,
            status: MarketStatus::Open,
            outcome: Outcome::Undetermined,
            deposit_settled: false,
            bump: 255,
        }
    }

    #[test]
    fn closing_window_boundaries() {
        let window = 1800;
        let market = market_with_deadline(100_000);

        assert!(!market.in_closing_window(100_000 - 1801, window));
        assert!(market.in_closing_window(100_000 - 1800, window));
        assert!(market.in_closing_window(100_000 - 1, window));
        // Past the deadline still counts as inside the window
        assert!(market.in_closing_window(100_001, window));
    }

    #[test]
    fn status_predicates() {
        assert!(MarketStatus::Open.can_settle());
        assert!(MarketStatus::Closed.can_settle());
        assert!(!MarketStatus::Resolved.can_settle());
        assert!(!MarketStatus::Cancelled.can_settle());

        assert!(MarketStatus::Resolved.is_terminal());
        assert!(MarketStatus::Cancelled.is_terminal());
        assert!(!MarketStatus::Open.is_terminal());
        assert!(!MarketStatus::Closed.is_terminal());
    }

    #[test]
    fn result_encoding() {
        assert_eq!(Outcome::from_result(1), Some(Outcome::Yes));
        assert_eq!(Outcome::from_result(2), Some(Outcome::No));
        assert_eq!(Outcome::from_result(0), None);
        assert_eq!(Outcome::from_result(3), None);
    }

    #[test]
    fn outcome_side_matching() {
        assert!(Outcome::Yes.matches_side(true));
        assert!(!Outcome::Yes.matches_side(false));
        assert!(Outcome::No.matches_side(false));
        assert!(!Outcome::No.matches_side(true));
        assert!(!Outcome::Undetermined.matches_side(true));
        assert!(!Outcome::Undetermined.matches_side(false));
    }
}
