//! Instruction handlers for the prediction market program
//!
//! - `initialize` - Set up the protocol (admin only, once)
//! - `create_market` - Post a question backed by a deposit (permissionless)
//! - `place_bet` - Stake lamports on YES or NO
//! - `resolve_market` / `cancel_market` - Settle a market (admin only)
//! - `claim_winnings` / `claim_refund` / `claim_deposit` - Pull escrowed funds

pub mod cancel_market;
pub mod claim_deposit;
pub mod claim_refund;
pub mod claim_winnings;
pub mod create_market;
pub mod initialize;
pub mod place_bet;
pub mod resolve_market;

pub use cancel_market::*;
pub use claim_deposit::*;
pub use claim_refund::*;
pub use claim_winnings::*;
pub use create_market::*;
pub use initialize::*;
pub use place_bet::*;
pub use resolve_market::*;
