//! Payout Computation
//!
//! Winnings are a pari-mutuel split: each winning bettor gets their own
//! stake back plus a share of the losing pool weighted by their fraction
//! of the winning pool.
//!
//! ```text
//! payout = amount + floor(amount * losing_pool / winning_pool)
//! ```
//!
//! Integer division truncates, so the sum of all payouts can be strictly
//! below `winning_pool + losing_pool`. The residual dust stays on the
//! market account and is never reclaimed.

/// Computes a winner's payout in lamports.
///
/// Returns `None` on a zero winning pool (no winner exists to pay, so no
/// caller should ever reach this) or on u64 overflow of the final sum.
/// Intermediate math runs in u128 and cannot overflow for lamport-scale
/// pools.
pub fn winnings(amount: u64, winning_pool: u64, losing_pool: u64) -> Option<u64> {
    if winning_pool == 0 {
        return None;
    }

    let share = (amount as u128)
        .checked_mul(losing_pool as u128)?
        .checked_div(winning_pool as u128)?;

    let total = (amount as u128).checked_add(share)?;
    u64::try_from(total).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOL: u64 = 1_000_000_000;

    #[test]
    fn even_pools_double_the_stake() {
        // 0.01 SOL on each side: the single winner takes the whole pot.
        let payout = winnings(SOL / 100, SOL / 100, SOL / 100).unwrap();
        assert_eq!(payout, 2 * (SOL / 100));
    }

    #[test]
    fn proportional_split() {
        // Winner holds 1/4 of the winning pool, so takes 1/4 of the losers.
        let payout = winnings(25, 100, 200).unwrap();
        assert_eq!(payout, 25 + 50);
    }

    #[test]
    fn truncation_leaves_dust() {
        // Three equal winners over a losing pool of 10: each floor(10/3) = 3.
        let each = winnings(1, 3, 10).unwrap();
        assert_eq!(each, 1 + 3);
        // 3 * 4 = 12 paid out of 13 escrowed; 1 lamport of dust remains.
        assert!(3 * each < 3 + 10);
    }

    #[test]
    fn no_losers_returns_stake() {
        assert_eq!(winnings(500, 500, 0), Some(500));
    }

    #[test]
    fn zero_winning_pool_has_no_payout() {
        assert_eq!(winnings(0, 0, 1_000), None);
    }

    #[test]
    fn payouts_never_exceed_escrow() {
        // Sum of winner payouts stays within winning_pool + losing_pool.
        let stakes = [7u64, 13, 29, 51];
        let winning_pool: u64 = stakes.iter().sum();
        let losing_pool = 1_234_567;

        let paid: u64 = stakes
            .iter()
            .map(|s| winnings(*s, winning_pool, losing_pool).unwrap())
            .sum();
        assert!(paid <= winning_pool + losing_pool);
    }

    #[test]
    fn large_pools_do_not_overflow_intermediates() {
        // Whole-supply-scale pools still fit the u128 intermediate product.
        let half_supply = 250_000_000 * SOL;
        let payout = winnings(half_supply, half_supply, half_supply).unwrap();
        assert_eq!(payout, 2 * half_supply);
    }
}
