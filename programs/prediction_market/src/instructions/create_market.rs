//! Market Creation
//!
//! Anyone can post a market by escrowing a deposit alongside a content
//! hash and a deadline. The deposit is returned once the market reaches a
//! terminal state; it exists to discourage throwaway questions.
//!
//! Duplicate content hashes are not checked here. An off-chain registry
//! screens submissions before they reach the chain.

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::state::{Config, Market, MarketStatus, Outcome};

/// Event emitted when a market is created
#[event]
pub struct MarketCreated {
    pub market_id: u64,
    pub content_hash: [u8; 32],
    pub deadline: i64,
    pub creator: Pubkey,
    pub group_owner: Pubkey,
}

/// Accounts for market creation
#[derive(Accounts)]
pub struct CreateMarket<'info> {
    /// Market creator; pays the deposit and the account rent
    #[account(mut)]
    pub creator: Signer<'info>,

    /// Protocol configuration (market counter is incremented)
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// New market account, doubling as the escrow for all funds
    #[account(
        init,
        payer = creator,
        space = 8 + Market::INIT_SPACE,
        seeds = [Market::SEED, config.market_count.to_le_bytes().as_ref()],
        bump,
    )]
    pub market: Account<'info, Market>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> CreateMarket<'info> {
    pub fn create_market(
        &mut self,
        content_hash: [u8; 32],
        deadline: i64,
        group_owner: Pubkey,
        deposit: u64,
        bumps: &CreateMarketBumps,
    ) -> Result<u64> {
        let clock = Clock::get()?;

        require!(
            deadline > clock.unix_timestamp,
            CreateMarketError::DeadlineNotFuture
        );
        require!(
            deposit >= self.config.min_deposit,
            CreateMarketError::InsufficientDeposit
        );

        // Escrow the deposit on the market PDA
        system_program::transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                system_program::Transfer {
                    from: self.creator.to_account_info(),
                    to: self.market.to_account_info(),
                },
            ),
            deposit,
        )?;

        let market_id = self.config.market_count;

        self.market.set_inner(Market {
            id: market_id,
            content_hash,
            deadline,
            created_at: clock.unix_timestamp,
            creator: self.creator.key(),
            group_owner,
            deposit,
            yes_pool: 0,
            no_pool: 0,
            status: MarketStatus::Open,
            outcome: Outcome::Undetermined,
            deposit_settled: false,
            bump: bumps.market,
        });

        self.config.market_count += 1;

        emit!(MarketCreated {
            market_id,
            content_hash,
            deadline,
            creator: self.creator.key(),
            group_owner,
        });

        Ok(market_id)
    }
}

#[error_code]
pub enum CreateMarketError {
    #[msg("Deadline must be in the future")]
    DeadlineNotFuture,
    #[msg("Deposit below the configured minimum")]
    InsufficientDeposit,
}
