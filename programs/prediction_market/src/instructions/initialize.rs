//! Protocol Initialization
//!
//! Creates the global configuration. Called once at deployment by the
//! account that becomes the admin/resolver.

use anchor_lang::prelude::*;

use crate::state::Config;

/// Accounts required for protocol initialization
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Protocol administrator (becomes the admin)
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Global configuration account (created)
    #[account(
        init,
        payer = admin,
        space = 8 + Config::INIT_SPACE,
        seeds = [Config::SEED],
        bump,
    )]
    pub config: Account<'info, Config>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(
        &mut self,
        min_deposit: u64,
        min_bet: u64,
        closing_window_secs: i64,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        require!(min_deposit > 0, InitializeError::InvalidConfigParam);
        require!(min_bet > 0, InitializeError::InvalidConfigParam);
        require!(closing_window_secs > 0, InitializeError::InvalidConfigParam);

        self.config.set_inner(Config {
            admin: self.admin.key(),
            min_deposit,
            min_bet,
            closing_window_secs,
            market_count: 0,
            bump: bumps.config,
        });

        msg!("Protocol initialized");
        msg!("Admin: {}", self.admin.key());
        msg!(
            "Min deposit: {} lamports, min bet: {} lamports, closing window: {}s",
            min_deposit,
            min_bet,
            closing_window_secs
        );

        Ok(())
    }
}

#[error_code]
pub enum InitializeError {
    #[msg("Configuration parameters must be positive")]
    InvalidConfigParam,
}
