use anchor_lang::prelude::*;
use crate::events::Resolved;
use crate::state::Arena;

#[derive(Accounts)]
pub struct ResolveArena<'info> {
    pub owner: Signer<'info>,

    #[account(mut)]
    pub arena: Account<'info, Arena>,
}

pub fn handle_resolve(ctx: Context<ResolveArena>, actual: i64) -> Result<()> {
    let clock = Clock::get()?;
    let arena_key = ctx.accounts.arena.key();

    let arena = &mut ctx.accounts.arena;
    arena.resolve(&ctx.accounts.owner.key(), actual, clock.unix_timestamp)?;

    emit!(Resolved {
        arena: arena_key,
        actual,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Arena resolved: id={}, actual={}, predictions={}",
        arena.arena_id,
        actual,
        arena.prediction_count
    );
    Ok(())
}
