use anchor_lang::prelude::*;
use crate::constants::ARENA_SEED;
use crate::events::ArenaInitialized;
use crate::state::Arena;

#[derive(Accounts)]
#[instruction(arena_id: u64)]
pub struct InitializeArena<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = Arena::MAX_SIZE,
        seeds = [ARENA_SEED, arena_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub arena: Account<'info, Arena>,

    pub system_program: Program<'info, System>,
}

pub fn handle_initialize(ctx: Context<InitializeArena>, arena_id: u64, deadline: i64) -> Result<()> {
    let clock = Clock::get()?;
    let owner = ctx.accounts.owner.key();
    let arena_key = ctx.accounts.arena.key();

    let arena = &mut ctx.accounts.arena;
    arena.initialize(owner, arena_id, deadline, clock.unix_timestamp, ctx.bumps.arena)?;

    emit!(ArenaInitialized {
        arena: arena_key,
        owner,
        deadline,
    });

    msg!("Arena created: id={}, deadline={}", arena_id, deadline);
    Ok(())
}
