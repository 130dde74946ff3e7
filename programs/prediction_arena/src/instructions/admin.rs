use anchor_lang::prelude::*;
use crate::events::{AIBotUpdated, DeadlineUpdated, OwnerUpdated};
use crate::state::Arena;

#[derive(Accounts)]
pub struct UpdateArena<'info> {
    pub owner: Signer<'info>,

    #[account(mut)]
    pub arena: Account<'info, Arena>,
}

pub fn handle_set_deadline(ctx: Context<UpdateArena>, new_deadline: i64) -> Result<()> {
    let clock = Clock::get()?;
    let arena_key = ctx.accounts.arena.key();

    ctx.accounts
        .arena
        .set_deadline(&ctx.accounts.owner.key(), new_deadline, clock.unix_timestamp)?;

    emit!(DeadlineUpdated {
        arena: arena_key,
        deadline: new_deadline,
    });
    msg!("Deadline updated: {}", new_deadline);
    Ok(())
}

pub fn handle_set_owner(ctx: Context<UpdateArena>, new_owner: Pubkey) -> Result<()> {
    let arena_key = ctx.accounts.arena.key();

    ctx.accounts
        .arena
        .set_owner(&ctx.accounts.owner.key(), new_owner)?;

    emit!(OwnerUpdated {
        arena: arena_key,
        owner: new_owner,
    });
    msg!("Owner updated: {}", new_owner);
    Ok(())
}

pub fn handle_set_ai_bot(ctx: Context<UpdateArena>, new_ai_bot: Pubkey) -> Result<()> {
    let arena_key = ctx.accounts.arena.key();

    ctx.accounts
        .arena
        .set_ai_bot(&ctx.accounts.owner.key(), new_ai_bot)?;

    emit!(AIBotUpdated {
        arena: arena_key,
        ai_bot: new_ai_bot,
    });
    msg!("AI bot updated: {}", new_ai_bot);
    Ok(())
}
