use anchor_lang::prelude::*;
use crate::constants::PREDICTION_SEED;
use crate::events::PredictionStored;
use crate::state::{Arena, PredictionEntry};

/// Shared by the public and the AI bot entry points; `participant` is the
/// signer whose prediction is stored.
#[derive(Accounts)]
pub struct SubmitPrediction<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,

    #[account(mut)]
    pub arena: Account<'info, Arena>,

    #[account(
        init_if_needed,
        payer = participant,
        space = PredictionEntry::MAX_SIZE,
        seeds = [PREDICTION_SEED, arena.key().as_ref(), participant.key().as_ref()],
        bump,
    )]
    pub prediction: Account<'info, PredictionEntry>,

    pub system_program: Program<'info, System>,
}

pub fn handle_submit_prediction(ctx: Context<SubmitPrediction>, value: i64) -> Result<()> {
    store_prediction(ctx, value, false)
}

pub fn handle_submit_ai_bot_prediction(ctx: Context<SubmitPrediction>, value: i64) -> Result<()> {
    ctx.accounts.arena.ensure_ai_bot(&ctx.accounts.participant.key())?;
    store_prediction(ctx, value, true)
}

fn store_prediction(ctx: Context<SubmitPrediction>, value: i64, ai_bot: bool) -> Result<()> {
    let clock = Clock::get()?;
    let arena_key = ctx.accounts.arena.key();
    let participant = ctx.accounts.participant.key();

    let arena = &mut ctx.accounts.arena;
    let prediction = &mut ctx.accounts.prediction;
    arena.record_prediction(
        prediction,
        arena_key,
        participant,
        value,
        ai_bot,
        clock.unix_timestamp,
    )?;
    prediction.bump = ctx.bumps.prediction;

    emit!(PredictionStored {
        arena: arena_key,
        participant,
        value,
        timestamp: clock.unix_timestamp,
        ai_bot,
    });

    msg!(
        "Prediction #{} stored: participant={}, value={}",
        arena.prediction_count - 1,
        participant,
        value
    );
    Ok(())
}
