use anchor_lang::prelude::*;
use crate::constants::PREDICTION_SEED;
use crate::state::{Arena, ArenaInfo, PredictionEntry, PredictionStatus};

/// Read-only lookup of one identity's prediction. The prediction PDA is
/// passed unchecked because it may not exist yet.
#[derive(Accounts)]
#[instruction(participant: Pubkey)]
pub struct QueryPrediction<'info> {
    pub arena: Account<'info, Arena>,

    /// CHECK: Address validated by seeds, contents loaded by `load_prediction`
    #[account(
        seeds = [PREDICTION_SEED, arena.key().as_ref(), participant.as_ref()],
        bump,
    )]
    pub prediction: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct QueryArena<'info> {
    pub arena: Account<'info, Arena>,
}

/// Returns `None` when no prediction was ever stored at this address.
pub fn load_prediction(info: &AccountInfo) -> Result<Option<PredictionEntry>> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    let entry = PredictionEntry::try_deserialize(&mut &data[..])?;
    Ok(entry.exists.then_some(entry))
}

pub fn handle_abs_error(ctx: Context<QueryPrediction>, participant: Pubkey) -> Result<u64> {
    let arena = &ctx.accounts.arena;
    let entry = load_prediction(&ctx.accounts.prediction.to_account_info())?;
    let error = arena.abs_error(entry.as_ref())?;

    msg!("Absolute error: participant={}, error={}", participant, error);
    Ok(error)
}

pub fn handle_view_status(ctx: Context<QueryPrediction>, _participant: Pubkey) -> Result<PredictionStatus> {
    let entry = load_prediction(&ctx.accounts.prediction.to_account_info())?;
    Ok(ctx.accounts.arena.status_of(entry.as_ref()))
}

pub fn handle_get_info(ctx: Context<QueryArena>) -> Result<ArenaInfo> {
    Ok(ctx.accounts.arena.info())
}
