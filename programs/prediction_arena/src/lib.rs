use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::{ArenaInfo, PredictionStatus};

declare_id!("3ZqUeB3yX6mJ4cWf8s9kzN7vL2pHd5rTgA1oEwQxKbVn");

#[program]
pub mod prediction_arena {
    use super::*;

    /// Create an arena owned by the signer, open until `deadline`
    pub fn initialize(ctx: Context<InitializeArena>, arena_id: u64, deadline: i64) -> Result<()> {
        handle_initialize(ctx, arena_id, deadline)
    }

    /// Submit the signer's one prediction
    pub fn submit_prediction(ctx: Context<SubmitPrediction>, value: i64) -> Result<()> {
        handle_submit_prediction(ctx, value)
    }

    /// Submit the AI bot's prediction (AI bot only)
    pub fn submit_ai_bot_prediction(ctx: Context<SubmitPrediction>, value: i64) -> Result<()> {
        handle_submit_ai_bot_prediction(ctx, value)
    }

    /// Owner publishes the realized value
    pub fn resolve(ctx: Context<ResolveArena>, actual: i64) -> Result<()> {
        handle_resolve(ctx, actual)
    }

    /// |prediction - actual| for a participant, once resolved
    pub fn abs_error(ctx: Context<QueryPrediction>, participant: Pubkey) -> Result<u64> {
        handle_abs_error(ctx, participant)
    }

    /// Participant's prediction and the arena outcome; zeros if none
    pub fn view_status(
        ctx: Context<QueryPrediction>,
        participant: Pubkey,
    ) -> Result<PredictionStatus> {
        handle_view_status(ctx, participant)
    }

    /// Snapshot of the arena record
    pub fn get_info(ctx: Context<QueryArena>) -> Result<ArenaInfo> {
        handle_get_info(ctx)
    }

    /// Owner moves the deadline to a future timestamp
    pub fn set_deadline(ctx: Context<UpdateArena>, new_deadline: i64) -> Result<()> {
        handle_set_deadline(ctx, new_deadline)
    }

    /// Owner hands the arena to a new owner
    pub fn set_owner(ctx: Context<UpdateArena>, new_owner: Pubkey) -> Result<()> {
        handle_set_owner(ctx, new_owner)
    }

    /// Owner sets (or clears) the AI bot identity
    pub fn set_ai_bot(ctx: Context<UpdateArena>, new_ai_bot: Pubkey) -> Result<()> {
        handle_set_ai_bot(ctx, new_ai_bot)
    }
}
