use anchor_lang::prelude::*;

#[error_code]
#[derive(PartialEq, Eq)]
pub enum ArenaError {
    #[msg("Prediction deadline has passed")]
    DeadlinePassed,

    #[msg("A prediction has already been submitted for this identity")]
    AlreadySubmitted,

    #[msg("Unauthorized: only the AI bot can call this")]
    OnlyAIBot,

    #[msg("Deadline has not been reached yet")]
    DeadlineNotReached,

    #[msg("Unauthorized: only the arena owner can call this")]
    NotOwner,

    #[msg("Arena has already been resolved")]
    AlreadyResolved,

    #[msg("Arena has not been resolved yet")]
    NotResolved,

    #[msg("No prediction found for this identity")]
    NoPrediction,

    #[msg("Deadline must be in the future")]
    InvalidDeadline,

    #[msg("Owner cannot be the default pubkey")]
    InvalidOwner,
}

pub type ArenaResult<T> = std::result::Result<T, ArenaError>;
