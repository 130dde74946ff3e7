use anchor_lang::prelude::*;

#[event]
pub struct ArenaInitialized {
    /// The new arena account
    pub arena: Pubkey,
    /// Deployer, now the arena owner
    pub owner: Pubkey,
    /// Unix timestamp: submissions close
    pub deadline: i64,
}

#[event]
pub struct PredictionStored {
    /// The arena the prediction was stored in
    pub arena: Pubkey,
    /// The identity that submitted it
    pub participant: Pubkey,
    /// The predicted value
    pub value: i64,
    /// Unix timestamp of submission
    pub timestamp: i64,
    /// Submitted through the AI bot entry point
    pub ai_bot: bool,
}

#[event]
pub struct Resolved {
    /// The resolved arena
    pub arena: Pubkey,
    /// The realized value
    pub actual: i64,
    /// Unix timestamp of resolution
    pub timestamp: i64,
}

#[event]
pub struct DeadlineUpdated {
    /// The updated arena
    pub arena: Pubkey,
    /// The new deadline
    pub deadline: i64,
}

#[event]
pub struct OwnerUpdated {
    /// The updated arena
    pub arena: Pubkey,
    /// The new owner
    pub owner: Pubkey,
}

#[event]
pub struct AIBotUpdated {
    /// The updated arena
    pub arena: Pubkey,
    /// The new AI bot identity (default = unset)
    pub ai_bot: Pubkey,
}
