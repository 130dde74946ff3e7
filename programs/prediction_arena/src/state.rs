use anchor_lang::prelude::*;

use crate::errors::{ArenaError, ArenaResult};

/// A single-round prediction market
#[account]
#[derive(Default, Debug)]
pub struct Arena {
    /// Administrative authority: resolves and reconfigures the arena
    pub owner: Pubkey,
    /// Identity allowed to submit on behalf of the AI bot (default = unset)
    pub ai_bot: Pubkey,
    /// Unique arena identifier
    pub arena_id: u64,
    /// Unix timestamp: submissions close, resolution opens
    pub deadline: i64,
    /// Whether the realized value has been published
    pub resolved: bool,
    /// The realized value, only meaningful once `resolved` is set
    pub actual_value: i64,
    /// Number of predictions received
    pub prediction_count: u32,
    /// Bump seed for this arena PDA
    pub bump: u8,
}

impl Arena {
    /// discriminator(8) + pubkey(32)*2 + u64(8) + i64(8) + bool(1) + i64(8)
    /// + u32(4) + u8(1)
    pub const MAX_SIZE: usize = 8 + 32 + 32 + 8 + 8 + 1 + 8 + 4 + 1;

    /// Open the arena with the deployer as owner.
    ///
    /// Goes beyond a plain deploy: a deadline that is not in the future is
    /// refused, reusing the `set_deadline` failure `InvalidDeadline`.
    pub fn initialize(
        &mut self,
        owner: Pubkey,
        arena_id: u64,
        deadline: i64,
        now: i64,
        bump: u8,
    ) -> ArenaResult<()> {
        if deadline <= now {
            return Err(ArenaError::InvalidDeadline);
        }

        self.owner = owner;
        self.ai_bot = Pubkey::default();
        self.arena_id = arena_id;
        self.deadline = deadline;
        self.resolved = false;
        self.actual_value = 0;
        self.prediction_count = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn ensure_owner(&self, caller: &Pubkey) -> ArenaResult<()> {
        if *caller != self.owner {
            return Err(ArenaError::NotOwner);
        }
        Ok(())
    }

    /// An unset AI bot matches nobody.
    pub fn ensure_ai_bot(&self, caller: &Pubkey) -> ArenaResult<()> {
        if self.ai_bot == Pubkey::default() || *caller != self.ai_bot {
            return Err(ArenaError::OnlyAIBot);
        }
        Ok(())
    }

    /// Store `value` as `participant`'s one and only prediction.
    ///
    /// `entry` is the participant's prediction account; it is written only
    /// when every precondition holds.
    pub fn record_prediction(
        &mut self,
        entry: &mut PredictionEntry,
        arena: Pubkey,
        participant: Pubkey,
        value: i64,
        ai_bot: bool,
        now: i64,
    ) -> ArenaResult<()> {
        if now >= self.deadline {
            return Err(ArenaError::DeadlinePassed);
        }
        if entry.exists {
            return Err(ArenaError::AlreadySubmitted);
        }

        entry.arena = arena;
        entry.participant = participant;
        entry.value = value;
        entry.timestamp = now;
        entry.exists = true;
        entry.ai_bot = ai_bot;

        self.prediction_count = self.prediction_count.saturating_add(1);
        Ok(())
    }

    /// Publish the realized value. Irreversible.
    pub fn resolve(&mut self, caller: &Pubkey, actual: i64, now: i64) -> ArenaResult<()> {
        self.ensure_owner(caller)?;
        if now < self.deadline {
            return Err(ArenaError::DeadlineNotReached);
        }
        if self.resolved {
            return Err(ArenaError::AlreadyResolved);
        }

        self.actual_value = actual;
        self.resolved = true;
        Ok(())
    }

    /// Resolution is checked before existence, so nothing leaks about who
    /// predicted until the arena is settled.
    pub fn abs_error(&self, entry: Option<&PredictionEntry>) -> ArenaResult<u64> {
        if !self.resolved {
            return Err(ArenaError::NotResolved);
        }
        match entry {
            Some(entry) if entry.exists => Ok(entry.value.abs_diff(self.actual_value)),
            _ => Err(ArenaError::NoPrediction),
        }
    }

    /// Best-effort status: unknown identities read as zeros.
    pub fn status_of(&self, entry: Option<&PredictionEntry>) -> PredictionStatus {
        let (value, timestamp) = match entry {
            Some(entry) if entry.exists => (entry.value, entry.timestamp),
            _ => (0, 0),
        };
        PredictionStatus {
            value,
            timestamp,
            is_resolved: self.resolved,
            actual: self.actual_value,
        }
    }

    pub fn info(&self) -> ArenaInfo {
        ArenaInfo {
            owner: self.owner,
            ai_bot: self.ai_bot,
            deadline: self.deadline,
            resolved: self.resolved,
            actual_value: self.actual_value,
            prediction_count: self.prediction_count,
        }
    }

    pub fn set_deadline(
        &mut self,
        caller: &Pubkey,
        new_deadline: i64,
        now: i64,
    ) -> ArenaResult<()> {
        self.ensure_owner(caller)?;
        if new_deadline <= now {
            return Err(ArenaError::InvalidDeadline);
        }
        self.deadline = new_deadline;
        Ok(())
    }

    pub fn set_owner(&mut self, caller: &Pubkey, new_owner: Pubkey) -> ArenaResult<()> {
        self.ensure_owner(caller)?;
        if new_owner == Pubkey::default() {
            return Err(ArenaError::InvalidOwner);
        }
        self.owner = new_owner;
        Ok(())
    }

    /// Setting the default pubkey disables the AI bot entry point.
    pub fn set_ai_bot(&mut self, caller: &Pubkey, new_ai_bot: Pubkey) -> ArenaResult<()> {
        self.ensure_owner(caller)?;
        self.ai_bot = new_ai_bot;
        Ok(())
    }
}

/// A participant's single prediction in an arena
#[account]
#[derive(Default, Debug)]
pub struct PredictionEntry {
    /// The arena this prediction belongs to
    pub arena: Pubkey,
    /// The identity that submitted it
    pub participant: Pubkey,
    /// The predicted value
    pub value: i64,
    /// Unix timestamp of submission
    pub timestamp: i64,
    /// Set once on first submission, never cleared
    pub exists: bool,
    /// Submitted through the AI bot entry point
    pub ai_bot: bool,
    /// Bump seed for this prediction PDA
    pub bump: u8,
}

impl PredictionEntry {
    /// discriminator(8) + pubkey(32)*2 + i64(8)*2 + bool(1)*2 + u8(1)
    pub const MAX_SIZE: usize = 8 + 32 + 32 + 8 + 8 + 1 + 1 + 1;
}

/// Returned by `view_status`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct PredictionStatus {
    pub value: i64,
    pub timestamp: i64,
    pub is_resolved: bool,
    pub actual: i64,
}

/// Returned by `get_info`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct ArenaInfo {
    pub owner: Pubkey,
    pub ai_bot: Pubkey,
    pub deadline: i64,
    pub resolved: bool,
    pub actual_value: i64,
    pub prediction_count: u32,
}
