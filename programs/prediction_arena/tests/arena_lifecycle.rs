use anchor_lang::prelude::*;
use prediction_arena::errors::{ArenaError, ArenaResult};
use prediction_arena::state::{Arena, ArenaInfo, PredictionEntry, PredictionStatus};
use std::collections::HashMap;

const NOW: i64 = 1_727_000_000;
const DEADLINE: i64 = NOW + 3600;

/// One arena plus the prediction accounts that would live at each
/// participant's PDA.
struct Harness {
    key: Pubkey,
    owner: Pubkey,
    arena: Arena,
    predictions: HashMap<Pubkey, PredictionEntry>,
}

impl Harness {
    fn new() -> Self {
        let owner = Pubkey::new_unique();
        let mut arena = Arena::default();
        arena.initialize(owner, 7, DEADLINE, NOW, 254).unwrap();
        Self {
            key: Pubkey::new_unique(),
            owner,
            arena,
            predictions: HashMap::new(),
        }
    }

    fn submit(&mut self, participant: Pubkey, value: i64, now: i64) -> ArenaResult<()> {
        let entry = self.predictions.entry(participant).or_default();
        self.arena
            .record_prediction(entry, self.key, participant, value, false, now)
    }

    fn submit_ai_bot(&mut self, caller: Pubkey, value: i64, now: i64) -> ArenaResult<()> {
        self.arena.ensure_ai_bot(&caller)?;
        let entry = self.predictions.entry(caller).or_default();
        self.arena
            .record_prediction(entry, self.key, caller, value, true, now)
    }

    fn abs_error(&self, participant: &Pubkey) -> ArenaResult<u64> {
        self.arena.abs_error(self.predictions.get(participant))
    }

    fn status(&self, participant: &Pubkey) -> PredictionStatus {
        self.arena.status_of(self.predictions.get(participant))
    }
}

#[test]
fn full_round_settles_and_reports_errors() {
    let mut h = Harness::new();
    let user_a = Pubkey::new_unique();
    let owner = h.owner;

    h.submit(user_a, 4200, NOW + 5).unwrap();
    assert_eq!(
        h.submit(user_a, 4300, NOW + 6),
        Err(ArenaError::AlreadySubmitted)
    );

    h.arena.resolve(&owner, 4250, DEADLINE + 1).unwrap();
    assert_eq!(h.abs_error(&user_a), Ok(50));

    assert_eq!(
        h.arena.resolve(&owner, 4300, DEADLINE + 2),
        Err(ArenaError::AlreadyResolved)
    );
    assert_eq!(h.arena.actual_value, 4250);
    assert_eq!(h.abs_error(&user_a), Ok(50));
}

#[test]
fn ai_bot_path_is_restricted_to_configured_bot() {
    let mut h = Harness::new();
    let bot = Pubkey::new_unique();
    let stranger = Pubkey::new_unique();
    let owner = h.owner;

    assert_eq!(
        h.submit_ai_bot(bot, 4150, NOW),
        Err(ArenaError::OnlyAIBot)
    );

    h.arena.set_ai_bot(&owner, bot).unwrap();
    assert_eq!(h.arena.info().ai_bot, bot);

    h.submit_ai_bot(bot, 4150, NOW).unwrap();
    assert_eq!(
        h.submit_ai_bot(stranger, 4200, NOW),
        Err(ArenaError::OnlyAIBot)
    );
    assert!(!h.predictions.contains_key(&stranger));

    let entry = &h.predictions[&bot];
    assert!(entry.exists);
    assert!(entry.ai_bot);
    assert_eq!(entry.value, 4150);

    // the bot is still bound by the one-entry rule and the deadline
    assert_eq!(
        h.submit_ai_bot(bot, 4160, NOW + 1),
        Err(ArenaError::AlreadySubmitted)
    );
    assert_eq!(
        h.submit(Pubkey::new_unique(), 1, DEADLINE),
        Err(ArenaError::DeadlinePassed)
    );
}

#[test]
fn every_identity_gets_exactly_one_entry() {
    let mut h = Harness::new();
    let users: Vec<Pubkey> = (0..8).map(|_| Pubkey::new_unique()).collect();

    for (i, user) in users.iter().enumerate() {
        h.submit(*user, i as i64 * 100, NOW + i as i64).unwrap();
    }
    for user in &users {
        assert_eq!(h.submit(*user, -1, NOW + 100), Err(ArenaError::AlreadySubmitted));
    }

    assert_eq!(h.arena.prediction_count, users.len() as u32);
    for (i, user) in users.iter().enumerate() {
        assert_eq!(h.predictions[user].value, i as i64 * 100);
        assert_eq!(h.predictions[user].timestamp, NOW + i as i64);
    }
}

#[test]
fn deadline_boundary() {
    let mut h = Harness::new();
    let owner = h.owner;

    h.submit(Pubkey::new_unique(), 1, DEADLINE - 1).unwrap();
    assert_eq!(
        h.submit(Pubkey::new_unique(), 1, DEADLINE),
        Err(ArenaError::DeadlinePassed)
    );

    assert_eq!(
        h.arena.resolve(&owner, 1, DEADLINE - 1),
        Err(ArenaError::DeadlineNotReached)
    );
    h.arena.resolve(&owner, 1, DEADLINE).unwrap();
}

#[test]
fn extended_deadline_reopens_submissions_window() {
    let mut h = Harness::new();
    let owner = h.owner;
    let late = Pubkey::new_unique();

    h.arena.set_deadline(&owner, DEADLINE + 600, NOW).unwrap();

    h.submit(late, 99, DEADLINE + 10).unwrap();
    assert_eq!(
        h.arena.resolve(&owner, 100, DEADLINE + 10),
        Err(ArenaError::DeadlineNotReached)
    );
}

#[test]
fn rejected_admin_calls_leave_state_untouched() {
    let mut h = Harness::new();
    let owner = h.owner;
    let stranger = Pubkey::new_unique();
    let before = h.arena.info();

    assert_eq!(
        h.arena.set_deadline(&owner, NOW - 1, NOW),
        Err(ArenaError::InvalidDeadline)
    );
    assert_eq!(
        h.arena.set_owner(&owner, Pubkey::default()),
        Err(ArenaError::InvalidOwner)
    );
    assert_eq!(
        h.arena.set_owner(&stranger, stranger),
        Err(ArenaError::NotOwner)
    );
    assert_eq!(
        h.arena.resolve(&stranger, 1, DEADLINE),
        Err(ArenaError::NotOwner)
    );

    assert_eq!(h.arena.info(), before);
}

#[test]
fn ownership_transfer_moves_resolution_rights() {
    let mut h = Harness::new();
    let old_owner = h.owner;
    let new_owner = Pubkey::new_unique();

    h.arena.set_owner(&old_owner, new_owner).unwrap();

    assert_eq!(
        h.arena.resolve(&old_owner, 5, DEADLINE),
        Err(ArenaError::NotOwner)
    );
    h.arena.resolve(&new_owner, 5, DEADLINE).unwrap();
    assert!(h.arena.resolved);
}

#[test]
fn queries_are_stable_and_hide_unsettled_entries() {
    let mut h = Harness::new();
    let user = Pubkey::new_unique();
    let nobody = Pubkey::new_unique();
    let owner = h.owner;

    h.submit(user, 4200, NOW + 3).unwrap();

    assert_eq!(h.abs_error(&user), Err(ArenaError::NotResolved));
    assert_eq!(h.abs_error(&nobody), Err(ArenaError::NotResolved));
    assert_eq!(
        h.status(&user),
        PredictionStatus {
            value: 4200,
            timestamp: NOW + 3,
            is_resolved: false,
            actual: 0,
        }
    );

    h.arena.resolve(&owner, 4250, DEADLINE).unwrap();

    assert_eq!(h.abs_error(&nobody), Err(ArenaError::NoPrediction));
    assert_eq!(h.status(&nobody).value, 0);
    assert_eq!(h.status(&nobody).timestamp, 0);

    let first = (h.status(&user), h.arena.info(), h.abs_error(&user));
    let second = (h.status(&user), h.arena.info(), h.abs_error(&user));
    assert_eq!(first, second);
    assert_eq!(
        first.1,
        ArenaInfo {
            owner,
            ai_bot: Pubkey::default(),
            deadline: DEADLINE,
            resolved: true,
            actual_value: 4250,
            prediction_count: 1,
        }
    );
}

#[test]
fn prediction_values_cover_full_range() {
    let mut h = Harness::new();
    let low = Pubkey::new_unique();
    let high = Pubkey::new_unique();
    let owner = h.owner;

    h.submit(low, i64::MIN, NOW).unwrap();
    h.submit(high, i64::MAX, NOW).unwrap();
    h.arena.resolve(&owner, 0, DEADLINE).unwrap();

    assert_eq!(h.abs_error(&low), Ok(i64::MIN.unsigned_abs()));
    assert_eq!(h.abs_error(&high), Ok(i64::MAX as u64));
}
