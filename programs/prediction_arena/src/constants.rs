pub const ARENA_SEED: &[u8] = b"arena";
pub const PREDICTION_SEED: &[u8] = b"prediction";
