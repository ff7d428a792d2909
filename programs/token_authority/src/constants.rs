pub const MAX_ISSUERS: usize = 8;
pub const MAX_BATCH_MINT: usize = 100;
