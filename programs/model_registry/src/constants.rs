pub const NAME_LEN: usize = 32;
pub const METRIC_LEN: usize = 16;
