/// Decimal count assumed when an asset does not report one
pub const DEFAULT_TOKEN_DECIMALS: u32 = 18;

/// Fixed scale of protocol fee fields (performance fees, divest fee),
/// independent of the asset's own decimals
pub const FEE_DECIMALS: u32 = 4;

/// Largest decimal count the numeric type can represent
pub const MAX_SUPPORTED_DECIMALS: u32 = 28;

/// Padding applied on both sides of the vesting window when generating
/// a chart series (30 days)
pub const SCHEDULE_PADDING_SECONDS: i64 = 30 * 24 * 60 * 60;

/// Default number of steps in a vesting schedule series
pub const DEFAULT_SCHEDULE_STEPS: usize = 50;
