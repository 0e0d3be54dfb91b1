use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Daily profit target as a fraction of the day's capital
pub const DAILY_TARGET_RATE: Decimal = dec!(0.01);

/// Maximum tolerated loss as a fraction of the day's capital
pub const MAX_STOP_LOSS_RATE: Decimal = dec!(0.02);

/// Maximum brokerage budget as a fraction of the day's capital
pub const MAX_BROKERAGE_RATE: Decimal = dec!(0.002);

/// Compounding factor applied per trading day to the projected capital curve
pub const PROJECTED_DAILY_GROWTH: Decimal = dec!(1.01);

/// Number of entries kept in the best/worst day leaderboards
pub const LEADERBOARD_SIZE: usize = 5;

/// Decimal precision for derived values
pub const DECIMAL_PRECISION: u32 = 6;

/// Theme used until the user picks one
pub const DEFAULT_THEME: &str = "system";

/// Minimum accepted password length on registration
pub const MIN_PASSWORD_LENGTH: usize = 6;
