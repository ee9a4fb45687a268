use chrono::Utc;

/// Source of "now" for the use cases, swapped for a fixed clock in tests
pub trait ISys: Send + Sync {
    /// Milliseconds since the unix epoch
    fn get_timestamp_millis(&self) -> i64;
}

pub struct RealSys;

impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
