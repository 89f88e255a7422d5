//! Typed endpoints built on the injected [`Client`](crate::Client).

mod review;
pub use self::review::ReviewService;

mod metrics;
pub use self::metrics::ReviewMetricsService;

mod usages;
pub use self::usages::ReviewUsagesService;
