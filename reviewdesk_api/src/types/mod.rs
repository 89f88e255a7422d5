mod envelope;
pub use self::envelope::{ApiResponse, ErrorBody, Page};

mod review;
pub use self::review::{
    CreateReviewRequest, ReviewDetail, ReviewHistoryItem, ReviewID, ReviewResponse, Sentiment,
};

mod metric;
pub use self::metric::{ReviewMetricItem, ReviewMetricSummary, SentimentBreakdown};

mod usage;
pub use self::usage::{CreateReviewUsageRequest, ReviewUsageItem};
