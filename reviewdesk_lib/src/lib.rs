//! Library layer for ReviewDesk: view state for the review analysis, history,
//! metrics and usages screens, plus the form, number and table models those
//! screens are built from.
//!
//! Wraps the `reviewdesk_api` crate with paginated list controllers that
//! ignore stale responses, input validation, and settings from the
//! environment.

pub mod analysis;
pub mod badge;
pub mod columns;
pub mod data_table;
pub mod detail;
pub mod error;
pub mod form_field;
pub mod metrics;
pub mod number_field;
pub mod paging;
pub mod settings;
pub mod sources;
pub mod validation;

pub use reviewdesk_api;
pub use reviewdesk_api::types;
pub use reviewdesk_api::{ApiError, ApiErrorCode, Client, RequestOptions};

pub use analysis::AnalysisSession;
pub use data_table::{Column, DataTable, TableState};
pub use detail::ReviewDetailView;
pub use error::ReviewDeskError;
pub use form_field::{compose, FormFieldDescriptor, FormFieldInstance, FormFieldLayout};
pub use metrics::MetricsView;
pub use number_field::{snap_to_step, NumberBounds, NumberField};
pub use paging::{ListController, ListSnapshot, PageSource, PAGE_SIZE};
pub use settings::Settings;
pub use sources::{history_list, usages_list, HistoryList, HistorySource, MetricsSource, UsagesList, UsagesSource};
