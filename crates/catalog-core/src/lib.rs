pub mod aggregate;
pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod preview;

pub use aggregate::{
    TOP_N, additions_by_year, cast_corpus, flatten_field, split_multi_valued, top_values,
    type_distribution,
};
pub use catalog::{Catalog, load_catalog, load_catalog_from_reader};
pub use dashboard::{
    DEFAULT_YEAR_RANGE, Dashboard, DashboardOptions, DashboardSnapshot, PREVIEW_ROWS,
};
pub use error::{CoreError, Result};
pub use filter::{FilteredView, filter, matches};
pub use preview::{build_preview_dataframe, records_to_dataframe};
