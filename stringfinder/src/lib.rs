pub mod config;
pub mod counter;
pub mod errors;
pub mod filters;
pub mod loader;
pub mod report;
pub mod results;
pub mod search;
pub mod walker;

pub use config::SearchConfig;
pub use counter::{count_occurrences, PatternCounter};
pub use errors::{SearchError, SearchResult};
pub use report::{format_report, Report};
pub use results::{FileMatch, SearchOutcome};
pub use search::{search, SearchCoordinator, SearchOutput};
pub use walker::collect_files;
