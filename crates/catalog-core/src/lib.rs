pub mod debounce;
pub mod page;
pub mod query;
pub mod session;
pub mod similar;
pub mod views;

pub use debounce::{SearchDebouncer, SearchTicket};
pub use page::{paginate, Page};
pub use query::{run_query, ContentFilter, SortKey};
pub use session::Session;
pub use similar::similar_contents;
