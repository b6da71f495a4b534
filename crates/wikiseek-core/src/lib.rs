pub mod config;
pub mod http;
pub mod logging;
pub mod query;
pub mod redirector;
pub mod trigger;

pub use query::Query;
pub use redirector::{attempt_search, Action, Redirector, WIKIPEDIA_BASE};
pub use trigger::{Key, Navigator, SearchField, SearchWidget, TriggerEvent, WidgetState};
