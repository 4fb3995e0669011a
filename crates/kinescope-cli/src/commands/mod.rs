pub mod search;
pub mod status;
pub mod sync;
pub mod vocab;

pub use search::run_search;
pub use status::show_status;
pub use sync::{run_daemon, run_sync};
pub use vocab::show_vocab;
