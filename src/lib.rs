pub mod types;
pub mod schema;
pub mod date_format;
pub mod normalize;
pub mod traits;
pub mod listing;
pub mod reading_time;
pub mod sources;

pub use types::*;
pub use traits::ContentSource;
pub use listing::{initialize, load_next, ListingConfig, PostListing, RevealWindow};
pub use reading_time::estimate;
pub use sources::PrismicSource;
