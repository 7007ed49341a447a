pub mod browse;
pub mod model;
pub mod post;

pub use browse::{CategoryFilter, ListingBrowser, ListingFilter};
pub use model::{Category, Product, ProductStatus};
pub use post::{ImageFile, ListingDraft, PostOutcome, PostingForm, MAX_IMAGES};
