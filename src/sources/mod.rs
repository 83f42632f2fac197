pub mod prismic;

pub use prismic::PrismicSource;
