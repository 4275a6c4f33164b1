pub mod accessor;
pub mod catalog;
pub mod engine;
pub mod path;
pub mod pipeline;

pub use crate::domain::model::{BeforeAfterEntry, ImageRef, PageContent, Testimonial};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
