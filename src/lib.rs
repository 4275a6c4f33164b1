pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use core::accessor::ImageAccessor;
pub use core::catalog::{CatalogLoader, CatalogStore, LoadState};
pub use core::{engine::RenderEngine, pipeline::SitePipeline};
pub use domain::model::{BeforeAfterEntry, ImageRef, PageContent, Testimonial};
pub use render::PageDocument;
pub use utils::error::{Result, SiteError};
