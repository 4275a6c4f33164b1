use crate::core::accessor::ImageAccessor;
use crate::core::catalog::{CatalogLoader, CatalogStore};
use crate::domain::model::PageContent;
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::render::page::PageDocument;
use crate::render::sections;
use crate::utils::error::{Result, SiteError};
use std::path::Path;
use std::time::Duration;

/// 行銷頁面的組裝管道：
/// extract 抓目錄、transform 組頁面內容、load 注入並輸出頁面。
pub struct SitePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SitePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn page_file_name(&self) -> String {
        Path::new(self.config.page_path())
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("index.html")
            .to_string()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SitePipeline<S, C> {
    async fn extract(&self) -> Result<CatalogStore> {
        let mut loader = CatalogLoader::new(self.config.catalog_endpoint());
        if let Some(seconds) = self.config.request_timeout_seconds() {
            loader = loader.with_timeout(Duration::from_secs(seconds));
        }
        let store = loader.store();

        // 抓取失敗不讓管道報錯：store 停在 Failed，渲染程序不執行
        tokio::spawn(loader.load());

        Ok(store)
    }

    async fn transform(&self, store: CatalogStore) -> Result<PageContent> {
        if !store.wait_ready().await {
            tracing::warn!("🔶 Catalog unavailable, page will keep its placeholders");
            return Ok(PageContent::default());
        }

        let images = ImageAccessor::new(store);

        let hero_background = images.get_image("hero.background");
        let service_images = self
            .config
            .service_keys()
            .iter()
            .map(|key| images.get_image(&format!("services.{}", key)))
            .collect::<Vec<_>>();
        let before_after = images.get_before_after();
        let testimonials = images.get_testimonials();

        tracing::info!(
            "🔄 Assembled page content: hero={}, services={}/{}, before/after={}, testimonials={}",
            hero_background.is_some(),
            service_images.iter().filter(|image| image.is_some()).count(),
            service_images.len(),
            before_after.len(),
            testimonials.len()
        );

        Ok(PageContent {
            hero_background,
            service_images,
            before_after,
            testimonials,
        })
    }

    async fn load(&self, content: PageContent) -> Result<String> {
        let raw = self.storage.read_file(self.config.page_path()).await?;
        let html = String::from_utf8(raw).map_err(|e| SiteError::ProcessingError {
            message: format!("Page is not valid UTF-8: {}", e),
        })?;

        // 沒有任何內容（含目錄載入失敗）時原樣輸出頁面
        let populated = if content.is_empty() {
            html
        } else {
            let mut page = PageDocument::parse(&html);
            sections::render_all(&content, &mut page);
            page.to_html()
        };

        let destination = format!("{}/{}", self.config.output_path(), self.page_file_name());
        self.storage
            .write_file(&destination, populated.as_bytes())
            .await?;

        tracing::info!("💾 Populated page saved to: {}", destination);
        Ok(destination)
    }
}
