use crate::core::catalog::CatalogStore;
use crate::domain::model::PageContent;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_endpoint(&self) -> &str;
    fn page_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn service_keys(&self) -> &[String];
    fn request_timeout_seconds(&self) -> Option<u64>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<CatalogStore>;
    async fn transform(&self, store: CatalogStore) -> Result<PageContent>;
    async fn load(&self, content: PageContent) -> Result<String>;
}
