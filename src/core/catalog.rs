use crate::core::path;
use crate::utils::error::{Result, SiteError};
use reqwest::Client;
use serde_json::Value;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::sync::watch;

/// 目錄載入狀態機：Uninitialized → Loading → Ready | Failed。
/// Failed 是終態，不重試。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Uninitialized,
    Loading,
    Ready,
    Failed,
}

/// 行程範圍的目錄持有者。載入器寫入一次，之後只讀
/// （insert_value 的諮詢性修改除外）。
#[derive(Clone)]
pub struct CatalogStore {
    shared: Arc<Shared>,
}

struct Shared {
    catalog: RwLock<Option<Value>>,
    state_tx: watch::Sender<LoadState>,
}

impl CatalogStore {
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(LoadState::Uninitialized);
        Self {
            shared: Arc::new(Shared {
                catalog: RwLock::new(None),
                state_tx,
            }),
        }
    }

    pub fn state(&self) -> LoadState {
        *self.shared.state_tx.borrow()
    }

    pub fn is_ready(&self) -> bool {
        self.state() == LoadState::Ready
    }

    /// 等待載入結束；Ready 回傳 true，Failed 回傳 false。
    /// 晚訂閱者直接觀察到當前狀態，不會漏接通知。
    pub async fn wait_ready(&self) -> bool {
        let mut rx = self.shared.state_tx.subscribe();
        loop {
            match *rx.borrow_and_update() {
                LoadState::Ready => return true,
                LoadState::Failed => return false,
                LoadState::Uninitialized | LoadState::Loading => {}
            }
            if rx.changed().await.is_err() {
                return false;
            }
        }
    }

    /// 完整目錄快照；尚未 Ready 時為 None
    pub fn snapshot(&self) -> Option<Value> {
        self.shared
            .catalog
            .read()
            .ok()
            .and_then(|guard| guard.clone())
    }

    /// 以閉包讀取目錄，避免整份複製
    pub fn with_catalog<R>(&self, f: impl FnOnce(&Value) -> R) -> Option<R> {
        let guard = self.shared.catalog.read().ok()?;
        guard.as_ref().map(f)
    }

    /// 諮詢性的本地修改：只動記憶體中的目錄，不回寫來源文件。
    /// 目錄尚未載入時回傳 false。
    pub fn insert_value(&self, dotted_path: &str, value: Value) -> bool {
        let mut guard = match self.shared.catalog.write() {
            Ok(guard) => guard,
            Err(_) => return false,
        };
        match guard.as_mut() {
            Some(catalog) => {
                path::set(catalog, dotted_path, value);
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_loading(&self) {
        self.shared.state_tx.send_replace(LoadState::Loading);
    }

    pub(crate) fn set_ready(&self, catalog: Value) {
        if let Ok(mut guard) = self.shared.catalog.write() {
            *guard = Some(catalog);
        }
        self.shared.state_tx.send_replace(LoadState::Ready);
    }

    pub(crate) fn set_failed(&self) {
        self.shared.state_tx.send_replace(LoadState::Failed);
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

/// 目錄載入器：每次頁面組裝只抓一次
pub struct CatalogLoader {
    client: Client,
    endpoint: String,
    timeout: Option<Duration>,
    store: CatalogStore,
}

impl CatalogLoader {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout: None,
            store: CatalogStore::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn store(&self) -> CatalogStore {
        self.store.clone()
    }

    /// 執行唯一一次載入；消耗 self，無法重試。
    /// 抓取或解析失敗只記錄並轉入 Failed，不向外拋錯。
    pub async fn load(self) -> CatalogStore {
        self.store.set_loading();
        tracing::debug!("📡 Fetching catalog from: {}", self.endpoint);

        match self.fetch().await {
            Ok(catalog) => {
                tracing::info!("✅ Catalog loaded from {}", self.endpoint);
                self.store.set_ready(catalog);
            }
            Err(e) => {
                tracing::error!("❌ Failed to load catalog: {}", e);
                self.store.set_failed();
            }
        }

        self.store
    }

    async fn fetch(&self) -> Result<Value> {
        let mut request = self.client.get(&self.endpoint);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        tracing::debug!("📡 Catalog response status: {}", response.status());

        if !response.status().is_success() {
            return Err(SiteError::ProcessingError {
                message: format!(
                    "Catalog request failed with status: {}",
                    response.status()
                ),
            });
        }

        let catalog = response.json::<Value>().await?;
        Ok(catalog)
    }
}
