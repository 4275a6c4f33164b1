use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// 頁面組裝引擎：依序驅動 extract → transform → load
pub struct RenderEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> RenderEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🚀 Starting page build");

        tracing::debug!("📥 Extract: fetching catalog");
        let store = self.pipeline.extract().await?;
        self.monitor.log_stage("Extract");

        tracing::debug!("🔄 Transform: assembling page content");
        let content = self.pipeline.transform(store).await?;
        self.monitor.log_stage("Transform");

        tracing::debug!("💾 Load: populating page");
        let output_path = self.pipeline.load(content).await?;
        self.monitor.log_stage("Load");

        self.monitor.log_final_stats();
        tracing::info!("✅ Page build finished: {}", output_path);
        Ok(output_path)
    }
}
