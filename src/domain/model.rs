use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 目錄中的單張圖片（hero 背景、服務圖、前後對照圖）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// 前後對照項目，依 category 篩選
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeforeAfterEntry {
    pub id: String,
    pub category: String,
    pub before: ImageRef,
    pub after: ImageRef,
    pub title: String,
    pub description: String,
}

/// 客戶見證，依 service 篩選
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub location: String,
    pub image: String,
    pub rating: u8,
    pub text: String,
    pub service: String,
    pub date: NaiveDate,
}

/// Transform 階段的產出：四個區塊要注入頁面的內容
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    pub hero_background: Option<ImageRef>,
    pub service_images: Vec<Option<ImageRef>>,
    pub before_after: Vec<BeforeAfterEntry>,
    pub testimonials: Vec<Testimonial>,
}

impl PageContent {
    pub fn is_empty(&self) -> bool {
        self.hero_background.is_none()
            && self.service_images.iter().all(|img| img.is_none())
            && self.before_after.is_empty()
            && self.testimonials.is_empty()
    }
}
