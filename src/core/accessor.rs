use crate::core::catalog::CatalogStore;
use crate::core::path;
use crate::domain::model::{BeforeAfterEntry, ImageRef, Testimonial};
use serde_json::Value;

/// 目錄的型別化讀取層。全部 fail-soft：目錄尚未 Ready 或
/// 形狀不符時回傳 None / 空集合，不報錯。
#[derive(Clone)]
pub struct ImageAccessor {
    store: CatalogStore,
}

impl ImageAccessor {
    pub fn new(store: CatalogStore) -> Self {
        Self { store }
    }

    /// 以點記路徑取得原始 JSON 值
    pub fn get_value(&self, dotted_path: &str) -> Option<Value> {
        self.store
            .with_catalog(|catalog| path::resolve(catalog, dotted_path).cloned())
            .flatten()
    }

    /// 取得單張圖片（例：'hero.background'）
    pub fn get_image(&self, dotted_path: &str) -> Option<ImageRef> {
        let value = self.get_value(dotted_path)?;
        serde_json::from_value(value).ok()
    }

    pub fn get_before_after(&self) -> Vec<BeforeAfterEntry> {
        self.typed_sequence("beforeAfter")
    }

    /// 指定類別的前後對照項目，保持原始順序
    pub fn get_before_after_by_category(&self, category: &str) -> Vec<BeforeAfterEntry> {
        self.get_before_after()
            .into_iter()
            .filter(|entry| entry.category == category)
            .collect()
    }

    pub fn get_testimonials(&self) -> Vec<Testimonial> {
        self.typed_sequence("testimonials")
    }

    /// 指定服務的見證，保持原始順序
    pub fn get_testimonials_by_service(&self, service: &str) -> Vec<Testimonial> {
        self.get_testimonials()
            .into_iter()
            .filter(|testimonial| testimonial.service == service)
            .collect()
    }

    /// 社群連結；目錄中 social 整個映射是選填
    pub fn get_social_link(&self, platform: &str) -> Option<String> {
        let value = self.get_value(&format!("social.{}", platform))?;
        value.as_str().map(str::to_string)
    }

    /// services 映射的所有圖片，依文件中的鍵順序
    pub fn get_all_service_images(&self) -> Vec<ImageRef> {
        self.store
            .with_catalog(|catalog| {
                catalog
                    .get("services")
                    .and_then(Value::as_object)
                    .map(|services| {
                        services
                            .values()
                            .filter_map(|value| serde_json::from_value(value.clone()).ok())
                            .collect()
                    })
                    .unwrap_or_default()
            })
            .unwrap_or_default()
    }

    /// 完整目錄快照
    pub fn catalog(&self) -> Option<Value> {
        self.store.snapshot()
    }

    /// 諮詢性修改：只寫進記憶體中的目錄，需手動同步回 JSON 文件
    pub fn add_image(&self, dotted_path: &str, value: Value) {
        if self.store.insert_value(dotted_path, value) {
            tracing::debug!("✅ Image added: {}", dotted_path);
        } else {
            tracing::warn!("🔶 Catalog not loaded, ignoring add_image for: {}", dotted_path);
        }
    }

    fn typed_sequence<T: serde::de::DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.store
            .with_catalog(|catalog| {
                catalog
                    .get(key)
                    .and_then(Value::as_array)
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(|item| serde_json::from_value(item.clone()).ok())
                            .collect()
                    })
                    .unwrap_or_default()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::CatalogStore;
    use serde_json::json;

    fn ready_accessor(catalog: Value) -> ImageAccessor {
        let store = CatalogStore::new();
        store.set_ready(catalog);
        ImageAccessor::new(store)
    }

    fn sample_catalog() -> Value {
        json!({
            "hero": {
                "background": {"src": "images/hero/hero-bg.jpg", "alt": "Vue du chantier"}
            },
            "services": {
                "professional": {"src": "images/services/pro.jpg", "alt": "Pro"},
                "automobile": {"src": "images/services/auto.jpg", "alt": "Auto"},
                "trash": {"src": "images/services/poubelles.jpg", "alt": "Poubelles"}
            },
            "beforeAfter": [
                {
                    "id": "chantier-1",
                    "category": "demenagement",
                    "before": {"src": "images/before-after/avant-1.jpg", "alt": "Avant"},
                    "after": {"src": "images/before-after/apres-1.jpg", "alt": "Après"},
                    "title": "Déménagement complet",
                    "description": "Trois jours de travail"
                },
                {
                    "id": "bureaux-1",
                    "category": "bureaux",
                    "before": {"src": "images/before-after/avant-2.jpg", "alt": "Avant"},
                    "after": {"src": "images/before-after/apres-2.jpg", "alt": "Après"},
                    "title": "Nettoyage de bureaux",
                    "description": "Open space 200m2"
                }
            ],
            "testimonials": [
                {
                    "id": "testi-1",
                    "name": "Marie Dupont",
                    "location": "Lyon",
                    "image": "images/testimonials/marie.jpg",
                    "rating": 5,
                    "text": "Service impeccable",
                    "service": "Nettoyage automobile",
                    "date": "2025-03-10"
                },
                {
                    "id": "testi-2",
                    "name": "Jean Martin",
                    "location": "Paris",
                    "image": "images/testimonials/jean.jpg",
                    "rating": 4,
                    "text": "Très satisfait",
                    "service": "Déménagement",
                    "date": "2025-04-22"
                }
            ],
            "social": {
                "instagram": "https://instagram.com/example"
            }
        })
    }

    #[test]
    fn test_get_value_returns_exact_leaf() {
        let images = ready_accessor(json!({"hero": {"background": {"src": "a.jpg", "alt": "x"}}}));

        assert_eq!(
            images.get_value("hero.background"),
            Some(json!({"src": "a.jpg", "alt": "x"}))
        );
        assert_eq!(images.get_value("hero.missing"), None);
    }

    #[test]
    fn test_get_image_typed_lookup() {
        let images = ready_accessor(sample_catalog());

        let hero = images.get_image("hero.background").unwrap();
        assert_eq!(hero.src, "images/hero/hero-bg.jpg");
        assert_eq!(hero.alt, "Vue du chantier");

        assert!(images.get_image("hero.missing").is_none());
        // Leaf exists but is not an image shape
        assert!(images.get_image("hero").is_none());
    }

    #[test]
    fn test_before_after_filter_preserves_order() {
        let images = ready_accessor(sample_catalog());

        let all = images.get_before_after();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "chantier-1");

        let bureaux = images.get_before_after_by_category("bureaux");
        assert_eq!(bureaux.len(), 1);
        assert_eq!(bureaux[0].id, "bureaux-1");

        assert!(images.get_before_after_by_category("inconnu").is_empty());
    }

    #[test]
    fn test_testimonials_filter_by_service() {
        let images = ready_accessor(sample_catalog());

        assert_eq!(images.get_testimonials().len(), 2);

        let auto = images.get_testimonials_by_service("Nettoyage automobile");
        assert_eq!(auto.len(), 1);
        assert_eq!(auto[0].name, "Marie Dupont");

        assert!(images.get_testimonials_by_service("Inconnu").is_empty());
    }

    #[test]
    fn test_social_link_lookup() {
        let images = ready_accessor(sample_catalog());

        assert_eq!(
            images.get_social_link("instagram").as_deref(),
            Some("https://instagram.com/example")
        );
        assert!(images.get_social_link("facebook").is_none());

        // Catalog without a social mapping at all
        let images = ready_accessor(json!({"hero": {}}));
        assert!(images.get_social_link("instagram").is_none());
    }

    #[test]
    fn test_all_service_images_follow_key_order() {
        let images = ready_accessor(sample_catalog());

        let services = images.get_all_service_images();
        assert_eq!(services.len(), 3);
        assert_eq!(services[0].src, "images/services/pro.jpg");
        assert_eq!(services[1].src, "images/services/auto.jpg");
        assert_eq!(services[2].src, "images/services/poubelles.jpg");
    }

    #[test]
    fn test_add_image_then_get_value() {
        let images = ready_accessor(json!({}));

        images.add_image("services.nouveaux", json!({"src": "nouveau.jpg", "alt": "Nouveau"}));

        assert_eq!(
            images.get_value("services.nouveaux"),
            Some(json!({"src": "nouveau.jpg", "alt": "Nouveau"}))
        );
        let added = images.get_image("services.nouveaux").unwrap();
        assert_eq!(added.src, "nouveau.jpg");
    }

    #[test]
    fn test_accessor_is_fail_soft_before_ready() {
        let images = ImageAccessor::new(CatalogStore::new());

        assert!(images.get_value("hero.background").is_none());
        assert!(images.get_image("hero.background").is_none());
        assert!(images.get_before_after().is_empty());
        assert!(images.get_testimonials().is_empty());
        assert!(images.get_all_service_images().is_empty());
        assert!(images.get_social_link("instagram").is_none());
        assert!(images.catalog().is_none());

        // Advisory write is ignored, not an error
        images.add_image("hero.background", json!({"src": "a.jpg"}));
        assert!(images.get_value("hero.background").is_none());
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let images = ready_accessor(json!({
            "beforeAfter": [
                {"id": "ok", "category": "bureaux",
                 "before": {"src": "a.jpg"}, "after": {"src": "b.jpg"},
                 "title": "T", "description": "D"},
                {"id": "broken-no-images", "category": "bureaux"}
            ]
        }));

        let entries = images.get_before_after();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "ok");
    }
}
