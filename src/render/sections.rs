use crate::domain::model::PageContent;
use crate::render::fragments;
use crate::render::page::PageDocument;

// 頁面錨點契約：選擇器固定，錨點不存在時該區塊靜默跳過
pub const HERO_SELECTOR: &str = ".hero";
pub const SERVICE_CARDS_SELECTOR: &str = ".service-cards .card";
pub const BEFORE_AFTER_SELECTOR: &str = r#"[data-gallery="before-after"]"#;
pub const TESTIMONIALS_SELECTOR: &str = r#"[data-gallery="testimonials"]"#;

/// 四個渲染程序一次執行；彼此獨立，順序無關
pub fn render_all(content: &PageContent, page: &mut PageDocument) {
    render_hero(content, page);
    render_service_cards(content, page);
    render_before_after(content, page);
    render_testimonials(content, page);
}

/// hero 區塊：把背景圖合併進錨點的 style 屬性
pub fn render_hero(content: &PageContent, page: &mut PageDocument) {
    let image = match &content.hero_background {
        Some(image) => image,
        None => return,
    };

    if !page.merge_style(HERO_SELECTOR, &fragments::hero_background_style(image)) {
        tracing::debug!("🔶 Hero anchor not found, skipping");
    }
}

/// 服務卡片：卡片與服務圖依位置配對，不是依識別字。
/// 卡片數與鍵數不一致時只處理重疊的部分。
pub fn render_service_cards(content: &PageContent, page: &mut PageDocument) {
    let mut inserted = 0;
    for (index, image) in content.service_images.iter().enumerate() {
        if let Some(image) = image {
            if page.prepend_html(SERVICE_CARDS_SELECTOR, index, &fragments::service_card_img(image))
            {
                inserted += 1;
            }
        }
    }

    if inserted > 0 {
        tracing::debug!("🖼️ Inserted {} service card images", inserted);
    }
}

/// 前後對照畫廊：依序追加項目
pub fn render_before_after(content: &PageContent, page: &mut PageDocument) {
    if content.before_after.is_empty() {
        return;
    }
    if !page.has(BEFORE_AFTER_SELECTOR) {
        tracing::debug!("🔶 Before/after anchor not found, skipping");
        return;
    }

    for entry in &content.before_after {
        page.append_html(BEFORE_AFTER_SELECTOR, &fragments::before_after_item(entry));
    }
}

/// 見證畫廊：依序追加卡片
pub fn render_testimonials(content: &PageContent, page: &mut PageDocument) {
    if content.testimonials.is_empty() {
        return;
    }
    if !page.has(TESTIMONIALS_SELECTOR) {
        tracing::debug!("🔶 Testimonials anchor not found, skipping");
        return;
    }

    for testimonial in &content.testimonials {
        page.append_html(TESTIMONIALS_SELECTOR, &fragments::testimonial_card(testimonial));
    }
}
