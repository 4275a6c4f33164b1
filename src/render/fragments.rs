use crate::domain::model::{BeforeAfterEntry, ImageRef, Testimonial};
use crate::render::page::{escape_attr, escape_text};
use std::fmt::Write;

/// 服務卡片圖的行內樣式，沿用頁面原本的呈現方式
const CARD_IMG_STYLE: &str = "max-width: 100%; margin-bottom: 1rem; border-radius: 8px";

/// 產生 <img> 片段；title 與 class 為空時省略
pub fn img_tag(image: &ImageRef, class: &str) -> String {
    let mut tag = format!(
        r#"<img src="{}" alt="{}""#,
        escape_attr(&image.src),
        escape_attr(&image.alt)
    );
    if let Some(title) = &image.title {
        let _ = write!(tag, r#" title="{}""#, escape_attr(title));
    }
    if !class.is_empty() {
        let _ = write!(tag, r#" class="{}""#, escape_attr(class));
    }
    tag.push('>');
    tag
}

/// hero 錨點要合併的樣式宣告；跳脫交給序列化端處理
pub fn hero_background_style(image: &ImageRef) -> String {
    format!("background-image: url('{}')", image.src)
}

/// 插進服務卡片開頭的圖片
pub fn service_card_img(image: &ImageRef) -> String {
    format!(
        r#"<img src="{}" alt="{}" style="{}">"#,
        escape_attr(&image.src),
        escape_attr(&image.alt),
        CARD_IMG_STYLE
    )
}

/// 前後對照畫廊的單一項目
pub fn before_after_item(entry: &BeforeAfterEntry) -> String {
    format!(
        concat!(
            r#"<div class="before-after-item">"#,
            r#"<div class="before-after-container">"#,
            r#"<div class="before">{before}<span class="label">Avant</span></div>"#,
            r#"<div class="after">{after}<span class="label">Après</span></div>"#,
            "</div>",
            r#"<p class="before-after-title">{title}</p>"#,
            r#"<p class="before-after-desc">{description}</p>"#,
            "</div>"
        ),
        before = img_tag(&entry.before, ""),
        after = img_tag(&entry.after, ""),
        title = escape_text(&entry.title),
        description = escape_text(&entry.description),
    )
}

/// 見證畫廊的單一卡片；星號字串長度等於 rating
pub fn testimonial_card(testimonial: &Testimonial) -> String {
    let stars = "⭐".repeat(usize::from(testimonial.rating));
    format!(
        concat!(
            r#"<div class="testimonial-card">"#,
            r#"<div class="testimonial-header">"#,
            r#"<img src="{image}" alt="{name_attr}" class="testimonial-avatar">"#,
            r#"<div class="testimonial-info">"#,
            r#"<p class="testimonial-name">{name}</p>"#,
            r#"<p class="testimonial-location">{location}</p>"#,
            r#"<div class="testimonial-rating">{stars}</div>"#,
            "</div>",
            "</div>",
            r#"<p class="testimonial-text">"{text}"</p>"#,
            r#"<p class="testimonial-service">{service}</p>"#,
            "</div>"
        ),
        image = escape_attr(&testimonial.image),
        name_attr = escape_attr(&testimonial.name),
        name = escape_text(&testimonial.name),
        location = escape_text(&testimonial.location),
        stars = stars,
        text = escape_text(&testimonial.text),
        service = escape_text(&testimonial.service),
    )
}
