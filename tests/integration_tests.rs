use httpmock::prelude::*;
use site_etl::{CliConfig, LocalStorage, RenderEngine, SitePipeline};
use tempfile::TempDir;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Débarras Express</title></head>
<body>
<section class="hero"><h1>Débarras Express</h1></section>
<div class="service-cards">
<div class="card"><h3>Nettoyage professionnel</h3></div>
<div class="card"><h3>Nettoyage automobile</h3></div>
<div class="card"><h3>Nettoyage de poubelles</h3></div>
</div>
<div data-gallery="before-after"></div>
<div data-gallery="testimonials"></div>
</body>
</html>"#;

fn catalog_json() -> serde_json::Value {
    serde_json::json!({
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
                "description": "Open space"
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
            }
        ],
        "social": {
            "instagram": "https://instagram.com/debarras-express"
        }
    })
}

fn cli_config(endpoint: String, page_path: &str, output_path: &str) -> CliConfig {
    CliConfig {
        catalog_endpoint: endpoint,
        page_path: page_path.to_string(),
        output_path: output_path.to_string(),
        service_keys: vec![
            "professional".to_string(),
            "automobile".to_string(),
            "trash".to_string(),
        ],
        timeout_seconds: Some(10),
        verbose: false,
        monitor: false,
    }
}

#[tokio::test]
async fn test_end_to_end_page_population_with_real_http() {
    let temp_dir = TempDir::new().unwrap();
    let page_path = temp_dir.path().join("index.html");
    std::fs::write(&page_path, PAGE).unwrap();
    let output_dir = temp_dir.path().join("dist");

    let server = MockServer::start();
    let catalog_mock = server.mock(|when, then| {
        when.method(GET).path("/data/images.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(catalog_json());
    });

    let config = cli_config(
        server.url("/data/images.json"),
        page_path.to_str().unwrap(),
        output_dir.to_str().unwrap(),
    );

    let storage = LocalStorage::current_dir();
    let pipeline = SitePipeline::new(storage, config);
    let engine = RenderEngine::new_with_monitoring(pipeline, false);

    let result = engine.run().await;
    assert!(result.is_ok());
    catalog_mock.assert();

    let output_file = output_dir.join("index.html");
    assert!(output_file.exists());

    let html = std::fs::read_to_string(output_file).unwrap();

    // Hero background lands on the hero anchor
    assert!(html.contains(r#"style="background-image: url('images/hero/hero-bg.jpg')""#));

    // Service cards get their images by position, inserted first
    assert!(html.contains(r#"<div class="card"><img src="images/services/pro.jpg""#));
    assert!(html.contains(r#"<div class="card"><img src="images/services/auto.jpg""#));
    assert!(html.contains(r#"<div class="card"><img src="images/services/poubelles.jpg""#));

    // Both before/after entries, in catalog order, with French labels
    assert!(html.contains(r#"<span class="label">Avant</span>"#));
    assert!(html.contains(r#"<span class="label">Après</span>"#));
    let first = html.find("Déménagement complet").unwrap();
    let second = html.find("Nettoyage de bureaux").unwrap();
    assert!(first < second);

    // Testimonial card with a five-star rating
    assert!(html.contains(r#"<div class="testimonial-rating">⭐⭐⭐⭐⭐</div>"#));
    assert!(html.contains(r#"<p class="testimonial-name">Marie Dupont</p>"#));
}

#[tokio::test]
async fn test_page_without_some_anchors_is_partially_populated() {
    let temp_dir = TempDir::new().unwrap();
    let page_path = temp_dir.path().join("index.html");
    // No before/after and no testimonials anchors on this page
    std::fs::write(
        &page_path,
        r#"<html><body><section class="hero"></section></body></html>"#,
    )
    .unwrap();
    let output_dir = temp_dir.path().join("dist");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data/images.json");
        then.status(200).json_body(catalog_json());
    });

    let config = cli_config(
        server.url("/data/images.json"),
        page_path.to_str().unwrap(),
        output_dir.to_str().unwrap(),
    );

    let pipeline = SitePipeline::new(LocalStorage::current_dir(), config);
    let engine = RenderEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_ok());

    let html = std::fs::read_to_string(output_dir.join("index.html")).unwrap();
    assert!(html.contains("background-image"));
    assert!(!html.contains("before-after-item"));
    assert!(!html.contains("testimonial-card"));
}

#[tokio::test]
async fn test_catalog_fetch_failure_passes_page_through() {
    let temp_dir = TempDir::new().unwrap();
    let page_path = temp_dir.path().join("index.html");
    std::fs::write(&page_path, PAGE).unwrap();
    let output_dir = temp_dir.path().join("dist");

    let server = MockServer::start();
    let catalog_mock = server.mock(|when, then| {
        when.method(GET).path("/data/images.json");
        then.status(404);
    });

    let config = cli_config(
        server.url("/data/images.json"),
        page_path.to_str().unwrap(),
        output_dir.to_str().unwrap(),
    );

    let pipeline = SitePipeline::new(LocalStorage::current_dir(), config);
    let engine = RenderEngine::new(pipeline);

    // The build still completes; no renderer ran
    let result = engine.run().await;
    assert!(result.is_ok());
    catalog_mock.assert();

    let written = std::fs::read(output_dir.join("index.html")).unwrap();
    assert_eq!(written, PAGE.as_bytes());
}

#[tokio::test]
async fn test_missing_page_file_fails_the_build() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("dist");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data/images.json");
        then.status(200).json_body(catalog_json());
    });

    let config = cli_config(
        server.url("/data/images.json"),
        temp_dir.path().join("missing.html").to_str().unwrap(),
        output_dir.to_str().unwrap(),
    );

    let pipeline = SitePipeline::new(LocalStorage::current_dir(), config);
    let engine = RenderEngine::new(pipeline);

    assert!(engine.run().await.is_err());
}
