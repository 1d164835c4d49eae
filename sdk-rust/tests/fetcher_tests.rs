use axum::{
    http::{header, StatusCode},
    routing::get,
    Router,
};
use share_sdk::{DisplayRegistry, FetchError, ImageFetcher};

const BODY: &[u8] = b"\xff\xd8\xff\xe0 pretend this is a jpeg";

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture listener");
    let addr = listener.local_addr().expect("fixture local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve fixture");
    });
    format!("http://{addr}")
}

fn image_app() -> Router {
    Router::new().route(
        "/image",
        get(|| async { ([(header::CONTENT_TYPE, "image/jpeg")], BODY) }),
    )
}

#[tokio::test]
async fn fetch_materializes_body_and_allocates_display_reference() {
    let base = serve(image_app()).await;
    let registry = DisplayRegistry::default();
    let fetcher = ImageFetcher::new(registry.clone());

    let artifact = fetcher
        .fetch(&format!("{base}/image"))
        .await
        .expect("fetch succeeds");

    assert_eq!(artifact.data.as_ref(), BODY);
    assert_eq!(registry.live_count(), 1);
    assert_eq!(registry.resolve(artifact.display.url()), Some(artifact.data));
}

#[tokio::test]
async fn non_2xx_status_is_a_fetch_error_and_allocates_nothing() {
    let app = Router::new().route("/image", get(|| async { StatusCode::NOT_FOUND }));
    let base = serve(app).await;
    let registry = DisplayRegistry::default();
    let fetcher = ImageFetcher::new(registry.clone());

    let err = fetcher
        .fetch(&format!("{base}/image"))
        .await
        .expect_err("fetch fails");

    assert!(matches!(err, FetchError::Status(status) if status.as_u16() == 404));
    assert_eq!(registry.live_count(), 0);
}

#[tokio::test]
async fn dropping_a_superseded_artifact_releases_its_reference() {
    let base = serve(image_app()).await;
    let registry = DisplayRegistry::default();
    let fetcher = ImageFetcher::new(registry.clone());
    let url = format!("{base}/image");

    let first = fetcher.fetch(&url).await.expect("first fetch");
    let second = fetcher.fetch(&url).await.expect("second fetch");
    assert_eq!(registry.live_count(), 2);

    let first_url = first.display.url().to_string();
    drop(first);
    assert_eq!(registry.live_count(), 1);
    assert_eq!(registry.resolve(&first_url), None);
    assert!(registry.resolve(second.display.url()).is_some());
}
