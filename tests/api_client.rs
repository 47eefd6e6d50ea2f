//! Tests for DouyinApi with mocked HTTP responses.

use mockito::Matcher;
use serde_json::json;

use douyin_downloader::{Config, DouyinApi, Error};

fn make_config(media_api: &str, user_api: Option<&str>) -> Config {
    let mut config = Config::default();
    config.media_api = Some(media_api.to_string());
    config.user_api = user_api.map(|u| u.to_string());
    config
}

#[tokio::test]
async fn test_get_work_parses_descriptor() {
    let mut server = mockito::Server::new_async().await;
    let share_url = "https://v.douyin.com/abc123/";

    let mock = server
        .mock("GET", "/")
        .match_query(Matcher::UrlEncoded("url".into(), share_url.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "code": 0,
                "message": "ok",
                "data": {
                    "title": "海边日落",
                    "author": "作者",
                    "type": "video",
                    "items": [
                        {"type": "video", "video_url": "https://cdn.example.com/v.mp4"}
                    ]
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let config = make_config(&server.url(), None);
    let api = DouyinApi::new(&config).unwrap();

    let work = api.get_work(share_url).await.unwrap();
    assert_eq!(work.title, "海边日落");
    assert_eq!(work.author, "作者");
    assert_eq!(work.items.len(), 1);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_work_nonzero_code_is_extraction_error() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"code": 1, "message": "parse failed"}).to_string())
        .create_async()
        .await;

    let config = make_config(&server.url(), None);
    let api = DouyinApi::new(&config).unwrap();

    let err = api
        .get_work("https://v.douyin.com/abc123/")
        .await
        .unwrap_err();
    match err {
        Error::Extraction(message) => assert!(message.contains("parse failed")),
        other => panic!("expected Extraction error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_work_http_error() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let config = make_config(&server.url(), None);
    let api = DouyinApi::new(&config).unwrap();

    let err = api
        .get_work("https://v.douyin.com/abc123/")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Extraction(_)));
}

#[tokio::test]
async fn test_get_work_malformed_json() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let config = make_config(&server.url(), None);
    let api = DouyinApi::new(&config).unwrap();

    let err = api
        .get_work("https://v.douyin.com/abc123/")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Extraction(_)));
}

#[tokio::test]
async fn test_get_user_page_sends_cursor() {
    let mut server = mockito::Server::new_async().await;
    let user_url = "https://www.douyin.com/user/MS4wLjABAAAA";

    let mock = server
        .mock("GET", "/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("url".into(), user_url.into()),
            Matcher::UrlEncoded("cursor".into(), "token-7".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "code": 0,
                "data": {
                    "user": {"nickname": "nick", "uid": "42"},
                    "works": [
                        {"share_url": "https://v.douyin.com/a/", "desc": "d", "type": "video", "aweme_id": "1"}
                    ],
                    "works_count": 1
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let config = make_config("http://unused.example.com", Some(&server.url()));
    let api = DouyinApi::new(&config).unwrap();

    let page = api.get_user_page(user_url, "token-7").await.unwrap();
    assert_eq!(page.user.nickname, "nick");
    assert_eq!(page.works.len(), 1);
    assert!(page.cursor.is_none());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_user_page_without_user_api() {
    let config = make_config("http://media.example.com", None);
    let api = DouyinApi::new(&config).unwrap();

    let err = api
        .get_user_page("https://www.douyin.com/user/abc", "0")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingConfig(_)));
}

#[tokio::test]
async fn test_listing_failure_is_api_error() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let config = make_config("http://unused.example.com", Some(&server.url()));
    let api = DouyinApi::new(&config).unwrap();

    let err = api
        .get_user_page("https://www.douyin.com/user/abc", "0")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api(_)));
}
