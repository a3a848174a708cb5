use std::time::{Duration, Instant};

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use viewer_api::{ClientEvent, ClientHandle, ClientSettings};
use viewer_core::FeedQuery;

fn wait_for_event(handle: &ClientHandle) -> ClientEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = handle.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "timed out waiting for event");
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[tokio::test]
async fn handle_reports_completion_tagged_with_its_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a/feeds"))
        .and(query_param("page", "3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"feeds": []}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let handle = ClientHandle::new(ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
    .expect("handle starts");

    let query = FeedQuery {
        page: 3,
        ..FeedQuery::new()
    };
    handle.fetch_feeds(query.clone());

    let event = tokio::task::spawn_blocking(move || wait_for_event(&handle))
        .await
        .expect("poller finishes");
    match event {
        ClientEvent::FeedsLoaded {
            query: tagged,
            result,
        } => {
            assert_eq!(tagged, query);
            assert!(result.expect("fetch ok").is_empty());
        }
        other => panic!("unexpected event {other:?}"),
    }
}
