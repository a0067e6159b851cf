#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
};
use deezer_export::types::{Track, TrackAlbum, TrackArtist};
use serde_json::{Value, json};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

// Helper function to create a test track
pub fn create_test_track(title: &str, artist: &str, time_add: Option<i64>) -> Track {
    Track {
        title: title.to_string(),
        artist: TrackArtist {
            name: artist.to_string(),
        },
        album: TrackAlbum {
            title: format!("{} Album", artist),
        },
        duration: 200,
        link: format!("https://www.deezer.com/track/{}", title.len()),
        time_add,
    }
}

// Helper function to create the JSON the API returns for a track
pub fn track_json(title: &str) -> Value {
    json!({
        "id": 3135556,
        "title": title,
        "duration": 215,
        "link": format!("https://www.deezer.com/track/{}", title),
        "time_add": 1700000000,
        "artist": { "id": 27, "name": "Daft Punk" },
        "album": { "id": 302127, "title": "Discovery" },
        "type": "track"
    })
}

/// Pages served by [`serve_pages`] plus what the server saw.
#[derive(Clone)]
pub struct MockApi {
    pub base: String,
    pub pages: Arc<Vec<Vec<Value>>>,
    pub authorizations: Arc<Mutex<Vec<String>>>,
}

/// Serves `pages` as `/playlist/{id}/tracks?page=N`, linking each page to the
/// next one. Returns the base URL and the shared server state.
pub async fn serve_pages(pages: Vec<Vec<Value>>) -> MockApi {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let api = MockApi {
        base: base.clone(),
        pages: Arc::new(pages),
        authorizations: Arc::new(Mutex::new(Vec::new())),
    };

    let app = Router::new()
        .route("/playlist/{id}/tracks", get(paged_tracks))
        .with_state(api.clone());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    api
}

async fn paged_tracks(
    State(api): State<MockApi>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Json<Value> {
    if let Some(auth) = headers.get("authorization") {
        api.authorizations
            .lock()
            .unwrap()
            .push(auth.to_str().unwrap_or_default().to_string());
    }

    let index: usize = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(0);
    let total: usize = api.pages.iter().map(Vec::len).sum();

    let mut body = json!({
        "data": api.pages.get(index).cloned().unwrap_or_default(),
        "total": total,
    });

    if index + 1 < api.pages.len() {
        body["next"] = json!(format!(
            "{}/playlist/{}/tracks?page={}",
            api.base,
            id,
            index + 1
        ));
    }

    Json(body)
}

/// Serves a fixed status and body for every playlist request.
pub async fn serve_status(status: StatusCode, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let app = Router::new().route(
        "/playlist/{id}/tracks",
        get(move || async move { (status, body) }),
    );

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    base
}

/// First page is fine, its `next` link points to a page answering 500.
pub async fn serve_broken_second_page() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let next = format!("{}/broken", base);

    let app = Router::new()
        .route(
            "/playlist/{id}/tracks",
            get(move || {
                let next = next.clone();
                async move { Json(json!({ "data": [track_json("First")], "next": next })) }
            }),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
        );

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    base
}

/// Answers every connection with `status_line` and a body cut short of its
/// announced length, then hangs up.
pub async fn serve_truncated(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                // Wait for the request before answering
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Length: 100\r\nContent-Type: text/plain\r\n\r\nshort",
                    status_line
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    base
}
