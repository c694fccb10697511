//! Integration Tests for the cache-first PokeAPI client
//!
//! A tiny HTTP stub on a local TcpListener stands in for the PokeAPI and
//! counts how many requests actually reach it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use pokedex::repl::{self, Session};
use pokedex::{Cache, PokeApiClient, PokedexError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// == Helper Functions ==

struct Stub {
    base_url: String,
    hits: Arc<AtomicUsize>,
}

impl Stub {
    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Serves `routes` (path -> JSON body) and 404 for anything else.
async fn spawn_stub(routes: &[(&str, String)]) -> Stub {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes: Arc<HashMap<String, String>> = Arc::new(
        routes
            .iter()
            .map(|(path, body)| (path.to_string(), body.clone()))
            .collect(),
    );
    let hits = Arc::new(AtomicUsize::new(0));

    let counter = hits.clone();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let routes = routes.clone();
            let counter = counter.clone();
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                counter.fetch_add(1, Ordering::SeqCst);

                let request = String::from_utf8_lossy(&request);
                let path = request.split_whitespace().nth(1).unwrap_or("/");
                let (status, body) = match routes.get(path) {
                    Some(body) => ("200 OK", body.clone()),
                    None => ("404 Not Found", r#"{"detail":"Not found."}"#.to_string()),
                };
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    Stub {
        base_url: format!("http://{}/api/v2", addr),
        hits,
    }
}

fn pokemon_json(name: &str, base_experience: u32) -> String {
    serde_json::json!({
        "name": name,
        "base_experience": base_experience,
        "height": 7,
        "weight": 69,
        "stats": [{"base_stat": 45, "stat": {"name": "hp", "url": ""}}],
        "types": [{"slot": 1, "type": {"name": "grass", "url": ""}}]
    })
    .to_string()
}

fn client_for(stub: &Stub, interval: Duration) -> PokeApiClient {
    PokeApiClient::new(Cache::new(interval), stub.base_url.clone())
}

// == Fetch Tests ==

#[tokio::test]
async fn test_second_fetch_served_from_cache() {
    let stub = spawn_stub(&[("/api/v2/pokemon/bulbasaur", pokemon_json("bulbasaur", 64))]).await;
    let client = client_for(&stub, Duration::from_secs(60));

    let first = client.pokemon("bulbasaur").await.unwrap();
    let second = client.pokemon("bulbasaur").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(stub.hits(), 1);
    assert!(client
        .cache()
        .get(&client.pokemon_url("bulbasaur"))
        .await
        .is_some());
}

#[tokio::test]
async fn test_error_status_is_not_cached() {
    let stub = spawn_stub(&[]).await;
    let client = client_for(&stub, Duration::from_secs(60));

    for _ in 0..2 {
        let err = client.pokemon("missingno").await.unwrap_err();
        assert!(err.is_not_found(), "unexpected error: {}", err);
        assert!(matches!(err, PokedexError::Status { .. }));
    }

    assert_eq!(stub.hits(), 2);
    assert!(client.cache().is_empty().await);
}

#[tokio::test]
async fn test_expired_response_is_fetched_again() {
    let stub = spawn_stub(&[("/api/v2/pokemon/oddish", pokemon_json("oddish", 64))]).await;
    let client = client_for(&stub, Duration::from_millis(50));

    client.pokemon("oddish").await.unwrap();
    assert_eq!(stub.hits(), 1);

    // Past the two-interval worst case
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(client.cache().is_empty().await);

    client.pokemon("oddish").await.unwrap();
    assert_eq!(stub.hits(), 2);

    client.cache().close();
}

// == REPL Tests ==

#[tokio::test]
async fn test_repl_session_against_stub() {
    let first_page = serde_json::json!({
        "count": 2,
        "next": null,
        "previous": null,
        "results": [
            {"name": "canalave-city-area", "url": ""},
            {"name": "eterna-city-area", "url": ""}
        ]
    })
    .to_string();
    let area = serde_json::json!({
        "name": "canalave-city-area",
        "location": {"name": "canalave-city", "url": ""},
        "pokemon_encounters": [{"pokemon": {"name": "bulbasaur", "url": ""}}]
    })
    .to_string();

    let stub = spawn_stub(&[
        ("/api/v2/location-area/", first_page),
        ("/api/v2/location-area/canalave-city-area", area),
        ("/api/v2/pokemon/bulbasaur", pokemon_json("bulbasaur", 0)),
    ])
    .await;
    let client = client_for(&stub, Duration::from_secs(60));
    let mut session = Session::new(client.location_areas_url());
    let mut out = Vec::new();

    let script = "map\nmapb\nexplore canalave-city-area\nexplore canalave-city-area\n\
                  catch bulbasaur\ninspect bulbasaur\npokedex\nexplore nowhere\nexit\n";
    repl::run(script.as_bytes(), &mut out, "Pokedex > ", &mut session, &client)
        .await
        .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("canalave-city-area\neterna-city-area\n"));
    assert!(out.contains("you're on the first page"));
    assert_eq!(out.matches(" - bulbasaur").count(), 3);
    assert!(out.contains("bulbasaur was caught!"));
    assert!(out.contains("Name: bulbasaur\nHeight: 7\nWeight: 69\nStats:\n  -hp: 45\nTypes:\n  - grass\n"));
    assert!(out.contains("failed with status 404"));
    assert!(out.ends_with("Closing the Pokedex... Goodbye!\n"));

    // map, one explore (the repeat hits the cache), catch, the failed explore
    assert_eq!(stub.hits(), 4);
}
