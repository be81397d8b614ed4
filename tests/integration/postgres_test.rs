//! PostgreSQL integration tests
//!
//! Run against a real database with
//! `TEST_DATABASE_URL=postgres://... cargo test -p recordshop-integration-tests -- --ignored`
//! or point `TEST_CONFIG_FILE_PATH` at an env file with the server's DB_* keys.
//! Every test truncates the `albums` table, so they run serially.

#![allow(dead_code)]

mod common;

use axum::http::{Method, StatusCode};
use recordshop_albums::Album;
use recordshop_db::{PgStore, Store};
use serde_json::json;
use serial_test::serial;

use common::{fixtures, postgres_app, send};

const NEEDS_DB: &str = "requires PostgreSQL via TEST_DATABASE_URL or TEST_CONFIG_FILE_PATH";

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL or TEST_CONFIG_FILE_PATH"]
#[serial]
async fn test_create_then_get_round_trips_through_postgres() {
    let (_pool, router) = postgres_app().await.expect(NEEDS_DB);

    let created = send(
        &router,
        Method::POST,
        "/v1/albums",
        Some(fixtures::test_album().to_string()),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.json()["id"], 1);

    let loaded = send(&router, Method::GET, "/v1/albums/1", None).await;
    assert_eq!(loaded.status, StatusCode::OK);
    assert_eq!(
        loaded.json(),
        json!({"id": 1, "title": "Test Album", "artist": "Test Artist", "price": 9.99})
    );
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL or TEST_CONFIG_FILE_PATH"]
#[serial]
async fn test_delete_twice_is_no_content() {
    let (_pool, router) = postgres_app().await.expect(NEEDS_DB);
    send(
        &router,
        Method::POST,
        "/v1/albums",
        Some(fixtures::test_album().to_string()),
    )
    .await;

    for _ in 0..2 {
        let response = send(&router, Method::DELETE, "/v1/albums/1", None).await;
        assert_eq!(response.status, StatusCode::NO_CONTENT);
    }

    let missing = send(&router, Method::GET, "/v1/albums/1", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL or TEST_CONFIG_FILE_PATH"]
#[serial]
async fn test_upsert_advances_id_sequence() {
    let (_pool, router) = postgres_app().await.expect(NEEDS_DB);
    let explicit = json!({"id": 40, "title": "Giant Steps", "artist": "John Coltrane", "price": 63.99});

    let saved = send(&router, Method::PUT, "/v1/albums", Some(explicit.to_string())).await;
    assert_eq!(saved.status, StatusCode::OK);
    assert_eq!(saved.json(), explicit);

    let created = send(
        &router,
        Method::POST,
        "/v1/albums",
        Some(fixtures::test_album().to_string()),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.json()["id"], 41);
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL or TEST_CONFIG_FILE_PATH"]
#[serial]
async fn test_upsert_below_sequence_keeps_sequence() {
    let (pool, _router) = postgres_app().await.expect(NEEDS_DB);
    let store = PgStore::<Album>::new(pool);

    for title in ["One", "Two", "Three"] {
        store
            .create(&Album {
                id: 0,
                title: title.to_string(),
                artist: "Various".to_string(),
                price: 5.0,
            })
            .await
            .unwrap();
    }

    let replaced = store
        .save(&Album {
            id: 2,
            title: "Two (Deluxe)".to_string(),
            artist: "Various".to_string(),
            price: 8.0,
        })
        .await
        .unwrap();
    assert_eq!(replaced.title, "Two (Deluxe)");

    let next = store
        .create(&Album {
            id: 0,
            title: "Four".to_string(),
            artist: "Various".to_string(),
            price: 5.0,
        })
        .await
        .unwrap();
    assert_eq!(next.id, 4);
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL or TEST_CONFIG_FILE_PATH"]
#[serial]
async fn test_list_is_ordered_and_missing_row_is_none() {
    let (pool, router) = postgres_app().await.expect(NEEDS_DB);

    let empty = send(&router, Method::GET, "/v1/albums", None).await;
    assert_eq!(empty.json(), json!([]));

    for title in ["Kind of Blue", "Moanin'"] {
        send(
            &router,
            Method::POST,
            "/v1/albums",
            Some(fixtures::album(title, "Various", 20.0).to_string()),
        )
        .await;
    }

    let store = PgStore::<Album>::new(pool);
    let all = store.find_all().await.unwrap();
    assert_eq!(
        all.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert!(store.find_one(999).await.unwrap().is_none());
    assert_eq!(store.delete(999).await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL or TEST_CONFIG_FILE_PATH"]
#[serial]
async fn test_concurrent_upserts_never_move_sequence_backwards() {
    let (pool, _router) = postgres_app().await.expect(NEEDS_DB);
    let store = PgStore::<Album>::new(pool);

    let writers: Vec<_> = (10..=50)
        .rev()
        .map(|id| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .save(&Album {
                        id,
                        title: format!("Take {id}"),
                        artist: "Various".to_string(),
                        price: 1.0,
                    })
                    .await
            })
        })
        .collect();
    for writer in writers {
        writer.await.unwrap().unwrap();
    }

    let next = store
        .create(&Album {
            id: 0,
            title: "After".to_string(),
            artist: "Various".to_string(),
            price: 1.0,
        })
        .await
        .unwrap();
    assert_eq!(next.id, 51);
}
