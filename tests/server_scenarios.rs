use std::path::Path;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use sentiment_bayes::analysis::tokenize;
use sentiment_bayes::error::Result;
use sentiment_bayes::model::{Label, ModelStore, TrainingExample, fit, save_params};
use sentiment_bayes::server::{AppState, ClassifyResponse, INDEX_MESSAGE, router};
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::net::TcpListener;

fn write_model(path: &Path, label: Label) -> Result<()> {
    let model = fit(&[TrainingExample::new(label, tokenize("good shop"))])?;
    save_params(&model, path)
}

/// Serve the params at `params` on an ephemeral port and return its base URL.
async fn spawn_server(params: &Path, allow_reload: bool) -> Result<String> {
    let store = Arc::new(ModelStore::open(params)?);
    let app = router(AppState::new(store, params.to_path_buf()), allow_reload);
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Ok(base_url)
}

async fn classify(client: &Client, base_url: &str, text: &str) -> Label {
    let response = client
        .post(format!("{base_url}/api"))
        .json(&json!({ "text": text }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response.json::<ClassifyResponse>().await.unwrap().label
}

#[tokio::test]
async fn service_classifies_and_rejects_bad_bodies() -> Result<()> {
    let dir = TempDir::new()?;
    let params = dir.path().join("params.json");
    write_model(&params, Label::Positive)?;
    let base_url = spawn_server(&params, false).await?;
    let client = Client::new();

    let response = client.get(format!("{base_url}/")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), INDEX_MESSAGE);

    assert_eq!(classify(&client, &base_url, "Good shop").await, Label::Positive);

    let response = client
        .post(format!("{base_url}/api"))
        .json(&json!({ "message": "Good shop" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["kind"], "invalid_input");

    let response = client
        .post(format!("{base_url}/reload"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn reload_swaps_in_retrained_params() -> Result<()> {
    let dir = TempDir::new()?;
    let params = dir.path().join("params.json");
    write_model(&params, Label::Positive)?;
    let base_url = spawn_server(&params, true).await?;
    let client = Client::new();

    write_model(&params, Label::Negative)?;
    assert_eq!(classify(&client, &base_url, "good shop").await, Label::Positive);

    let response = client
        .post(format!("{base_url}/reload"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["vocabulary"], 2);

    assert_eq!(classify(&client, &base_url, "good shop").await, Label::Negative);

    Ok(())
}
