//! Calls a running wordstat server: inline text, a URL and a file upload.

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::json;

const SERVER_URL: &str = "http://localhost:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    println!("1. Health Check:");
    let resp = client.get(format!("{SERVER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("2. Count Inline Text:");
    let resp = client
        .post(format!("{SERVER_URL}/count/text"))
        .json(&json!({ "text": "Hello world & good morning. The date is 18/05/2016" }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("3. Count Text From URL:");
    let resp = client
        .post(format!("{SERVER_URL}/count/text"))
        .json(&json!({ "url": "https://www.gutenberg.org/cache/epub/10/pg10.txt" }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    let body: serde_json::Value = resp.json().await?;
    println!("wordcount: {}", body["wordcount"]);
    println!("averageWordLength: {}", body["averageWordLength"]);
    println!(
        "mostFrequentlyOccuringWordLength: {}",
        body["mostFrequentlyOccuringWordLength"]
    );
    println!();

    println!("4. Count Uploaded File:");
    let part = Part::bytes(b"thy brother's blood".to_vec())
        .file_name("genesis.txt")
        .mime_str("text/plain")?;
    let resp = client
        .post(format!("{SERVER_URL}/count/file"))
        .multipart(Form::new().part("file", part))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("5. Empty Request (expect 400):");
    let resp = client
        .post(format!("{SERVER_URL}/count/text"))
        .json(&json!({}))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);

    Ok(())
}
