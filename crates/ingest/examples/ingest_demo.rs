use ingest::{
    resolve_request, resolve_upload, HttpContentFetcher, IngestConfig, UploadedFile,
    WordCountRequest,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fetcher = HttpContentFetcher::new(&IngestConfig::default())?;
    println!("content store: {}", fetcher.store_handle().root().display());

    let inline = resolve_request(
        WordCountRequest::text("Hello world & good morning. The date is 18/05/2016"),
        &fetcher,
    )
    .await?;
    println!("inline   -> {:?}: {}", inline.provenance, inline.text);

    let upload = UploadedFile::new(
        Some("genesis.txt".into()),
        &b"And the LORD said unto Cain, Where is Abel thy brother?"[..],
    );
    let uploaded = resolve_upload(Some(upload), &fetcher).await?;
    println!("uploaded -> {:?}: {}", uploaded.provenance, uploaded.text);

    match resolve_request(WordCountRequest::default(), &fetcher).await {
        Ok(_) => println!("empty request unexpectedly accepted"),
        Err(err) => println!("rejected -> {err} (status {})", err.http_status_code()),
    }

    Ok(())
}
