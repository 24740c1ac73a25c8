use dotenv::dotenv;
use gptclient::{ApiKey, CompletionProvider, completion};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = completion::with(ApiKey::Default)?.build()?;

    let text = client.send_request("Share a fun fact about Rust programming.")?;

    println!("Completion:\n{text}");

    Ok(())
}
