/// This example demonstrates the request/response inspection hooks for debugging.
///
/// The request inspector receives the JSON body before it is sent. The
/// response inspector receives the raw body text before parsing, including
/// error bodies that would otherwise come back as an empty completion.
///
/// Run with: cargo run --example inspector
use dotenv::dotenv;
use gptclient::{ApiKey, CompletionProvider, completion};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let client = completion::with(ApiKey::Default)?
        .max_tokens(64)
        .inspect_request(|req| {
            println!("━━━ REQUEST ━━━");
            println!(
                "{}",
                serde_json::to_string_pretty(req).unwrap_or_else(|_| req.to_string())
            );
            println!();
        })
        .inspect_response(|body| {
            println!("━━━ RESPONSE ━━━");
            println!("{body}");
            println!();
        })
        .build()?;

    let text = client.send_request("What's the weather like on Mars?")?;

    println!("━━━ FINAL RESULT ━━━");
    println!("{text}");

    Ok(())
}
