use std::io;

use m4u_soap::{GatewayClient, SendMessage};
use tracing_subscriber::filter::LevelFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    let username = required_env("M4U_USERNAME")?;
    let password = required_env("M4U_PASSWORD")?;
    let phone = required_env("M4U_PHONE")?;
    let message = std::env::var("M4U_MESSAGE")
        .unwrap_or_else(|_| "Hello from the m4u-soap demo.".to_owned());
    let debug = std::env::var("M4U_DEBUG").is_ok();

    let client = GatewayClient::new(username, password, debug);
    let mut request = SendMessage::new(phone, message);
    if let Ok(message_id) = std::env::var("M4U_MESSAGE_ID") {
        request = request.message_id(message_id);
    }
    if let Ok(origin) = std::env::var("M4U_ORIGIN") {
        request = request.origin(origin);
    }

    let result = client.send_message(request).await?;
    println!(
        "sent: {}, scheduled: {}, failed: {}, errors: {:?}",
        result.sent, result.scheduled, result.failed, result.errors
    );

    Ok(())
}

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}
