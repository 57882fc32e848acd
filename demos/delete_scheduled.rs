use std::io;

use m4u_soap::{DeleteScheduledMessages, GatewayClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("M4U_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "M4U_USERNAME environment variable is required",
        )
    })?;
    let password = std::env::var("M4U_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "M4U_PASSWORD environment variable is required",
        )
    })?;
    let message_ids = std::env::var("M4U_MESSAGE_IDS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "M4U_MESSAGE_IDS environment variable is required (comma-separated ids)",
        )
    })?;

    let client = GatewayClient::new(username, password, false);
    let request = DeleteScheduledMessages::new(message_ids.split(',').map(str::trim));
    let result = client.delete_scheduled_messages(request).await?;

    println!(
        "unscheduled: {}, errors: {:?}",
        result.unscheduled, result.errors
    );

    Ok(())
}
