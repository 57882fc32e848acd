use std::io;

use m4u_soap::{CheckReplies, ConfirmReplies, GatewayClient};

/// Prints pending replies. Set `M4U_CONFIRM=1` to acknowledge them afterwards;
/// without it the same replies are returned on the next run.
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
    let maximum = std::env::var("M4U_MAXIMUM")
        .ok()
        .map(|raw| raw.parse::<u32>())
        .transpose()?;

    let client = GatewayClient::new(username, password, false);
    let result = client.check_replies(CheckReplies { maximum }).await?;
    println!("returned: {}, remaining: {}", result.returned, result.remaining);
    for reply in &result.replies {
        println!(
            "[{}] uid={:?} from={:?} at={:?}: {:?}",
            reply.receipt_id, reply.uid, reply.origin, reply.received, reply.content
        );
    }

    if std::env::var("M4U_CONFIRM").is_ok() && !result.replies.is_empty() {
        let ids = result.replies.into_iter().map(|reply| reply.receipt_id);
        let confirmed = client.confirm_replies(ConfirmReplies::new(ids)).await?;
        println!("confirmed: {confirmed}");
    }

    Ok(())
}
