use std::io;

use m4u_soap::{BlockNumbers, GatewayClient, GetBlockedNumbers, UnblockNumbers};

/// `M4U_BLOCK` / `M4U_UNBLOCK` take comma-separated numbers; the current block
/// list is printed afterwards.
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

    let client = GatewayClient::new(username, password, false);

    if let Ok(raw) = std::env::var("M4U_BLOCK") {
        let result = client
            .block_numbers(BlockNumbers::new(raw.split(',').map(str::trim)))
            .await?;
        println!("blocked: {}, failed: {}", result.blocked, result.failed);
    }
    if let Ok(raw) = std::env::var("M4U_UNBLOCK") {
        let result = client
            .unblock_numbers(UnblockNumbers::new(raw.split(',').map(str::trim)))
            .await?;
        println!("unblocked: {}, failed: {}", result.unblocked, result.failed);
    }

    let result = client
        .get_blocked_numbers(GetBlockedNumbers::default())
        .await?;
    println!("found: {}, returned: {}", result.found, result.returned);
    for blocked in &result.numbers {
        println!("{} (uid {:?})", blocked.number.raw(), blocked.uid);
    }

    Ok(())
}
