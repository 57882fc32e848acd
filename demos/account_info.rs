use std::io;

use m4u_soap::GatewayClient;

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
    let info = client.get_account_info().await?;

    match info.account {
        Some(account) => println!(
            "type: {:?}, credit limit: {:?}, credit remaining: {:?}",
            account.account_type, account.credit_limit, account.credit_remaining
        ),
        None => println!("no account details returned"),
    }

    Ok(())
}
