use std::io;

use m4u_soap::{CheckReports, ConfirmReports, GatewayClient};

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
    let result = client.check_reports(CheckReports::default()).await?;
    println!("returned: {}, remaining: {}", result.returned, result.remaining);
    for report in &result.reports {
        println!(
            "[{}] uid={:?} to={:?} status={:?} at={:?}",
            report.receipt_id, report.uid, report.recipient, report.status, report.timestamp
        );
    }

    if std::env::var("M4U_CONFIRM").is_ok() && !result.reports.is_empty() {
        let ids = result.reports.into_iter().map(|report| report.receipt_id);
        let confirmed = client.confirm_reports(ConfirmReports::new(ids)).await?;
        println!("confirmed: {confirmed}");
    }

    Ok(())
}
