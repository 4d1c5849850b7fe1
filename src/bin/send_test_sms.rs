use serde::Deserialize;

#[derive(Deserialize)]
struct MessageResponse {
    sid: String,
}

/// Operator smoke test: send one SMS through the configured Twilio account.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let to = std::env::args()
        .nth(1)
        .expect("Usage: send_test_sms <to> [message]");
    let body = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "Test message from the patient notification service".to_string());

    let account_sid = std::env::var("TWILIO_ACCOUNT_SID")?;
    let auth_token = std::env::var("TWILIO_AUTH_TOKEN")?;
    let from = std::env::var("TWILIO_FROM_NUMBER")?;

    let url = format!("https://api.twilio.com/2010-04-01/Accounts/{account_sid}/Messages.json");
    let resp = reqwest::Client::new()
        .post(url)
        .basic_auth(&account_sid, Some(&auth_token))
        .form(&[
            ("To", to.as_str()),
            ("From", from.as_str()),
            ("Body", body.as_str()),
        ])
        .send()
        .await?;

    let status = resp.status();
    if status.is_success() {
        let msg: MessageResponse = resp.json().await?;
        println!("{}", msg.sid);
        Ok(())
    } else {
        let text = resp.text().await.unwrap_or_default();
        eprintln!("send failed (HTTP {status}): {text}");
        std::process::exit(1);
    }
}
