use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_from_number: String,
}

impl Config {
    /// Read configuration once at startup. Missing Twilio credentials or the
    /// database URL are startup-fatal; there is no runtime re-read.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let twilio_account_sid = env::var("TWILIO_ACCOUNT_SID")?;
        let twilio_auth_token = env::var("TWILIO_AUTH_TOKEN")?;
        let twilio_from_number = env::var("TWILIO_FROM_NUMBER")?;

        Ok(Self {
            database_url,
            bind_addr,
            twilio_account_sid,
            twilio_auth_token,
            twilio_from_number,
        })
    }
}
