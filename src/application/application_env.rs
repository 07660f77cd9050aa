use anyhow::anyhow;
use std::net::SocketAddr;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub seats_per_section: u32,

    pub max_http_content_len: usize,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("TRAIN_BOOKING_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("TRAIN_BOOKING_LOG_FILENAME")?;
        let bind_address = Self::env_var("TRAIN_BOOKING_BIND_ADDRESS")?.parse()?;
        let seats_per_section: u32 =
            Self::env_var("TRAIN_BOOKING_SEATS_PER_SECTION")?.parse()?;
        if seats_per_section == 0 {
            return Err(anyhow!(
                "TRAIN_BOOKING_SEATS_PER_SECTION need to be at least 1"
            ));
        }
        let max_http_content_len = Self::env_var("TRAIN_BOOKING_MAX_HTTP_CONTENT_LEN")?.parse()?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            seats_per_section,
            max_http_content_len,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
