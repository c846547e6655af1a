use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3333".to_string(),
            debug: false,
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let listen_addr =
        std::env::var("REPOHUB_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3333".to_string());

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config { listen_addr, debug })
}
