use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub service_name: String,
    pub listen_port: String,
    pub database_file: String,
    pub images_dir: String,
    pub positions_file: String,
    pub logo_file: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("service_name", "scoutdesk")?
            .set_default("listen_port", "8400")?
            .set_default("database_file", "scouting_database.csv")?
            .set_default("images_dir", "jugadores_img")?
            .set_default("positions_file", "posiciones.txt")?
            .set_default("logo_file", "escudo.png")?
            .add_source(Environment::default())
            .build()?;
        conf.try_deserialize()
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
