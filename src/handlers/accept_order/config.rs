use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Order accepted when no id is given on the command line.
    pub order_id: Option<String>,

    /// Page the driver is on before accepting.
    #[serde(default = "default_initial_path")]
    pub initial_path: String,
}

fn default_initial_path() -> String {
    "/driver_home".to_owned()
}
