//! Serde default functions for config fields.

pub fn default_true() -> bool {
    true
}

pub fn default_api_host() -> String {
    "0.0.0.0".to_string()
}

pub fn default_api_port() -> u16 {
    8080
}

pub fn default_visualizer_url() -> String {
    "https://irvisualizer.jamesclonk.io".to_string()
}

pub fn default_jokes_url() -> String {
    "http://api.apekool.nl/services/jokes/getjoke.php".to_string()
}
