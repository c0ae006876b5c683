use super::*;

#[test]
fn test_discord_config_from_toml() {
    let toml_str = r#"
        enabled = true
        bot_token = "tok.abc"
    "#;
    let cfg: DiscordConfig = toml::from_str(toml_str).unwrap();
    assert!(cfg.enabled);
    assert_eq!(cfg.bot_token, "tok.abc");
}

#[test]
fn test_discord_config_token_default_empty() {
    let toml_str = r#"
        enabled = true
    "#;
    let cfg: DiscordConfig = toml::from_str(toml_str).unwrap();
    assert!(cfg.enabled);
    assert!(cfg.bot_token.is_empty());
}

#[test]
fn test_api_config_defaults() {
    let cfg = ApiConfig::default();
    assert!(cfg.enabled);
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 8080);
}

#[test]
fn test_visualizer_default_base_url() {
    let cfg = VisualizerConfig::default();
    assert_eq!(cfg.base_url, "https://irvisualizer.jamesclonk.io");
}

#[test]
fn test_jokes_default_base_url() {
    let cfg = JokesConfig::default();
    assert_eq!(cfg.base_url, "http://api.apekool.nl/services/jokes/getjoke.php");
}

#[test]
fn test_full_config_parse() {
    let toml_str = r#"
        [channel.discord]
        enabled = true
        bot_token = "tok.abc"

        [visualizer]
        base_url = "http://localhost:9000"

        [api]
        port = 9090
    "#;
    let config: Config = toml::from_str(toml_str).unwrap();
    let discord = config.channel.discord.unwrap();
    assert!(discord.enabled);
    assert_eq!(discord.bot_token, "tok.abc");
    assert_eq!(config.visualizer.base_url, "http://localhost:9000");
    assert_eq!(config.api.port, 9090);
    assert_eq!(config.api.host, "0.0.0.0");
}

#[test]
fn test_empty_config_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert!(config.channel.discord.is_none());
    assert!(config.api.enabled);
    assert_eq!(config.visualizer.base_url, "https://irvisualizer.jamesclonk.io");
    assert_eq!(config.jokes.base_url, "http://api.apekool.nl/services/jokes/getjoke.php");
}

#[test]
fn test_load_missing_file_falls_back_to_defaults() {
    let config = load("/nonexistent/pitwall-config.toml").unwrap();
    assert!(config.channel.discord.is_none());
    assert_eq!(config.api.port, 8080);
}
