//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, BootstrapConfig, BotConfig, ConfigError, CorsConfig, Environment,
    JwtConfig, RateLimitConfig, ServerConfig,
};
