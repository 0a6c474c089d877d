use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub business_name: String,
    pub whatsapp_phone: String,
    pub default_lang: String,
    pub payment_delay_ms: u64,
    pub chat_typing_delay_ms: u64,
    pub notification_stagger_ms: u64,
    /// Open booking drafts older than this are dropped.
    pub draft_ttl_minutes: i64,
    pub demo_seed: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "nailbook.db".to_string()),
            business_name: env::var("BUSINESS_NAME")
                .unwrap_or_else(|_| "Nailed It Studio".to_string()),
            whatsapp_phone: env::var("WHATSAPP_PHONE").unwrap_or_else(|_| "15555550123".to_string()),
            default_lang: env::var("DEFAULT_LANG").unwrap_or_else(|_| "en".to_string()),
            payment_delay_ms: millis("PAYMENT_DELAY_MS", 2000),
            chat_typing_delay_ms: millis("CHAT_TYPING_DELAY_MS", 800),
            notification_stagger_ms: millis("NOTIFICATION_STAGGER_MS", 1500),
            draft_ttl_minutes: env::var("DRAFT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|m: &i64| *m > 0)
                .unwrap_or(120),
            demo_seed: env::var("DEMO_SEED").ok().and_then(|v| v.parse().ok()),
        }
    }
}

fn millis(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
