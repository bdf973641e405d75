use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::conversation::catalog::{
    DEFAULT_DELAY_MAX_MS, DEFAULT_DELAY_MIN_MS, DEFAULT_REPLIES, DelayWindow, ReplyCatalog,
};

pub const DEFAULT_CONFIG_PATH: &str = "config/floating_chat.json";
pub const DEFAULT_TITLE: &str = "AI Assistant";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub start_open: bool,
    pub reply_delay_min_ms: u64,
    pub reply_delay_max_ms: u64,
    pub replies: Vec<String>,
    /// Seed cố định để câu trả lời có thể lặp lại (debug).
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            start_open: false,
            reply_delay_min_ms: DEFAULT_DELAY_MIN_MS,
            reply_delay_max_ms: DEFAULT_DELAY_MAX_MS,
            replies: DEFAULT_REPLIES.iter().map(|reply| reply.to_string()).collect(),
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn delay_window(&self) -> DelayWindow {
        match DelayWindow::new(self.reply_delay_min_ms, self.reply_delay_max_ms) {
            Some(window) => window,
            None => {
                log::warn!(
                    "Invalid reply delay window [{}, {}) ms; using defaults",
                    self.reply_delay_min_ms,
                    self.reply_delay_max_ms
                );
                DelayWindow::default()
            }
        }
    }

    pub fn catalog(&self) -> ReplyCatalog {
        ReplyCatalog::new(self.replies.iter().cloned()).unwrap_or_else(|| {
            log::warn!("Reply catalog in config is empty; using built-in replies");
            ReplyCatalog::default()
        })
    }

    /// Replaces unusable fields with their defaults, one field at a time.
    pub fn normalized(mut self) -> Self {
        let window = self.delay_window();
        self.reply_delay_min_ms = window.min().as_millis() as u64;
        self.reply_delay_max_ms = window.max().as_millis() as u64;
        self.replies = self.catalog().replies().to_vec();
        if self.title.trim().is_empty() {
            log::warn!("Empty chat title in config; using {DEFAULT_TITLE:?}");
            self.title = DEFAULT_TITLE.to_string();
        }
        self
    }
}

/// Đọc config; thiếu file hoặc sai cú pháp thì dùng mặc định.
pub fn load_config(path: impl AsRef<Path>) -> AppConfig {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::info!("Config file {} not found; using defaults", path.display());
            return AppConfig::default();
        }
        Err(err) => {
            log::warn!("Failed to read config file {}: {err}", path.display());
            return AppConfig::default();
        }
    };

    match serde_json::from_str::<AppConfig>(&content) {
        Ok(config) => {
            log::info!("Loaded chat config from {}", path.display());
            config.normalized()
        }
        Err(err) => {
            log::warn!("Failed to parse config file {}: {err}", path.display());
            AppConfig::default()
        }
    }
}

pub fn save_config(path: impl AsRef<Path>, config: &AppConfig) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut json = serde_json::to_string_pretty(config)?;
    json.push('\n');
    fs::write(path, json)
}
