use super::{Config, HistoryConfig, InputConfig, PathsConfig, Theme};

pub fn defaults() -> Config {
    Config {
        theme: Theme::default(),
        input: InputConfig::default(),
        paths: PathsConfig::default(),
        history: HistoryConfig::default(),
    }
}
