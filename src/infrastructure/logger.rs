//! 日志基础设施

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

pub type LoggerError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub struct Logger;

impl Logger {
    /// 由启动流程显式调用一次；设置了 `RUST_LOG` 时优先于配置中的级别
    pub fn init(config: &LoggingConfig) -> Result<(), LoggerError> {
        let filter = Self::filter(config);
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);

        if config.json {
            builder.json().try_init()
        } else {
            builder.compact().try_init()
        }
    }

    fn filter(config: &LoggingConfig) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
    }
}
