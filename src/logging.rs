//! 日志初始化

use tracing_subscriber::EnvFilter;

/// 初始化全局 tracing 订阅者
///
/// `RUST_LOG` 存在时优先生效，否则使用配置中的日志级别。重复调用不会报错。
pub fn init(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{log_level},tower_http=info")));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing 订阅者已初始化，跳过");
    }
}
