use anyhow::Result;
use gmat_adaptive_test::config::Config;
use gmat_adaptive_test::orchestrator::App;
use gmat_adaptive_test::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用
    App::initialize(config)?.run().await?;

    Ok(())
}
