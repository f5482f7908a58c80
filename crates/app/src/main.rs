use gosense_assistant::session::ChatSession;
use gosense_core::common::time::{RealTimeProvider, TimeProvider};
use gosense_core::config::{AppConfig, LogConfig};
use gosense_core::market::port::RandomSource;
use gosense_core::notify::port::SoundCue;
use gosense_core::settings::entity::ToggleKind;
use gosense_manager::dashboard::DashboardService;
use gosense_manager::session::Session;
use gosense_manager::state::{Action, AppState, Selection};
use gosense_market::random::StdRandom;
use gosense_notify::center::NotificationCenter;
use gosense_notify::news::{Arrivals, NewsFeed, default_schedule};
use gosense_notify::rule::VolatilityRule;
use gosense_notify::sound::{LogCue, MutedCue};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// # Summary
/// 应用启动入口，纯粹的 DI 容器。
/// 负责加载配置、实例化所有具体实现并注入到 Session。
///
/// # Logic
/// 1. 加载配置并初始化全局日志。
/// 2. 实例化基础设施（时钟、随机源、提示音）。
/// 3. 构造仪表盘服务、聊天会话与新闻流，组装 Session。
/// 4. 按配置执行一次登录 -> 仪表盘 -> 预测的脚本化会话，输出 JSON 视图。
/// 5. 可选：向助手提问；开启新闻时等待模拟新闻送达或外部退出信号。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 配置与日志
    let config = load_config()?;
    let _guard = init_logging(&config.log);
    info!("GoSense starting...");

    // 2. 基础设施层
    let clock: Arc<dyn TimeProvider> = Arc::new(RealTimeProvider);
    let rng: Box<dyn RandomSource> = match config.session.seed {
        Some(seed) => Box::new(StdRandom::seeded(seed)),
        None => Box::new(StdRandom::from_entropy()),
    };
    let cue: Arc<dyn SoundCue> = if config.alerts.sound {
        Arc::new(LogCue)
    } else {
        Arc::new(MutedCue)
    };

    // 3. 应用服务层
    let dashboard = DashboardService::new(
        VolatilityRule::new(config.alerts.symbol.clone()),
        NotificationCenter::new(clock.clone()),
        cue.clone(),
        rng,
    );
    let chat = ChatSession::new(Duration::from_millis(config.assistant.reply_delay_ms));
    let news = NewsFeed::with_initial(clock);

    let mut state = AppState {
        selection: Selection {
            period: config.session.period.clone(),
            month: config.session.month.clone(),
            year: config.session.year,
        },
        ..AppState::default()
    };
    state.preferences.toggles.set(ToggleKind::Sound, config.alerts.sound);
    state
        .preferences
        .toggles
        .set(ToggleKind::RiskAlerts, config.alerts.risk_alerts);
    let mut session = Session::new(state, dashboard, chat, news, cue);

    // 4. 脚本化会话
    session.dispatch(Action::Login {
        username: Some(config.session.username.clone()),
    })?;
    info!(user = %session.state().username, "logged in");
    if let Some(view) = session.dashboard_view() {
        println!("{}", serde_json::to_string_pretty(view)?);
    }

    session.open_prediction()?;
    if let Some(view) = session.prediction_view() {
        println!("{}", serde_json::to_string_pretty(view)?);
    }
    println!("{}", serde_json::to_string_pretty(session.notifications())?);

    // 5. 助手与新闻
    if let Some(prompt) = config.assistant.prompt.as_deref() {
        let reply = session.ask(prompt).await?;
        println!("{}", reply.content);
    }

    if config.news.enabled {
        run_news(&mut session).await?;
    }

    info!("GoSense finished");
    Ok(())
}

/// # Summary
/// 分层加载配置：内置默认值 -> `config/default.toml`（可选）-> `GOSENSE__*` 环境变量。
fn load_config() -> Result<AppConfig, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::with_name("config/default").required(false))
        .add_source(
            config::Environment::with_prefix("GOSENSE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

/// # Summary
/// 初始化全局日志。
///
/// # Logic
/// 1. 优先使用 `RUST_LOG`，否则使用配置中的过滤器。
/// 2. 配置了日志目录时写入按天滚动的文件，否则输出到 stdout。
///
/// # Returns
/// 文件日志的后台写入守卫，必须持有到进程结束。
fn init_logging(log: &LogConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    match &log.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "gosense.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            None
        }
    }
}

/// # Summary
/// 等待模拟新闻依次送达，收到退出信号时提前结束。
async fn run_news(session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
    let (tx, mut rx) = mpsc::channel(8);
    let _arrivals = Arrivals::spawn(default_schedule(), tx);
    info!("waiting for news, press Ctrl+C to exit");

    loop {
        tokio::select! {
            item = rx.recv() => match item {
                Some(item) => {
                    session.receive_news(item);
                    println!("{}", serde_json::to_string_pretty(session.news().items())?);
                }
                None => break,
            },
            signal = tokio::signal::ctrl_c() => {
                signal?;
                info!("Shutdown signal received. Exiting...");
                break;
            }
        }
    }
    Ok(())
}
