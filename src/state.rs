use std::sync::Arc;
use std::time::Duration;
use dashmap::DashMap;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::translate::{TranslateFactory, TranslateInterface};
use crate::widget::TranslatorWidget;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub translator: Arc<dyn TranslateInterface>,
    pub widgets: Arc<DashMap<String, WidgetSession>>,
}

pub struct WidgetSession {
    pub widget: Arc<TranslatorWidget>,
    pub last_touched: Instant,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let translator = TranslateFactory::create_translator(&config.translate_config)?;
        Ok(Self::with_translator(config, translator))
    }

    pub fn with_translator(config: Config, translator: Arc<dyn TranslateInterface>) -> Self {
        Self {
            config,
            translator,
            widgets: Arc::new(DashMap::new()),
        }
    }

    pub fn generate_widget_uid(&self) -> String {
        Uuid::new_v4().to_string()
    }

    /// Mount a fresh widget and return its session id
    pub fn open_widget(&self) -> (String, Arc<TranslatorWidget>) {
        let uid = self.generate_widget_uid();
        let widget = Arc::new(TranslatorWidget::new(self.translator.clone()));
        self.widgets.insert(
            uid.clone(),
            WidgetSession {
                widget: widget.clone(),
                last_touched: Instant::now(),
            },
        );
        (uid, widget)
    }

    /// Look up a widget and mark its session as used
    pub fn widget(&self, uid: &str) -> Option<Arc<TranslatorWidget>> {
        self.widgets.get_mut(uid).map(|mut session| {
            session.last_touched = Instant::now();
            session.widget.clone()
        })
    }

    pub fn close_widget(&self, uid: &str) -> bool {
        self.widgets.remove(uid).is_some()
    }

    /// Drop sessions idle for longer than `max_idle`; returns how many went
    pub fn sweep_idle(&self, max_idle: Duration) -> usize {
        let now = Instant::now();
        let before = self.widgets.len();
        self.widgets
            .retain(|_, session| now.duration_since(session.last_touched) <= max_idle);
        before.saturating_sub(self.widgets.len())
    }

    /// Periodically expire idle widget sessions
    pub fn spawn_session_sweeper(&self) -> JoinHandle<()> {
        let state = self.clone();
        let max_idle = Duration::from_secs(self.config.system_config.session_idle_secs);
        // Check a few times per idle window, at most once a minute
        let period = (max_idle / 4).clamp(Duration::from_secs(1), Duration::from_secs(60));

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let removed = state.sweep_idle(max_idle);
                if removed > 0 {
                    info!("Expired {} idle widget sessions", removed);
                }
            }
        })
    }
}
