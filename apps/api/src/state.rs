use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::warn;

use crate::content::QuestionBank;
use crate::errors::AppError;
use crate::llm_client::GenerationService;
use crate::preferences::{save_theme, KeyValueStore};
use crate::quiz::FinalizedAnswers;
use crate::recommendation::{request_recommendations, RecommendationError, VisitId};
use crate::session::{Command, Event, Screen, Session};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub bank: QuestionBank,
    /// `None` when no credential was configured at startup.
    pub generator: Option<Arc<dyn GenerationService>>,
    pub store: Arc<dyn KeyValueStore>,
    // Held across each theme write so writes reach the store in toggle order.
    persist: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(
        session: Session,
        generator: Option<Arc<dyn GenerationService>>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            bank: session.bank().clone(),
            session: Arc::new(Mutex::new(session)),
            generator,
            store,
            persist: Arc::new(Mutex::new(())),
        }
    }

    /// Applies `event` to the session, then carries out the resulting commands.
    /// Returns the screen as it stood right after the transition.
    pub async fn dispatch(&self, event: Event) -> Result<Screen, AppError> {
        let (commands, screen) = {
            let mut session = self.session.lock().await;
            let commands = session.handle(event)?;
            (commands, session.screen())
        };

        for command in commands {
            self.execute(command).await;
        }
        Ok(screen)
    }

    /// Renders the current screen. A pending redirect is reported once.
    pub async fn screen(&self) -> Screen {
        self.session.lock().await.screen()
    }

    async fn execute(&self, command: Command) {
        match command {
            Command::FetchRecommendations { visit, answers } => {
                self.spawn_fetch(visit, answers);
            }
            Command::PersistTheme => self.persist_theme().await,
        }
    }

    /// Writes the session's theme as it stands once the write slot is acquired, so
    /// the last write always carries the latest toggle.
    async fn persist_theme(&self) {
        let _slot = self.persist.lock().await;
        let theme = self.session.lock().await.theme();
        if let Err(e) = save_theme(self.store.as_ref(), theme).await {
            warn!("Failed to persist theme '{theme}': {e}");
        }
    }

    /// Runs the request off the handler path. The outcome is fed back to the session,
    /// which drops it if the visit is no longer current.
    fn spawn_fetch(&self, visit: VisitId, answers: FinalizedAnswers) {
        let session = Arc::clone(&self.session);
        let generator = self.generator.clone();
        let bank = self.bank.clone();

        tokio::spawn(async move {
            let outcome = match generator {
                Some(generator) => {
                    request_recommendations(generator.as_ref(), &bank, &answers).await
                }
                None => Err(RecommendationError::ConfigurationMissing),
            };
            let event = Event::RecommendationResolved { visit, outcome };
            if let Err(e) = session.lock().await.handle(event) {
                warn!("Recommendation outcome for visit {visit} rejected: {e}");
            }
        });
    }
}
