use gyan_client::QuizOutcome;
use gyan_client::api::QuizApiClient;
use gyan_client::config::Config;
use mimalloc::MiMalloc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.basic.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_level(true)
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    info!(
        base_url = %cfg.client.base_url,
        timeout_secs = ?cfg.client.timeout_secs,
        loglevel = %cfg.basic.loglevel,
        quiz.endpoint = ?cfg.quiz.endpoint,
        quiz.topic = %cfg.quiz.topic,
        quiz.num_questions = cfg.quiz.num_questions.get(),
        quiz.difficulty = %cfg.quiz.difficulty,
    );

    let credentials = cfg
        .credentials
        .as_ref()
        .ok_or("credentials.identifier and credentials.password must be configured")?;

    let client = QuizApiClient::new(&cfg.client)?;
    let token = client.login(credentials).await?;

    let request = cfg.quiz.request();
    let payload = client
        .request_quiz(cfg.quiz.endpoint, Some(&token), &request)
        .await?;

    match payload.outcome() {
        Ok(QuizOutcome::Questions(questions)) => {
            info!(questions = questions.len(), "Quiz generated");
        }
        Ok(QuizOutcome::Rejected(reason)) => {
            warn!(reason = %reason, "Generator refused the topic");
        }
        Err(error) => {
            warn!(%error, "Payload does not follow the question layout; printing as-is");
        }
    }

    println!("{}", serde_json::to_string_pretty(payload.as_value())?);
    Ok(())
}
