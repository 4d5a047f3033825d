use std::sync::Arc;
use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time;

use super::help_text;
use super::ActionsService;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Prompt;
use crate::domain::models::SharedBackend;
use crate::domain::services::fake_backend::Call;
use crate::domain::services::fake_backend::FakeBackend;

async fn run(backend: Arc<FakeBackend>, actions: Vec<Action>) -> Result<Vec<Event>> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    for action in actions {
        action_tx.send(action)?;
    }
    drop(action_tx);

    let shared: SharedBackend = backend;
    ActionsService::start(shared, event_tx, &mut action_rx).await?;

    let mut events = vec![];
    while let Some(event) = event_rx.recv().await {
        events.push(event);
    }

    return Ok(events);
}

fn prompt(text: &str, model: &str) -> Prompt {
    return Prompt {
        text: text.to_string(),
        model: model.to_string(),
        temperature: 0.0,
    };
}

fn is_model_list_event(event: &Event) -> bool {
    return matches!(
        event,
        Event::ModelListResponse(_) | Event::ModelListFailed()
    );
}

#[tokio::test]
async fn it_answers_in_submission_order() -> Result<()> {
    let backend = Arc::new(FakeBackend {
        models: Some(vec!["a".to_string(), "b".to_string()]),
        completion: Some("Greetings".to_string()),
        chat_completion: Some("Hello".to_string()),
        ..FakeBackend::default()
    });

    let events = run(
        backend.clone(),
        vec![
            Action::ListModels(),
            Action::Bootstrap("text-davinci-003".to_string()),
            Action::Submit(prompt("Hi", "gpt-3.5-turbo")),
        ],
    )
    .await?;

    assert_eq!(events.len(), 3);
    let (model_events, conversation_events): (Vec<Event>, Vec<Event>) =
        events.into_iter().partition(is_model_list_event);

    match &model_events[..] {
        [Event::ModelListResponse(models)] => assert_eq!(models, &vec!["a", "b"]),
        _ => bail!("Wrong enum"),
    }
    match &conversation_events[..] {
        [Event::BootstrapResponse(greeting), Event::CompletionResponse(reply)] => {
            assert_eq!(greeting, "Greetings");
            assert_eq!(reply, "Hello");
        }
        _ => bail!("Wrong enum"),
    }

    let calls = backend.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.contains(&Call::ListModels()));
    let conversation_calls = calls
        .into_iter()
        .filter(|call| return call != &Call::ListModels())
        .collect::<Vec<Call>>();
    assert!(matches!(conversation_calls[0], Call::Completion(_)));
    assert!(matches!(conversation_calls[1], Call::ChatCompletion(_)));

    return Ok(());
}

#[tokio::test]
async fn it_reports_failures_without_retrying() -> Result<()> {
    let backend = Arc::new(FakeBackend::default());

    let events = run(
        backend.clone(),
        vec![
            Action::ListModels(),
            Action::Bootstrap("text-davinci-003".to_string()),
            Action::Submit(prompt("Hi", "text-davinci-003")),
        ],
    )
    .await?;

    assert_eq!(events.len(), 3);
    let (model_events, conversation_events): (Vec<Event>, Vec<Event>) =
        events.into_iter().partition(is_model_list_event);

    assert!(matches!(&model_events[..], [Event::ModelListFailed()]));
    assert!(matches!(
        &conversation_events[..],
        [Event::BootstrapFailed(), Event::CompletionFailed()]
    ));
    assert_eq!(backend.calls().len(), 3);

    return Ok(());
}

#[tokio::test]
async fn it_bootstraps_while_the_model_list_hangs() -> Result<()> {
    let backend: SharedBackend = Arc::new(FakeBackend {
        models_never_answer: true,
        completion: Some("Greetings".to_string()),
        ..FakeBackend::default()
    });
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    action_tx.send(Action::ListModels())?;
    action_tx.send(Action::Bootstrap("text-davinci-003".to_string()))?;
    drop(action_tx);

    time::timeout(
        Duration::from_secs(2),
        ActionsService::start(backend, event_tx, &mut action_rx),
    )
    .await??;

    match time::timeout(Duration::from_secs(2), event_rx.recv()).await? {
        Some(Event::BootstrapResponse(text)) => assert_eq!(text, "Greetings"),
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_stops_when_the_ui_hangs_up() -> Result<()> {
    let events = run(Arc::new(FakeBackend::default()), vec![]).await?;
    assert!(events.is_empty());

    return Ok(());
}

#[test]
fn it_lists_slash_commands_in_help() {
    let text = help_text();
    assert!(text.starts_with("COMMANDS:"));
    assert!(text.contains("/new (/n)"));
    assert!(text.contains("CTRL+N - New chat"));
}
