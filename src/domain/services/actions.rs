#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::dispatch::bootstrap;
use super::dispatch::dispatch;
use crate::domain::models::Action;
use crate::domain::models::SharedBackend;
use crate::domain::models::Event;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /new (/n) - Starts a new chat.
- /model (/m) [MODEL_NAME] - Sets the model used for the next messages. Models containing "3.5" use the chat completions endpoint.
- /temperature (/t) [VALUE] - Sets the temperature. One of 0, 0.1, 0.2, 0.3, 0.5, 0.6, 0.7, 0.8, 0.9, 1.
- /logical, /balanced, /creative - Sets the temperature to 0, 0.5 or 1.
- /quit /exit (/q) - Exit Palaver.

HOTKEYS:
- Tab - Cycle focus between the prompt, the model list and the temperature list
- Up arrow - Scroll up, or move the selection in a list
- Down arrow - Scroll down, or move the selection in a list
- Enter - Send the prompt, or select the highlighted list entry
- CTRL+N - New chat
- F1 / F2 / F3 - Logical / Balanced / Creative temperature
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+C - Exit
        "#;

    return text.trim().to_string();
}

async fn list_models(backend: SharedBackend, tx: mpsc::UnboundedSender<Event>) -> Result<()> {
    match backend.list_models().await {
        Ok(models) => {
            tracing::debug!(count = models.len(), "Listed models");
            tx.send(Event::ModelListResponse(models))?;
        }
        Err(err) => {
            tracing::error!(error = ?err, "Failed to list models");
            tx.send(Event::ModelListFailed())?;
        }
    }

    return Ok(());
}

/// Runs remote calls on behalf of the UI. Calls that change the conversation
/// are handled one at a time in the order they were sent. Model listing only
/// fills the selector, so it runs on its own task and never holds up the
/// queue.
pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        backend: SharedBackend,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            match action {
                Action::ListModels() => {
                    let worker_tx = tx.clone();
                    let worker_backend = backend.clone();
                    tokio::spawn(async move {
                        if let Err(err) = list_models(worker_backend, worker_tx).await {
                            tracing::error!(error = ?err, "Failed to report model list");
                        }
                    });
                }
                Action::Bootstrap(model) => match bootstrap(backend.as_ref(), &model).await {
                    Ok(text) => {
                        tx.send(Event::BootstrapResponse(text))?;
                    }
                    Err(err) => {
                        tracing::error!(error = ?err, model = %model, "Bootstrap completion failed");
                        tx.send(Event::BootstrapFailed())?;
                    }
                },
                Action::Submit(prompt) => {
                    let model = prompt.model.to_string();
                    match dispatch(backend.as_ref(), prompt).await {
                        Ok(text) => {
                            tx.send(Event::CompletionResponse(text))?;
                        }
                        Err(err) => {
                            tracing::error!(error = ?err, model = %model, "Completion failed");
                            tx.send(Event::CompletionFailed())?;
                        }
                    }
                }
            }
        }

        return Ok(());
    }
}
