//! Investigation Runner
//!
//! Drives one investigation end to end: builds the agent prompt, spawns
//! the agent, feeds its stdout through the translator, and emits the
//! resulting lifecycle events over a bounded channel. A full channel
//! blocks production (backpressure); a closed channel means the
//! subscriber disconnected, which cancels the investigation: the agent
//! is killed, transient state is discarded, and no verdict is produced.

use serde_json::json;
use tokio::sync::mpsc;
use tracing::{info, warn};

use scolo_checks::RUNNER_BIN;

use crate::models::project::Project;
use crate::services::audit::{AuditKind, AuditLog};
use crate::utils::error::{AppError, AppResult};

use super::events::{ErrorPayload, InvestigationEvent, StartedPayload};
use super::executor::{AgentConfig, AgentExecutor};
use super::message::AgentMessage;
use super::translator::EventTranslator;

/// Capacity of the outbound event channel
pub const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Service that runs investigations
#[derive(Debug, Clone)]
pub struct InvestigationService {
    config: AgentConfig,
    audit: AuditLog,
}

impl InvestigationService {
    /// Create a service with the given agent configuration and audit sink
    pub fn new(config: AgentConfig, audit: AuditLog) -> Self {
        Self { config, audit }
    }

    /// Build the investigation prompt for a project: one exact runner
    /// command per selected check, to be executed in parallel.
    pub fn build_prompt(project: &Project) -> String {
        let mut prompt = format!(
            "You are a compliance screening agent investigating \"{}\" ({}).\n\n\
             Run each of the following commands using the Bash tool. \
             Run them in parallel where possible:\n\n",
            project.entity_name, project.entity_type
        );

        for check in &project.checks {
            // geo_risk screens the country, everything else the entity
            let arg = if check.key == "geo_risk" && !project.country.is_empty() {
                &project.country
            } else {
                &project.entity_name
            };
            prompt.push_str(&format!("{} {} \"{}\"\n", RUNNER_BIN, check.key, arg));
        }

        prompt.push_str(
            "\nEach command prints a JSON result to stdout. When all commands \
             have finished, summarize the findings in one short paragraph.",
        );
        prompt
    }

    /// Start an investigation for `project` and return the event stream.
    ///
    /// The investigation runs in a background task; dropping the receiver
    /// cancels it.
    pub fn stream(&self, project: Project) -> mpsc::Receiver<InvestigationEvent> {
        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let service = self.clone();

        tokio::spawn(async move {
            let investigation_id = project.id.clone();
            if let Err(e) = service.run(project, &tx).await {
                warn!(investigation_id, error = %e, "investigation failed");
                let event = InvestigationEvent::Error {
                    investigation_id: investigation_id.clone(),
                    payload: ErrorPayload {
                        message: e.to_string(),
                    },
                };
                let _ = service.audit_event(&event).await;
                let _ = tx.send(event).await;
            }
        });

        rx
    }

    async fn audit_event(&self, event: &InvestigationEvent) -> AppResult<()> {
        self.audit
            .record(
                event.investigation_id(),
                AuditKind::Event,
                serde_json::to_value(event)?,
            )
            .await
    }

    /// Emit one event: audit it, then send it. A closed channel is
    /// reported as an agent error so the caller can cancel.
    async fn emit(
        &self,
        tx: &mpsc::Sender<InvestigationEvent>,
        event: InvestigationEvent,
    ) -> AppResult<()> {
        self.audit_event(&event).await?;
        tx.send(event)
            .await
            .map_err(|_| AppError::agent("event subscriber disconnected"))
    }

    async fn run(
        &self,
        project: Project,
        tx: &mpsc::Sender<InvestigationEvent>,
    ) -> AppResult<()> {
        let investigation_id = project.id.clone();

        if self.config.api_key.is_none() {
            self.emit(
                tx,
                InvestigationEvent::Error {
                    investigation_id,
                    payload: ErrorPayload {
                        message: "ANTHROPIC_API_KEY not configured".to_string(),
                    },
                },
            )
            .await?;
            return Ok(());
        }

        self.emit(
            tx,
            InvestigationEvent::InvestigationStarted {
                investigation_id: investigation_id.clone(),
                payload: StartedPayload {
                    entity_name: project.entity_name.clone(),
                    entity_type: project.entity_type.clone(),
                },
            },
        )
        .await?;

        let prompt = Self::build_prompt(&project);
        self.audit
            .record(
                &investigation_id,
                AuditKind::Prompt,
                json!({ "prompt": prompt }),
            )
            .await?;

        let executor = AgentExecutor::new(self.config.clone());
        let (mut process, mut lines) = executor.spawn_with_reader(&prompt).await?;
        info!(investigation_id, pid = process.pid(), "agent spawned");

        let mut translator = EventTranslator::new(&investigation_id, &project.checks);

        while let Some(line) = lines.recv().await {
            let Some(message) = AgentMessage::from_json_line(&line) else {
                continue;
            };
            self.audit
                .record(
                    &investigation_id,
                    AuditKind::AgentMessage,
                    message.raw().clone(),
                )
                .await?;

            for event in translator.process_message(&message) {
                if let Err(e) = self.emit(tx, event).await {
                    // Subscriber gone: cancel, no verdict
                    let _ = process.kill().await;
                    info!(investigation_id, "investigation cancelled");
                    return Err(e);
                }
            }
        }

        let exit_code = process.wait().await?;
        let terminal = match exit_code {
            Some(0) | None => translator.complete(),
            Some(code) => {
                self.audit
                    .record(
                        &investigation_id,
                        AuditKind::Error,
                        json!({ "exit_code": code }),
                    )
                    .await?;
                translator.fail(&format!("agent exited with code {}", code))
            }
        };
        self.emit(tx, terminal).await?;

        info!(investigation_id, "investigation finished");
        Ok(())
    }
}
