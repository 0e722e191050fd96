//! Public façade: typed command helpers and aggregated query entry points.

use tokio::sync::broadcast;

use crate::aggregator::{
    AggError, AggKey, AggOutcome, ListResult, MotdResult, NamesResult, WhoResult, WhoisResult,
};
use crate::command::Command;
use crate::config::SessionConfig;
use crate::engine::{Engine, SessionState};
use crate::error::EngineError;
use crate::event::Event;
use crate::transport::{TcpTransport, TlsTransport, Transport};

/// A connected IRC session: the typed command surface callers use instead
/// of reaching into the engine directly.
pub struct Client {
    engine: Engine,
}

impl Client {
    /// Open a connection per `config` and start the engine's background
    /// activities. Returns once the transport is open; does not wait for
    /// registration — call [`Client::await_registered`] for that.
    pub async fn connect(config: SessionConfig) -> Result<Self, EngineError> {
        let transport: Box<dyn Transport> = if config.use_tls {
            Box::new(
                TlsTransport::connect(&config.server, config.port)
                    .await
                    .map_err(|e| EngineError::TransportOpenFailed(e.to_string()))?,
            )
        } else {
            Box::new(
                TcpTransport::connect(&config.server, config.port)
                    .await
                    .map_err(|e| EngineError::TransportOpenFailed(e.to_string()))?,
            )
        };

        let engine = Engine::start(config, transport).await;
        Ok(Self { engine })
    }

    /// Build a client directly from an already-open transport — the seam
    /// tests use to drive the engine against a [`crate::transport::MockTransport`].
    pub async fn connect_with_transport(
        config: SessionConfig,
        transport: Box<dyn Transport>,
    ) -> Self {
        let engine = Engine::start(config, transport).await;
        Self { engine }
    }

    /// Subscribe to the event fan-out channel.
    #[must_use]
    pub fn events(&self) -> broadcast::Receiver<Event> {
        self.engine.subscribe()
    }

    #[must_use]
    pub async fn state(&self) -> SessionState {
        self.engine.state().await
    }

    #[must_use]
    pub async fn current_nick(&self) -> String {
        self.engine.current_nick().await
    }

    pub async fn await_registered(&self) -> Result<(), EngineError> {
        self.engine.await_registered().await
    }

    /// Disconnect, sending `reason` as a `QUIT` if a session was active.
    /// Idempotent.
    pub async fn disconnect(&self, reason: Option<String>) {
        self.engine.disconnect(reason).await;
    }

    /// Enqueue a typed command directly, bypassing the registration gate.
    /// Most callers want the typed helpers below instead.
    pub async fn send(&self, cmd: Command) -> Result<(), EngineError> {
        self.gate().await?;
        self.engine.send_command(cmd);
        Ok(())
    }

    /// Enqueue an already-formed line, bypassing the registration gate.
    pub async fn send_raw(&self, line: String) -> Result<(), EngineError> {
        self.gate().await?;
        self.engine.send_raw(line);
        Ok(())
    }

    async fn gate(&self) -> Result<(), EngineError> {
        match self.engine.state().await {
            SessionState::Disconnected => Err(EngineError::NotConnected),
            _ => Ok(()),
        }
    }

    // --- Typed helpers ---

    pub async fn join(&self, channel: impl Into<String>, key: Option<String>) -> Result<(), EngineError> {
        self.send(Command::Join {
            channel: channel.into(),
            key,
        })
        .await
    }

    pub async fn part(&self, channel: impl Into<String>, reason: Option<String>) -> Result<(), EngineError> {
        self.send(Command::Part {
            channel: channel.into(),
            reason,
        })
        .await
    }

    pub async fn privmsg(&self, target: impl Into<String>, text: impl Into<String>) -> Result<(), EngineError> {
        self.send(Command::Privmsg {
            target: target.into(),
            text: text.into(),
        })
        .await
    }

    pub async fn notice(&self, target: impl Into<String>, text: impl Into<String>) -> Result<(), EngineError> {
        self.send(Command::Notice {
            target: target.into(),
            text: text.into(),
        })
        .await
    }

    pub async fn set_nick(&self, nick: impl Into<String>) -> Result<(), EngineError> {
        self.send(Command::Nick(nick.into())).await
    }

    pub async fn set_topic(&self, channel: impl Into<String>, topic: impl Into<String>) -> Result<(), EngineError> {
        self.send(Command::Topic {
            channel: channel.into(),
            new_topic: Some(topic.into()),
        })
        .await
    }

    pub async fn get_topic(&self, channel: impl Into<String>) -> Result<(), EngineError> {
        self.send(Command::Topic {
            channel: channel.into(),
            new_topic: None,
        })
        .await
    }

    pub async fn kick(
        &self,
        channel: impl Into<String>,
        nick: impl Into<String>,
        reason: Option<String>,
    ) -> Result<(), EngineError> {
        self.send(Command::Kick {
            channel: channel.into(),
            nick: nick.into(),
            reason,
        })
        .await
    }

    pub async fn invite(&self, nick: impl Into<String>, channel: impl Into<String>) -> Result<(), EngineError> {
        self.send(Command::Invite {
            nick: nick.into(),
            channel: channel.into(),
        })
        .await
    }

    pub async fn set_mode(&self, target: impl Into<String>, modes: impl Into<String>) -> Result<(), EngineError> {
        self.send(Command::Mode {
            target: target.into(),
            modes: Some(modes.into()),
        })
        .await
    }

    pub async fn away(&self, message: Option<String>) -> Result<(), EngineError> {
        self.send(Command::Away(message)).await
    }

    // --- Aggregated queries ---

    pub async fn whois(&self, nick: impl Into<String>) -> Result<WhoisResult, EngineError> {
        let nick = nick.into();
        let waiter = self.engine.begin_aggregation(AggKey::Whois(nick.clone())).await?;
        self.engine.send_command(Command::Whois(nick));
        unwrap_outcome(waiter.wait().await, |o| match o {
            AggOutcome::Whois(r) => Some(r),
            _ => None,
        })
    }

    pub async fn names(&self, channel: impl Into<String>) -> Result<NamesResult, EngineError> {
        let channel = channel.into();
        let waiter = self
            .engine
            .begin_aggregation(AggKey::Names(channel.clone()))
            .await?;
        self.engine.send_command(Command::Names(Some(channel)));
        unwrap_outcome(waiter.wait().await, |o| match o {
            AggOutcome::Names(r) => Some(r),
            _ => None,
        })
    }

    pub async fn who(&self, mask: impl Into<String>, operators_only: bool) -> Result<WhoResult, EngineError> {
        let mask = mask.into();
        let waiter = self.engine.begin_aggregation(AggKey::Who(mask.clone())).await?;
        self.engine.send_command(Command::Who {
            mask,
            operators_only,
        });
        unwrap_outcome(waiter.wait().await, |o| match o {
            AggOutcome::Who(r) => Some(r),
            _ => None,
        })
    }

    pub async fn list(&self, channel: Option<String>) -> Result<ListResult, EngineError> {
        let waiter = self.engine.begin_aggregation(AggKey::List).await?;
        self.engine.send_command(Command::List(channel));
        unwrap_outcome(waiter.wait().await, |o| match o {
            AggOutcome::List(r) => Some(r),
            _ => None,
        })
    }

    pub async fn motd(&self) -> Result<MotdResult, EngineError> {
        let waiter = self.engine.begin_aggregation(AggKey::Motd).await?;
        self.engine.send_command(Command::Motd);
        unwrap_outcome(waiter.wait().await, |o| match o {
            AggOutcome::Motd(r) => Some(r),
            _ => None,
        })
    }
}

fn unwrap_outcome<T>(
    result: Result<AggOutcome, AggError>,
    extract: impl FnOnce(AggOutcome) -> Option<T>,
) -> Result<T, EngineError> {
    match result {
        Ok(outcome) => extract(outcome).ok_or(EngineError::InvalidData("unexpected aggregator outcome".into())),
        Err(AggError::Timeout) => Err(EngineError::AggTimeout),
        Err(AggError::Disconnected) => Err(EngineError::Disconnected),
        Err(AggError::ServerError(msg)) => Err(EngineError::InvalidData(msg)),
    }
}
