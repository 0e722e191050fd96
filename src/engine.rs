//! The session engine: single mutator of connection state, owner of the
//! reader/writer/keepalive tasks.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot, Mutex};
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::aggregator::{AggError, AggKey, AggregatorWaiter, PendingAggregator};
use crate::command::Command;
use crate::config::SessionConfig;
use crate::error::EngineError;
use crate::event::{
    Event, JoinEvent, KickEvent, ModeEvent, NickEvent, NoticeEvent, PartEvent, PrivmsgEvent,
    QuitEvent, TopicEvent,
};
use crate::handshake::{Handshake, HandshakeEvent};
use crate::message::Message;
use crate::ratelimit::RateLimiter;
use crate::transport::{Transport, TransportReader, TransportWriter};

/// Lifecycle state of one connection. Only the engine mutates this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connecting,
    Connected,
    Registering,
    Registered,
}

const EVENT_CHANNEL_CAPACITY: usize = 256;

struct Inner {
    config: SessionConfig,
    state: SessionState,
    handshake: Handshake,
    aggregators: HashMap<AggKey, PendingAggregator>,
    last_pong_received: Instant,
    last_ping_sent: Option<Instant>,
    registered_waiters: Vec<oneshot::Sender<Result<(), EngineError>>>,
}

impl Inner {
    fn new(config: SessionConfig) -> Self {
        let handshake = Handshake::new(config.clone());
        Self {
            config,
            state: SessionState::Disconnected,
            handshake,
            aggregators: HashMap::new(),
            last_pong_received: Instant::now(),
            last_ping_sent: None,
            registered_waiters: Vec::new(),
        }
    }
}

/// The running session: owns the transport and the serialized engine
/// state, and coordinates the reader/writer/keepalive tasks.
pub struct Engine {
    inner: Arc<Mutex<Inner>>,
    outbound_tx: mpsc::UnboundedSender<String>,
    event_tx: broadcast::Sender<Event>,
    reader_task: tokio::task::JoinHandle<()>,
    writer_task: tokio::task::JoinHandle<()>,
    keepalive_task: tokio::task::JoinHandle<()>,
    transport_close: SharedWriter,
}

impl Engine {
    /// Open `transport`, start the three background activities, and run
    /// the connection handshake. Returns once the transport is open and
    /// the background activities have started — it does not wait for
    /// registration; use [`Engine::await_registered`] for that.
    pub async fn start(config: SessionConfig, transport: Box<dyn Transport>) -> Self {
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel::<String>();
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        let rate_limit = config.rate_limit;
        let inner = Arc::new(Mutex::new(Inner::new(config)));

        {
            let mut guard = inner.lock().await;
            guard.state = SessionState::Connected;
            let cmds = guard.handshake.on_connect();
            guard.state = SessionState::Registering;
            drop(guard);
            let _ = event_tx.send(Event::Connected);
            for cmd in cmds {
                let _ = outbound_tx.send(cmd.serialize());
            }
        }

        // The reader and writer run on fully independent halves: read_line
        // can suspend indefinitely awaiting socket data, and must never
        // hold a lock the writer needs to make outbound progress.
        let (read_half, write_half) = transport.split();
        let write_half: SharedWriter = Arc::new(Mutex::new(write_half));
        let transport_close = Arc::clone(&write_half);

        let reader_task = tokio::spawn(run_reader(
            read_half,
            Arc::clone(&inner),
            event_tx.clone(),
            outbound_tx.clone(),
            Arc::clone(&write_half),
        ));

        let writer_task = tokio::spawn(run_writer(
            outbound_rx,
            Arc::clone(&write_half),
            RateLimiter::new(rate_limit),
        ));

        let ping_timeout = {
            let guard = inner.lock().await;
            Duration::from_secs(guard.config.ping_timeout_secs)
        };
        let keepalive_task = tokio::spawn(run_keepalive(
            Arc::clone(&inner),
            outbound_tx.clone(),
            event_tx.clone(),
            Arc::clone(&write_half),
            ping_timeout,
        ));

        Self {
            inner,
            outbound_tx,
            event_tx,
            reader_task,
            writer_task,
            keepalive_task,
            transport_close,
        }
    }

    /// Subscribe to the event fan-out channel.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.event_tx.subscribe()
    }

    #[must_use]
    pub async fn state(&self) -> SessionState {
        self.inner.lock().await.state
    }

    #[must_use]
    pub async fn current_nick(&self) -> String {
        self.inner.lock().await.handshake.current_nick().to_owned()
    }

    /// Enqueue `cmd` for sending. Does not itself check registration; the
    /// façade gates on that.
    pub fn send_command(&self, cmd: Command) {
        let _ = self.outbound_tx.send(cmd.serialize());
    }

    pub fn send_raw(&self, line: String) {
        let _ = self.outbound_tx.send(line);
    }

    /// Resolve once registration completes, or immediately with an error
    /// if the session is already disconnected.
    pub async fn await_registered(&self) -> Result<(), EngineError> {
        let mut guard = self.inner.lock().await;
        match guard.state {
            SessionState::Registered => Ok(()),
            SessionState::Disconnected => Err(EngineError::Disconnected),
            _ => {
                let (tx, rx) = oneshot::channel();
                guard.registered_waiters.push(tx);
                drop(guard);
                rx.await.unwrap_or(Err(EngineError::Disconnected))
            }
        }
    }

    /// Register a new aggregator under `key`, failing with
    /// [`EngineError::BusyDuplicate`] if one is already in flight.
    pub async fn begin_aggregation(&self, key: AggKey) -> Result<AggregatorWaiter, EngineError> {
        let mut guard = self.inner.lock().await;
        if guard.aggregators.contains_key(&key) {
            return Err(EngineError::BusyDuplicate);
        }
        let (entry, waiter) = PendingAggregator::new(&key);
        guard.aggregators.insert(key, entry);
        Ok(waiter)
    }

    /// Idempotent shutdown: best-effort QUIT, then full cleanup.
    pub async fn disconnect(&self, reason: Option<String>) {
        {
            let guard = self.inner.lock().await;
            if guard.state == SessionState::Registering || guard.state == SessionState::Registered
            {
                let _ = self
                    .outbound_tx
                    .send(Command::Quit(reason.clone()).serialize());
            }
        }
        cleanup(&self.inner, &self.event_tx, &self.transport_close, None).await;
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.reader_task.abort();
        self.writer_task.abort();
        self.keepalive_task.abort();
    }
}

/// The write half, shared between the writer task (which holds the lock
/// only for the brief duration of a single write) and callers elsewhere
/// that need to force-close the connection. The reader's half is never
/// shared: it is owned outright by the reader task so a blocked read can
/// never stall an outbound write.
type SharedWriter = Arc<Mutex<Box<dyn TransportWriter>>>;

async fn run_reader(
    mut transport: Box<dyn TransportReader>,
    inner: Arc<Mutex<Inner>>,
    event_tx: broadcast::Sender<Event>,
    outbound_tx: mpsc::UnboundedSender<String>,
    transport_close: SharedWriter,
) {
    loop {
        let line = transport.read_line().await;

        match line {
            Ok(Some(line)) => {
                let msg = Message::parse(&line);
                handle_inbound(&inner, &event_tx, &outbound_tx, msg).await;
            }
            Ok(None) => {
                cleanup(&inner, &event_tx, &transport_close, None).await;
                return;
            }
            Err(e) => {
                let _ = event_tx.send(Event::Error(e.to_string()));
                cleanup(&inner, &event_tx, &transport_close, Some(e.to_string())).await;
                return;
            }
        }
    }
}

async fn handle_inbound(
    inner: &Arc<Mutex<Inner>>,
    event_tx: &broadcast::Sender<Event>,
    outbound_tx: &mpsc::UnboundedSender<String>,
    msg: Message,
) {
    let mut guard = inner.lock().await;

    // Aggregator routing happens first, ahead of any specific/raw event.
    let mut done_keys = Vec::new();
    for (key, agg) in guard.aggregators.iter_mut() {
        agg.feed(&msg);
        if agg.is_done(&msg) {
            done_keys.push(key.clone());
        }
    }
    for key in done_keys {
        if let Some(agg) = guard.aggregators.remove(&key) {
            agg.complete(&msg);
        }
    }

    let mut to_enqueue = Vec::new();

    match msg.command.as_str() {
        "CAP" => to_enqueue.extend(guard.handshake.on_cap(&msg)),
        "AUTHENTICATE" => to_enqueue.extend(guard.handshake.on_authenticate(&msg)),
        "PING" => {
            if let Some(token) = msg.text() {
                to_enqueue.push(Command::Pong(token.to_owned()));
            }
        }
        "PONG" => guard.last_pong_received = Instant::now(),
        "NICK" => {
            if let (Some(old), Some(new)) = (msg.nick(), msg.target()) {
                guard.handshake.note_nick_change(old, new);
            }
        }
        _ => {}
    }

    if let Some(code) = msg.numeric_code() {
        let (cmds, hs_event) = guard.handshake.on_numeric(code, &msg);
        to_enqueue.extend(cmds);
        match hs_event {
            Some(HandshakeEvent::Registered) => {
                guard.state = SessionState::Registered;
                guard.last_pong_received = Instant::now();
                for waiter in guard.registered_waiters.drain(..) {
                    let _ = waiter.send(Ok(()));
                }
                let _ = event_tx.send(Event::Registered);
            }
            Some(HandshakeEvent::SaslFailed(reason)) => {
                let _ = event_tx.send(Event::Error(format!("SASL authentication failed: {reason}")));
            }
            Some(HandshakeEvent::NickChanged(_)) | None => {}
        }
    }

    emit_specific_event(event_tx, &msg);
    let _ = event_tx.send(Event::Message(msg));

    for cmd in to_enqueue {
        let _ = outbound_tx.send(cmd.serialize());
    }
}

fn emit_specific_event(event_tx: &broadcast::Sender<Event>, msg: &Message) {
    match msg.command.as_str() {
        "PRIVMSG" => {
            if let (Some(nick), Some(target), Some(text)) = (msg.nick(), msg.target(), msg.text())
            {
                let _ = event_tx.send(Event::Privmsg(PrivmsgEvent {
                    target: target.to_owned(),
                    sender: nick.to_owned(),
                    text: text.to_owned(),
                    raw: msg.raw.clone(),
                }));
            }
        }
        "NOTICE" => {
            if let (Some(nick), Some(target), Some(text)) = (msg.nick(), msg.target(), msg.text())
            {
                let _ = event_tx.send(Event::Notice(NoticeEvent {
                    target: target.to_owned(),
                    sender: nick.to_owned(),
                    text: text.to_owned(),
                    raw: msg.raw.clone(),
                }));
            }
        }
        "JOIN" => {
            if let (Some(nick), Some(channel)) = (msg.nick(), msg.channel()) {
                let _ = event_tx.send(Event::Join(JoinEvent {
                    channel: channel.to_owned(),
                    nick: nick.to_owned(),
                    raw: msg.raw.clone(),
                }));
            }
        }
        "PART" => {
            if let (Some(nick), Some(channel)) = (msg.nick(), msg.channel()) {
                let _ = event_tx.send(Event::Part(PartEvent {
                    channel: channel.to_owned(),
                    nick: nick.to_owned(),
                    reason: msg.params.get(1).cloned(),
                    raw: msg.raw.clone(),
                }));
            }
        }
        "QUIT" => {
            if let Some(nick) = msg.nick() {
                let _ = event_tx.send(Event::Quit(QuitEvent {
                    nick: nick.to_owned(),
                    reason: msg.params.first().cloned(),
                    raw: msg.raw.clone(),
                }));
            }
        }
        "KICK" => {
            if let (Some(by), true) = (msg.nick(), msg.params.len() >= 2) {
                let _ = event_tx.send(Event::Kick(KickEvent {
                    channel: msg.params[0].clone(),
                    kicked: msg.params[1].clone(),
                    by: by.to_owned(),
                    reason: msg.params.get(2).cloned(),
                    raw: msg.raw.clone(),
                }));
            }
        }
        "NICK" => {
            if let (Some(old), Some(new)) = (msg.nick(), msg.target()) {
                let _ = event_tx.send(Event::Nick(NickEvent {
                    old: old.to_owned(),
                    new: new.to_owned(),
                    raw: msg.raw.clone(),
                }));
            }
        }
        "TOPIC" => {
            if let Some(channel) = msg.channel() {
                let _ = event_tx.send(Event::Topic(TopicEvent {
                    channel: channel.to_owned(),
                    new_topic: msg.params.get(1).cloned(),
                    raw: msg.raw.clone(),
                }));
            }
        }
        "MODE" => {
            if let Some(target) = msg.target() {
                let modes_joined = msg.params[1..].join(" ");
                let _ = event_tx.send(Event::Mode(ModeEvent {
                    target: target.to_owned(),
                    modes_joined,
                    raw: msg.raw.clone(),
                }));
            }
        }
        _ => {}
    }
}

async fn run_writer(
    mut outbound_rx: mpsc::UnboundedReceiver<String>,
    transport: SharedWriter,
    mut limiter: RateLimiter,
) {
    while let Some(line) = outbound_rx.recv().await {
        limiter.acquire().await;
        let mut t = transport.lock().await;
        if let Err(e) = t.write_line(&line).await {
            warn!(error = %e, "write failed");
            return;
        }
    }
}

async fn run_keepalive(
    inner: Arc<Mutex<Inner>>,
    outbound_tx: mpsc::UnboundedSender<String>,
    event_tx: broadcast::Sender<Event>,
    transport_close: SharedWriter,
    ping_timeout: Duration,
) {
    let mut tick = tokio::time::interval(ping_timeout / 2);
    loop {
        tick.tick().await;

        let mut guard = inner.lock().await;
        if guard.state != SessionState::Registered {
            continue;
        }

        if guard.last_pong_received.elapsed() > ping_timeout {
            drop(guard);
            let _ = event_tx.send(Event::Error("ping timeout".into()));
            cleanup(&inner, &event_tx, &transport_close, Some("ping timeout".into())).await;
            return;
        }

        let token = format!("{:x}", Instant::now().elapsed().as_nanos());
        guard.last_ping_sent = Some(Instant::now());
        drop(guard);
        let _ = outbound_tx.send(Command::Ping(token).serialize());
    }
}

async fn cleanup(
    inner: &Arc<Mutex<Inner>>,
    event_tx: &broadcast::Sender<Event>,
    transport: &SharedWriter,
    cause: Option<String>,
) {
    let mut guard = inner.lock().await;
    if guard.state == SessionState::Disconnected {
        return;
    }

    {
        let mut t = transport.lock().await;
        t.close().await;
    }

    for (_, agg) in guard.aggregators.drain() {
        agg.complete_err(AggError::Disconnected);
    }

    for waiter in guard.registered_waiters.drain(..) {
        let _ = waiter.send(Err(EngineError::Disconnected));
    }

    guard.state = SessionState::Disconnected;
    drop(guard);

    debug!(?cause, "session cleanup complete");
    let _ = event_tx.send(Event::Disconnected { cause });
}
