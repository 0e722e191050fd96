//! End-to-end engine tests driven through the public [`Client`] façade
//! against a [`MockTransport`], covering the registration flows and
//! response aggregation the engine is responsible for.
//!
//! The mock transport has no notion of a pending/blocking read: once its
//! queued lines are exhausted, `read_line` returns `Ok(None)` immediately,
//! which the engine treats as the remote end closing the connection. So
//! every line a scenario needs is queued up front, before the client is
//! constructed, and the reader/writer/keepalive tasks (spawned inside
//! `Client::connect_with_transport`) only actually run once this test's
//! task hits its first genuine suspension point — typically
//! `await_registered()` or a `whois()` call's internal wait on its
//! aggregator. `MockTransportHandle` lets us inspect what the engine wrote
//! after the transport itself has been moved into the client.

use slirc_client::config::SaslConfig;
use slirc_client::transport::MockTransport;
use slirc_client::{Client, EngineError, SessionConfig};

/// Give the background reader/writer/keepalive tasks a few extra turns to
/// run. They only need this when nothing else in the test already awaited
/// one of their effects (e.g. `await_registered`), since the mock
/// transport completes every read/write without ever truly blocking.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

fn plain_sasl_config(nick: &str, username: &str, realname: &str) -> SessionConfig {
    let mut cfg = SessionConfig::new("irc.example.org", nick);
    cfg.username = Some(username.into());
    cfg.realname = Some(realname.into());
    cfg.requested_caps = vec!["sasl".into()];
    cfg.sasl = Some(SaslConfig::Plain {
        username: username.into(),
        password: "authpass".into(),
    });
    cfg
}

#[tokio::test]
async fn basic_registration_sends_nick_and_user_immediately() {
    let mut transport = MockTransport::new();
    transport.queue_read(":irc.example.org 001 TestBot :Welcome to the Network");
    let handle = transport.handle();

    let mut config = SessionConfig::new("irc.example.org", "TestBot");
    config.username = Some("testuser".into());
    config.realname = Some("Test User".into());

    let client = Client::connect_with_transport(config, Box::new(transport)).await;
    client.await_registered().await.expect("registration should succeed");
    settle().await;

    assert_eq!(
        handle.written_lines(),
        vec!["NICK TestBot".to_owned(), "USER testuser 0 * :Test User".to_owned()],
    );
}

#[tokio::test]
async fn pass_is_sent_before_nick_and_user() {
    let mut transport = MockTransport::new();
    transport.queue_read(":irc.example.org 001 TestBot :Welcome to the Network");
    let handle = transport.handle();

    let mut config = SessionConfig::new("irc.example.org", "TestBot");
    config.username = Some("testuser".into());
    config.realname = Some("Test User".into());
    config.password = Some("serverpass123".into());

    let client = Client::connect_with_transport(config, Box::new(transport)).await;
    client.await_registered().await.expect("registration should succeed");
    settle().await;

    assert_eq!(
        handle.written_lines(),
        vec![
            "PASS serverpass123".to_owned(),
            "NICK TestBot".to_owned(),
            "USER testuser 0 * :Test User".to_owned(),
        ],
    );
}

#[tokio::test]
async fn cap_sasl_plain_success_sequences_every_outbound_line() {
    let mut transport = MockTransport::new();
    transport.queue_read(":irc.example.org CAP * LS :sasl");
    transport.queue_read(":irc.example.org CAP * ACK :sasl");
    transport.queue_read("AUTHENTICATE +");
    transport.queue_read(":irc.example.org 903 SaslBot :SASL authentication successful");
    transport.queue_read(":irc.example.org 001 SaslBot :Welcome to the Network");
    let handle = transport.handle();

    let config = plain_sasl_config("SaslBot", "authuser", "Auth User");
    let client = Client::connect_with_transport(config, Box::new(transport)).await;
    client.await_registered().await.expect("registration should succeed");
    settle().await;

    assert_eq!(
        handle.written_lines(),
        vec![
            "CAP LS 302".to_owned(),
            "CAP REQ :sasl".to_owned(),
            "AUTHENTICATE PLAIN".to_owned(),
            "AUTHENTICATE AGF1dGh1c2VyAGF1dGhwYXNz".to_owned(),
            "NICK SaslBot".to_owned(),
            "USER authuser 0 * :Auth User".to_owned(),
            "CAP END".to_owned(),
        ],
    );
}

#[tokio::test]
async fn sasl_failure_falls_through_to_registration_with_an_error_event() {
    let mut transport = MockTransport::new();
    transport.queue_read(":irc.example.org CAP * LS :sasl");
    transport.queue_read(":irc.example.org CAP * ACK :sasl");
    transport.queue_read("AUTHENTICATE +");
    transport.queue_read(":irc.example.org 904 SaslBot :Invalid credentials");
    transport.queue_read(":irc.example.org 001 SaslBot :Welcome to the Network");
    let handle = transport.handle();

    let config = plain_sasl_config("SaslBot", "authuser", "Auth User");
    let client = Client::connect_with_transport(config, Box::new(transport)).await;
    let mut events = client.events();

    client.await_registered().await.expect("registration should still complete after SASL failure");
    settle().await;

    assert_eq!(
        handle.written_lines(),
        vec![
            "CAP LS 302".to_owned(),
            "CAP REQ :sasl".to_owned(),
            "AUTHENTICATE PLAIN".to_owned(),
            "AUTHENTICATE AGF1dGh1c2VyAGF1dGhwYXNz".to_owned(),
            "NICK SaslBot".to_owned(),
            "USER authuser 0 * :Auth User".to_owned(),
            "CAP END".to_owned(),
        ],
    );

    let mut saw_sasl_error = false;
    while let Ok(event) = events.try_recv() {
        if let slirc_client::Event::Error(msg) = event {
            if msg.contains("SASL authentication failed") {
                saw_sasl_error = true;
            }
        }
    }
    assert!(saw_sasl_error, "expected a SASL failure error event");
}

#[tokio::test]
async fn nickname_in_use_recovers_by_appending_an_underscore() {
    let mut transport = MockTransport::new();
    transport.queue_read(":irc.example.org 433 * TakenNick :Nickname is already in use");
    transport.queue_read(":irc.example.org 001 TakenNick_ :Welcome to the Network");
    let handle = transport.handle();

    let mut config = SessionConfig::new("irc.example.org", "TakenNick");
    config.username = Some("TakenNick".into());
    config.realname = Some("TakenNick".into());

    let client = Client::connect_with_transport(config, Box::new(transport)).await;
    client.await_registered().await.expect("registration should succeed with the recovered nick");
    settle().await;

    assert_eq!(
        handle.written_lines(),
        vec![
            "NICK TakenNick".to_owned(),
            "USER TakenNick 0 * :TakenNick".to_owned(),
            "NICK TakenNick_".to_owned(),
        ],
    );
    assert_eq!(client.current_nick().await, "TakenNick_");
}

#[tokio::test]
async fn whois_aggregates_across_numerics_and_rejects_a_concurrent_duplicate() {
    let mut transport = MockTransport::new();
    transport.queue_read(":irc.example.org 001 Query :Welcome to the Network");
    transport.queue_read(":irc.example.org 311 Query alice user host * :Alice Real Name");
    transport.queue_read(":irc.example.org 312 Query alice irc.example.org :IRC Server");
    transport.queue_read(":irc.example.org 319 Query alice :#chan1 #chan2");
    transport.queue_read(":irc.example.org 318 Query alice :End of WHOIS list");

    let config = SessionConfig::new("irc.example.org", "Query");
    let client = Client::connect_with_transport(config, Box::new(transport)).await;

    // Both calls are polled within the same `join!`, so the second's
    // `begin_aggregation` runs while the first's is still registered
    // under the same key, before the mock's queued script is ever read.
    let (first, second) = tokio::join!(client.whois("alice"), client.whois("alice"));

    let first = first.expect("first WHOIS should complete");
    assert_eq!(first.nick, "alice");
    assert_eq!(first.user.as_deref(), Some("user"));
    assert_eq!(first.host.as_deref(), Some("host"));
    assert_eq!(first.realname.as_deref(), Some("Alice Real Name"));
    assert_eq!(first.server.as_deref(), Some("irc.example.org"));
    assert_eq!(first.channels, vec!["#chan1", "#chan2"]);

    assert!(matches!(second, Err(EngineError::BusyDuplicate)));
}

#[tokio::test]
async fn whois_of_a_nonexistent_nick_surfaces_as_a_server_error() {
    let mut transport = MockTransport::new();
    transport.queue_read(":irc.example.org 001 Query :Welcome to the Network");
    transport.queue_read(":irc.example.org 401 Query ghost :No such nick/channel");

    let config = SessionConfig::new("irc.example.org", "Query");
    let client = Client::connect_with_transport(config, Box::new(transport)).await;

    let result = client.whois("ghost").await;
    assert!(matches!(result, Err(EngineError::InvalidData(_))));
}
