//! Integration tests for the input dispatcher: raw typed lines in,
//! ordered protocol commands and display events out.

use ircline::{
    BufferKind, BufferTarget, Context, DisplayEvent, DisplayKind, Handler, HandlerError,
    HandlerResult, InputConfig, Outbound, ProtocolCommand, Registry, Session,
};

fn session() -> Session {
    let session = Session::new(InputConfig::default());
    session.set_my_nick("tester");
    session
}

fn commands(out: &[Outbound]) -> Vec<&ProtocolCommand> {
    out.iter()
        .filter_map(|o| match o {
            Outbound::Command(c) => Some(c),
            _ => None,
        })
        .collect()
}

fn displays(out: &[Outbound]) -> Vec<&DisplayEvent> {
    out.iter()
        .filter_map(|o| match o {
            Outbound::Display(e) => Some(e),
            _ => None,
        })
        .collect()
}

fn params_utf8(cmd: &ProtocolCommand) -> Vec<String> {
    cmd.params
        .iter()
        .map(|p| String::from_utf8(p.clone()).unwrap())
        .collect()
}

#[test]
fn plain_text_becomes_privmsg_then_echo() {
    let registry = Registry::new();
    let session = session();
    let buffer = BufferTarget::channel("#rust");

    let out = registry.dispatch(&session, &buffer, "héllo there");

    // command strictly before the local echo
    assert!(matches!(&out[0], Outbound::Command(c) if c.verb == "PRIVMSG"));
    assert!(matches!(&out[1], Outbound::Display(_)));
    assert_eq!(out.len(), 2);

    let cmd = commands(&out)[0];
    assert_eq!(params_utf8(cmd), vec!["#rust", "héllo there"]);

    let echo = displays(&out)[0];
    assert_eq!(echo.kind, DisplayKind::Plain);
    assert_eq!(echo.target, "#rust");
    assert_eq!(echo.text, "héllo there");
    assert_eq!(echo.sender, "tester");
    assert!(echo.from_self);
}

#[test]
fn say_on_status_buffer_is_silent() {
    let registry = Registry::new();
    let out = registry.dispatch(&session(), &BufferTarget::server(), "hello?");
    assert!(out.is_empty());
}

#[test]
fn empty_input_is_a_no_op() {
    let registry = Registry::new();
    let out = registry.dispatch(&session(), &BufferTarget::channel("#rust"), "");
    assert!(out.is_empty());
}

#[test]
fn unknown_command_surfaces_one_error_event() {
    let registry = Registry::new();
    let out = registry.dispatch(&session(), &BufferTarget::channel("#rust"), "/FrobNicate x");

    assert!(commands(&out).is_empty());
    let events = displays(&out);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, DisplayKind::Error);
    assert_eq!(events[0].target_kind, BufferKind::Server);
    assert!(events[0].text.contains("FROBNICATE"));
    assert!(events[0].text.contains('x'));
}

#[test]
fn join_sends_both_lists_and_tracks_keys() {
    let registry = Registry::new();
    let session = session();
    // #b had a key from an earlier join; this join carries none for it
    session.set_channel_key("#b", "stale");

    let out = registry.dispatch(&session, &BufferTarget::server(), "/join #a,#b key1");

    let cmds = commands(&out);
    assert_eq!(cmds.len(), 1);
    assert_eq!(cmds[0].verb, "JOIN");
    assert_eq!(params_utf8(cmds[0]), vec!["#a,#b", "key1"]);

    assert_eq!(session.channel_key("#a").as_deref(), Some("key1"));
    assert_eq!(session.channel_key("#b"), None);
}

#[test]
fn j_supplies_the_channel_prefix_only_when_missing() {
    let registry = Registry::new();
    let session = session();

    let short = registry.dispatch(&session, &BufferTarget::server(), "/j foo");
    let long = registry.dispatch(&session, &BufferTarget::server(), "/join #foo");
    assert_eq!(short, long);

    let already = registry.dispatch(&session, &BufferTarget::server(), "/j #foo");
    assert_eq!(already, long);
}

#[test]
fn op_batches_nicks_into_one_mode_line() {
    let registry = Registry::new();
    let out = registry.dispatch(&session(), &BufferTarget::channel("#chan"), "/op alice bob");

    let cmds = commands(&out);
    assert_eq!(cmds.len(), 1);
    assert_eq!(cmds[0].verb, "MODE");
    assert_eq!(params_utf8(cmds[0]), vec!["#chan", "+oo", "alice", "bob"]);
}

#[test]
fn devoice_uses_minus_sign() {
    let registry = Registry::new();
    let out = registry.dispatch(&session(), &BufferTarget::channel("#chan"), "/devoice carol");
    assert_eq!(params_utf8(commands(&out)[0]), vec!["#chan", "-v", "carol"]);
}

#[test]
fn kick_falls_back_to_configured_reason() {
    let config = InputConfig {
        kick_reason: "bye".to_string(),
        ..InputConfig::default()
    };
    let session = Session::new(config);
    let registry = Registry::new();

    let out = registry.dispatch(&session, &BufferTarget::channel("#chan"), "/kick badguy");

    let cmds = commands(&out);
    assert_eq!(cmds[0].verb, "KICK");
    assert_eq!(params_utf8(cmds[0]), vec!["#chan", "badguy", "bye"]);
}

#[test]
fn kick_without_nick_is_silent() {
    let registry = Registry::new();
    let out = registry.dispatch(&session(), &BufferTarget::channel("#chan"), "/kick");
    assert!(out.is_empty());
}

#[test]
fn kick_reason_uses_the_channel_encoding() {
    let registry = Registry::new();
    let session = session();
    session.encodings().set_target_encoding("#legacy", "iso-8859-1");

    let out = registry.dispatch(&session, &BufferTarget::channel("#legacy"), "/kick badguy adiós");

    let cmd = commands(&out)[0];
    assert_eq!(cmd.params[2], b"adi\xF3s".to_vec());
}

#[test]
fn mode_tokens_stay_server_encoded() {
    // The channel override deliberately does not apply to /mode arguments.
    let registry = Registry::new();
    let session = session();
    session.encodings().set_target_encoding("#legacy", "iso-8859-1");

    let out = registry.dispatch(&session, &BufferTarget::channel("#legacy"), "/mode #legacy +k café");

    let cmd = commands(&out)[0];
    assert_eq!(params_utf8(cmd), vec!["#legacy", "+k", "café"]);
}

#[test]
fn topic_without_argument_queries_with_empty_param() {
    let registry = Registry::new();
    let out = registry.dispatch(&session(), &BufferTarget::channel("#chan"), "/topic");

    let cmds = commands(&out);
    assert_eq!(cmds[0].verb, "TOPIC");
    assert_eq!(cmds[0].params.len(), 2);
    assert_eq!(cmds[0].params[0], b"#chan".to_vec());
    assert!(cmds[0].params[1].is_empty());
}

#[test]
fn ban_only_applies_to_channel_buffers() {
    let registry = Registry::new();
    let session = session();

    let out = registry.dispatch(&session, &BufferTarget::query("mallory"), "/ban mallory");
    assert!(out.is_empty());

    let out = registry.dispatch(&session, &BufferTarget::channel("#chan"), "/ban *!*@evil.host");
    let cmds = commands(&out);
    assert_eq!(cmds[0].verb, "MODE");
    assert_eq!(params_utf8(cmds[0]), vec!["#chan", "+b", "*!*@evil.host"]);
}

#[test]
fn msg_needs_message_text() {
    let registry = Registry::new();
    let session = session();

    assert!(registry
        .dispatch(&session, &BufferTarget::server(), "/msg alice")
        .is_empty());

    let out = registry.dispatch(&session, &BufferTarget::server(), "/msg alice hi there");
    let cmds = commands(&out);
    assert_eq!(cmds[0].verb, "PRIVMSG");
    assert_eq!(params_utf8(cmds[0]), vec!["alice", "hi there"]);
}

#[test]
fn msg_tolerates_multibyte_whitespace_after_the_nick() {
    // EM SPACE between nick and text; token splitting must not land
    // mid-character and derail the command into an error event.
    let registry = Registry::new();
    let out = registry.dispatch(
        &session(),
        &BufferTarget::server(),
        "/msg alice\u{2003}ok hi there",
    );

    assert!(displays(&out).is_empty());
    let cmds = commands(&out);
    assert_eq!(cmds.len(), 1);
    assert_eq!(cmds[0].verb, "PRIVMSG");
    assert_eq!(params_utf8(cmds[0]), vec!["alice", "ok hi there"]);
}

#[test]
fn query_without_text_announces_the_query() {
    let registry = Registry::new();
    let out = registry.dispatch(&session(), &BufferTarget::server(), "/query alice");

    assert!(commands(&out).is_empty());
    let events = displays(&out);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, DisplayKind::Server);
    assert_eq!(events[0].target_kind, BufferKind::Query);
    assert_eq!(events[0].target, "alice");
    assert_eq!(events[0].text, "Starting query with alice");
    assert!(events[0].from_self);
}

#[test]
fn query_with_text_echoes_and_sends() {
    let registry = Registry::new();
    let out = registry.dispatch(&session(), &BufferTarget::server(), "/query alice hi");

    // query echoes first, then the message goes out
    assert_eq!(out.len(), 2);
    assert!(matches!(&out[0], Outbound::Display(_)));
    assert!(matches!(&out[1], Outbound::Command(c) if c.verb == "PRIVMSG"));

    let events = displays(&out);
    assert_eq!(events[0].kind, DisplayKind::Plain);
    assert_eq!(events[0].text, "hi");
    let cmds = commands(&out);
    assert_eq!(params_utf8(cmds[0]), vec!["alice", "hi"]);
}

#[test]
fn me_sends_ctcp_action_and_echoes() {
    let registry = Registry::new();
    let out = registry.dispatch(&session(), &BufferTarget::channel("#rust"), "/me waves");

    assert!(matches!(
        &out[0],
        Outbound::CtcpQuery { nick, tag, payload }
            if nick == "#rust" && tag == "ACTION" && payload == "waves"
    ));
    let events = displays(&out);
    assert_eq!(events[0].kind, DisplayKind::Action);
    assert_eq!(events[0].text, "waves");
    assert!(events[0].from_self);
}

#[test]
fn ctcp_ping_carries_a_unix_timestamp() {
    let registry = Registry::new();
    let out = registry.dispatch(&session(), &BufferTarget::server(), "/ctcp alice ping");

    let Outbound::CtcpQuery { nick, tag, payload } = &out[0] else {
        panic!("expected a CTCP query, got {:?}", out[0]);
    };
    assert_eq!(nick, "alice");
    assert_eq!(tag, "PING");
    assert!(payload.parse::<i64>().unwrap() > 0);

    let events = displays(&out);
    assert_eq!(events[0].kind, DisplayKind::Action);
    assert_eq!(events[0].target_kind, BufferKind::Server);
    assert_eq!(events[0].text, "sending CTCP-PING request");
}

#[test]
fn ctcp_without_tag_is_silent() {
    let registry = Registry::new();
    let out = registry.dispatch(&session(), &BufferTarget::server(), "/ctcp alice");
    assert!(out.is_empty());
}

#[test]
fn ctcp_other_tags_have_empty_payload() {
    let registry = Registry::new();
    let out = registry.dispatch(&session(), &BufferTarget::server(), "/ctcp alice version");
    assert!(matches!(
        &out[0],
        Outbound::CtcpQuery { tag, payload, .. } if tag == "VERSION" && payload.is_empty()
    ));
}

#[test]
fn quote_ships_one_raw_unparsed_line() {
    let registry = Registry::new();
    let out = registry.dispatch(&session(), &BufferTarget::server(), "/quote PRIVMSG #x :hi");

    assert_eq!(out.len(), 1);
    assert!(matches!(&out[0], Outbound::RawLine(line) if line == b"PRIVMSG #x :hi"));
}

#[test]
fn whois_forwards_tokens_verbatim() {
    let registry = Registry::new();
    let out = registry.dispatch(&session(), &BufferTarget::server(), "/whois alice alice");
    let cmds = commands(&out);
    assert_eq!(cmds[0].verb, "WHOIS");
    assert_eq!(params_utf8(cmds[0]), vec!["alice", "alice"]);
}

#[test]
fn part_carries_buffer_name_and_reason() {
    let registry = Registry::new();
    let out = registry.dispatch(&session(), &BufferTarget::channel("#rust"), "/part so long");
    let cmds = commands(&out);
    assert_eq!(cmds[0].verb, "PART");
    assert_eq!(params_utf8(cmds[0]), vec!["#rust", "so long"]);
}

#[test]
fn away_and_quit_take_the_whole_argument() {
    let registry = Registry::new();
    let session = session();

    let out = registry.dispatch(&session, &BufferTarget::server(), "/away gone for lunch");
    assert_eq!(params_utf8(commands(&out)[0]), vec!["gone for lunch"]);

    let out = registry.dispatch(&session, &BufferTarget::server(), "/quit that's all");
    assert_eq!(commands(&out)[0].verb, "QUIT");
    assert_eq!(params_utf8(commands(&out)[0]), vec!["that's all"]);
}

#[test]
fn dispatch_is_idempotent_per_input() {
    let registry = Registry::new();
    let session = session();
    let buffer = BufferTarget::channel("#rust");

    let first = registry.dispatch(&session, &buffer, "hello again");
    let second = registry.dispatch(&session, &buffer, "hello again");
    assert_eq!(first, second);

    // repeating a JOIN reproduces the same key registration, not an error
    let first = registry.dispatch(&session, &buffer, "/join #a,#b key1");
    let second = registry.dispatch(&session, &buffer, "/join #a,#b key1");
    assert_eq!(first, second);
    assert_eq!(session.channel_key("#a").as_deref(), Some("key1"));
}

struct FailingHandler;

impl Handler for FailingHandler {
    fn handle(&self, _ctx: &mut Context<'_>, _target: &BufferTarget, _args: &str) -> HandlerResult {
        Err(HandlerError::NeedMoreParams)
    }
}

struct PanickingHandler;

impl Handler for PanickingHandler {
    fn handle(&self, _ctx: &mut Context<'_>, _target: &BufferTarget, _args: &str) -> HandlerResult {
        panic!("boom");
    }
}

#[test]
fn handler_errors_fold_into_an_error_event() {
    let mut registry = Registry::new();
    registry.register("FAIL", Box::new(FailingHandler));

    let out = registry.dispatch(&session(), &BufferTarget::server(), "/fail now");
    let events = displays(&out);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, DisplayKind::Error);
    assert!(events[0].text.contains("not enough parameters"));
}

#[test]
fn handler_panics_never_escape_dispatch() {
    let mut registry = Registry::new();
    registry.register("BOOM", Box::new(PanickingHandler));

    let out = registry.dispatch(&session(), &BufferTarget::server(), "/boom");
    let events = displays(&out);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, DisplayKind::Error);
    assert!(events[0].text.contains("BOOM"));
}
