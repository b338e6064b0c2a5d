//! Then steps for messaging BDD scenarios.

use super::world::{MessagingWorld, parse_id, parse_instant, run_async};
use crieur::messaging::{
    domain::MessageSnapshot, ports::MessageRepository, services::TimelineEntry,
};
use eyre::eyre;
use rstest_bdd_macros::then;

fn timeline(world: &MessagingWorld) -> Result<&[TimelineEntry], eyre::Report> {
    let result = world
        .last_timeline
        .as_ref()
        .ok_or_else(|| eyre!("missing timeline result in scenario world"))?;
    result
        .as_deref()
        .map_err(|err| eyre!("unexpected timeline failure: {err}"))
}

#[then("the operation succeeds")]
fn operation_succeeds(world: &MessagingWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(())) => Ok(()),
        Some(Err(err)) => Err(eyre!("unexpected failure: {err}")),
        None => Err(eyre!("missing operation result in scenario world")),
    }
}

#[then(r#"the operation fails with "{message}""#)]
fn operation_fails_with(world: &MessagingWorld, message: String) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(err)) if err.to_string() == message => Ok(()),
        Some(Err(err)) => Err(eyre!("expected error {message:?}, got {:?}", err.to_string())),
        Some(Ok(())) => Err(eyre!("expected error {message:?}, but the operation succeeded")),
        None => Err(eyre!("missing operation result in scenario world")),
    }
}

#[then("no message is stored")]
fn no_message_is_stored(world: &MessagingWorld) -> Result<(), eyre::Report> {
    let stored = world
        .repository
        .messages()
        .map_err(|err| eyre!("read repository: {err}"))?;
    if !stored.is_empty() {
        return Err(eyre!("expected no stored messages, found {}", stored.len()));
    }
    Ok(())
}

#[then(r#"message "{id}" by "{author}" reads "{text}" published at "{instant}""#)]
fn message_is_stored(
    world: &MessagingWorld,
    id: String,
    author: String,
    text: String,
    instant: String,
) -> Result<(), eyre::Report> {
    let expected = MessageSnapshot {
        id: parse_id(&id)?,
        author,
        text,
        published_at: parse_instant(&instant)?,
    };
    let found = run_async(world.repository.find_by_id(expected.id))
        .map_err(|err| eyre!("lookup failed: {err}"))?
        .ok_or_else(|| eyre!("message {id} is not stored"))?;
    if found.snapshot() != expected {
        return Err(eyre!(
            "expected {expected:?}, found {:?}",
            found.snapshot()
        ));
    }
    Ok(())
}

#[then("the timeline has {count:usize} entries")]
fn timeline_has_entries(world: &MessagingWorld, count: usize) -> Result<(), eyre::Report> {
    let entries = timeline(world)?;
    if entries.len() != count {
        return Err(eyre!("expected {count} entries, found {}", entries.len()));
    }
    Ok(())
}

#[then(r#"timeline entry {position:usize} is message "{id}" reading "{text}" from "{relative_time}""#)]
fn timeline_entry_matches(
    world: &MessagingWorld,
    position: usize,
    id: String,
    text: String,
    relative_time: String,
) -> Result<(), eyre::Report> {
    let entries = timeline(world)?;
    let entry = position
        .checked_sub(1)
        .and_then(|index| entries.get(index))
        .ok_or_else(|| eyre!("timeline has no entry {position}"))?;
    let expected_id = parse_id(&id)?;
    if entry.id != expected_id || entry.text != text || entry.relative_time != relative_time {
        return Err(eyre!(
            "expected entry {position} to be {id} {text:?} {relative_time:?}, found {entry:?}"
        ));
    }
    Ok(())
}
