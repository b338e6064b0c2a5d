//! When steps for messaging BDD scenarios.

use super::world::{MessagingWorld, parse_id, run_async};
use crieur::messaging::services::{EditMessageRequest, PostMessageRequest, ViewTimelineRequest};
use rstest_bdd_macros::when;

fn post(world: &mut MessagingWorld, author: String, id: &str, text: String) -> Result<(), eyre::Report> {
    let request = PostMessageRequest::new(parse_id(id)?, author, text);
    world.last_result = Some(run_async(world.post_handler().handle(request)));
    Ok(())
}

fn edit(world: &mut MessagingWorld, id: &str, text: String) -> Result<(), eyre::Report> {
    let request = EditMessageRequest::new(parse_id(id)?, text);
    world.last_result = Some(run_async(world.edit_handler().handle(request)));
    Ok(())
}

#[when(r#""{author}" posts message "{id}" with text "{text}""#)]
fn posts_message(
    world: &mut MessagingWorld,
    author: String,
    id: String,
    text: String,
) -> Result<(), eyre::Report> {
    post(world, author, &id, text)
}

#[when(r#""{author}" posts message "{id}" with a text of {length:usize} characters"#)]
fn posts_long_message(
    world: &mut MessagingWorld,
    author: String,
    id: String,
    length: usize,
) -> Result<(), eyre::Report> {
    post(world, author, &id, "a".repeat(length))
}

#[when(r#""{author}" posts message "{id}" with empty text"#)]
fn posts_empty_message(
    world: &mut MessagingWorld,
    author: String,
    id: String,
) -> Result<(), eyre::Report> {
    post(world, author, &id, String::new())
}

#[when(r#""{author}" posts message "{id}" with blank text"#)]
fn posts_blank_message(
    world: &mut MessagingWorld,
    author: String,
    id: String,
) -> Result<(), eyre::Report> {
    post(world, author, &id, "   ".to_owned())
}

#[when(r#"message "{id}" is edited to "{text}""#)]
fn edits_message(world: &mut MessagingWorld, id: String, text: String) -> Result<(), eyre::Report> {
    edit(world, &id, text)
}

#[when(r#"message "{id}" is edited to a text of {length:usize} characters"#)]
fn edits_message_with_long_text(
    world: &mut MessagingWorld,
    id: String,
    length: usize,
) -> Result<(), eyre::Report> {
    edit(world, &id, "a".repeat(length))
}

#[when(r#"message "{id}" is edited to empty text"#)]
fn edits_message_with_empty_text(world: &mut MessagingWorld, id: String) -> Result<(), eyre::Report> {
    edit(world, &id, String::new())
}

#[when(r#"message "{id}" is edited to blank text"#)]
fn edits_message_with_blank_text(world: &mut MessagingWorld, id: String) -> Result<(), eyre::Report> {
    edit(world, &id, " ".to_owned())
}

#[when(r#"the timeline of "{author}" is viewed"#)]
fn views_timeline(world: &mut MessagingWorld, author: String) {
    let request = ViewTimelineRequest::new(author);
    world.last_timeline = Some(run_async(world.timeline_handler().handle(request)));
}
