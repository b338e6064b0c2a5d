//! Given steps for messaging BDD scenarios.

use super::world::{MessagingWorld, parse_id, parse_instant, run_async};
use crieur::messaging::{domain::Message, ports::MessageRepository};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"the current time is "{instant}""#)]
fn current_time(world: &mut MessagingWorld, instant: String) -> Result<(), eyre::Report> {
    world.clock.set(parse_instant(&instant)?);
    Ok(())
}

#[given(r#""{author}" posted message "{id}" with text "{text}" at "{instant}""#)]
fn posted_message(
    world: &mut MessagingWorld,
    author: String,
    id: String,
    text: String,
    instant: String,
) -> Result<(), eyre::Report> {
    let message = Message::create(parse_id(&id)?, author, text, parse_instant(&instant)?)
        .wrap_err("build seeded message")?;
    run_async(world.repository.save(&message)).wrap_err("seed message")?;
    Ok(())
}
