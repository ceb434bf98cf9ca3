//! A minimal host that owns two dropdowns and scripts a few interactions.
//!
//! Run with `RUST_LOG=horizon_select=debug` to see dispatch logs.

use horizon_select::prelude::*;
use tracing_subscriber::EnvFilter;

fn options() -> Vec<SelectOption> {
    ["First", "Second", "Third", "Fourth", "Fifth"]
        .into_iter()
        .zip(1..)
        .map(|(label, key): (&str, i64)| SelectOption::new(label, key))
        .collect()
}

fn main() -> Result<(), SelectError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let first = options().into_iter().next();
    let mut arena = SelectArena::new();
    let single = arena.mount(
        Select::single()
            .with_options(options())
            .with_value(SelectedValue::Single(first.clone()))?,
    );
    let multiple = arena.mount(
        Select::multiple()
            .with_options(options())
            .with_value(SelectedValue::multiple(first))?
            .with_placeholder("Pick any"),
    );

    let script = [
        (single, SelectEvent::BodyClick),
        (single, SelectEvent::from(Key::ArrowDown)),
        (single, SelectEvent::from(Key::ArrowDown)),
        (single, SelectEvent::from(Key::Enter)),
        (multiple, SelectEvent::BodyClick),
        (multiple, SelectEvent::OptionHover(3)),
        (multiple, SelectEvent::OptionClick(3)),
        (multiple, SelectEvent::BodyClick),
        (multiple, SelectEvent::RemoveClick(OptionKey::Int(1))),
    ];

    let mut presenter = PlainTextPresenter::new();
    for (id, event) in script {
        if let Some(SelectionChanged { instance, value }) = arena.dispatch(id, &event)? {
            println!("selection changed: {:?}", value.labels());
            arena.set_value(instance, value)?;
        }
        presenter.present(&arena.get(id)?.view());
        println!("after {event}:\n{}\n", presenter.output());
    }

    Ok(())
}
