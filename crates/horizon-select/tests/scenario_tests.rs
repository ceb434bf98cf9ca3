//! End-to-end interaction scenarios, driven the way a host drives the widget.

use std::sync::Arc;

use parking_lot::Mutex;

use horizon_select::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("horizon_select=trace"))
        .with_test_writer()
        .try_init();
}

fn options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("First", 1),
        SelectOption::new("Second", 2),
        SelectOption::new("Third", 3),
    ]
}

fn key(key: Key) -> SelectEvent {
    SelectEvent::from(key)
}

/// A controlled host: records every proposal and adopts it, the way a form
/// owning the value would.
struct Host {
    select: Select,
    proposals: Arc<Mutex<Vec<SelectedValue>>>,
}

impl Host {
    fn new(select: Select) -> Self {
        let proposals = Arc::new(Mutex::new(Vec::new()));
        let sink = proposals.clone();
        select
            .selection_changed
            .connect(move |value| sink.lock().push(value.clone()));
        Self { select, proposals }
    }

    fn send(&mut self, event: SelectEvent) -> bool {
        let outcome = self.select.handle_event(&event);
        if let Some(value) = outcome.change {
            self.select.set_value(value).expect("proposal matches mode");
        }
        outcome.handled
    }

    fn proposals(&self) -> Vec<SelectedValue> {
        self.proposals.lock().clone()
    }
}

#[test]
fn test_single_keyboard_navigation_commits_third() {
    init_tracing();
    let mut host = Host::new(
        Select::single()
            .with_options(options())
            .with_value(SelectedValue::single(SelectOption::new("First", 1)))
            .unwrap(),
    );

    host.send(SelectEvent::BodyClick);
    assert!(host.select.is_open());
    assert_eq!(host.select.highlighted_index(), Some(0));

    host.send(key(Key::ArrowDown));
    host.send(key(Key::ArrowDown));
    assert_eq!(host.select.highlighted_index(), Some(2));

    host.send(key(Key::Enter));
    assert!(!host.select.is_open());
    assert_eq!(
        host.proposals(),
        vec![SelectedValue::single(SelectOption::new("Third", 3))]
    );
    assert_eq!(host.select.value().labels(), vec!["Third"]);
}

#[test]
fn test_multiple_click_toggles_membership() {
    init_tracing();
    let mut host = Host::new(
        Select::multiple()
            .with_options(options())
            .with_value(SelectedValue::multiple([SelectOption::new("First", 1)]))
            .unwrap(),
    );

    host.send(SelectEvent::BodyClick);
    host.send(SelectEvent::OptionClick(1));
    assert!(!host.select.is_open());
    assert_eq!(host.select.value().labels(), vec!["First", "Second"]);

    host.send(SelectEvent::BodyClick);
    assert_eq!(host.select.highlighted_index(), Some(0));
    host.send(SelectEvent::OptionClick(0));
    assert_eq!(host.select.value().labels(), vec!["Second"]);
    assert_eq!(host.proposals().len(), 2);
}

#[test]
fn test_remove_badge_leaves_open_state_alone() {
    let mut host = Host::new(
        Select::multiple()
            .with_options(options())
            .with_value(SelectedValue::multiple([
                SelectOption::new("First", 1),
                SelectOption::new("Second", 2),
            ]))
            .unwrap(),
    );

    assert!(host.send(SelectEvent::RemoveClick(OptionKey::Int(1))));
    assert_eq!(host.select.value().labels(), vec!["Second"]);
    assert!(!host.select.is_open());

    host.send(SelectEvent::BodyClick);
    host.send(SelectEvent::RemoveClick(OptionKey::Int(2)));
    assert!(host.select.value().is_empty());
    assert!(host.select.is_open());
}

#[test]
fn test_blur_closes_without_commit() {
    let mut host = Host::new(Select::single().with_options(options()));

    host.send(SelectEvent::BodyClick);
    host.send(key(Key::ArrowDown));
    host.send(SelectEvent::FocusOut(FocusReason::Mouse));

    assert!(!host.select.is_open());
    assert!(host.proposals().is_empty());
    assert!(host.select.value().is_empty());
}

#[test]
fn test_escape_closes_without_commit() {
    let mut host = Host::new(Select::multiple().with_options(options()));

    host.send(key(Key::Space));
    host.send(key(Key::ArrowDown));
    assert!(host.send(key(Key::Escape)));
    assert!(!host.select.is_open());
    assert!(host.proposals().is_empty());
}

#[test]
fn test_keys_on_nested_controls_are_ignored() {
    let mut host = Host::new(Select::single().with_options(options()));
    let nested = |k| SelectEvent::KeyPress(KeyPressEvent::new(k).with_target(EventTarget::Descendant));

    assert!(!host.send(nested(Key::Enter)));
    assert!(!host.send(nested(Key::ArrowDown)));
    assert!(!host.select.is_open());

    host.send(SelectEvent::BodyClick);
    assert!(!host.send(nested(Key::Escape)));
    assert!(host.select.is_open());
}

#[test]
fn test_clear_resets_to_empty_for_mode() {
    let mut single = Host::new(
        Select::single()
            .with_options(options())
            .with_value(SelectedValue::single(SelectOption::new("Second", 2)))
            .unwrap(),
    );
    single.send(SelectEvent::ClearClick);
    assert_eq!(single.select.value(), &SelectedValue::Single(None));

    let mut multiple = Host::new(
        Select::multiple()
            .with_options(options())
            .with_value(SelectedValue::multiple(options()))
            .unwrap(),
    );
    multiple.send(SelectEvent::ClearClick);
    assert_eq!(multiple.select.value(), &SelectedValue::Multiple(Vec::new()));
}

#[test]
fn test_reselecting_single_does_not_notify() {
    let mut host = Host::new(
        Select::single()
            .with_options(options())
            .with_value(SelectedValue::single(SelectOption::new("First", 1)))
            .unwrap(),
    );

    host.send(SelectEvent::BodyClick);
    host.send(key(Key::Enter));
    assert!(!host.select.is_open());
    assert!(host.proposals().is_empty());
}

#[test]
fn test_empty_options() {
    let mut host = Host::new(Select::single());

    host.send(SelectEvent::BodyClick);
    assert!(host.select.is_open());
    assert_eq!(host.select.highlighted_index(), None);

    host.send(key(Key::ArrowDown));
    assert!(!host.send(SelectEvent::OptionClick(0)));
    host.send(key(Key::Enter));
    assert!(!host.select.is_open());
    assert!(host.proposals().is_empty());
}

#[test]
fn test_shrinking_options_keeps_highlight_in_range() {
    let mut host = Host::new(Select::single().with_options(options()));

    host.send(SelectEvent::BodyClick);
    host.send(SelectEvent::OptionHover(2));
    host.select.set_options(options()[..1].to_vec());
    assert_eq!(host.select.highlighted_index(), Some(0));

    host.send(key(Key::Enter));
    assert_eq!(host.select.value().labels(), vec!["First"]);
}

#[test]
fn test_rendered_view_follows_interaction() {
    let mut host = Host::new(
        Select::multiple()
            .with_options(options())
            .with_placeholder("Choose"),
    );
    let mut presenter = PlainTextPresenter::new();

    presenter.present(&host.select.view());
    assert_eq!(presenter.output(), "<Choose>   (x) v");

    host.send(SelectEvent::BodyClick);
    host.send(SelectEvent::OptionClick(2));
    host.send(SelectEvent::BodyClick);
    presenter.present(&host.select.view());
    assert_eq!(
        presenter.output(),
        "[Third x]   (x) ^\n>   First\n    Second\n  * Third"
    );
}

#[test]
fn test_arena_instances_do_not_interfere() {
    init_tracing();
    let mut arena = SelectArena::new();
    let colors = arena.mount(Select::single().with_options(options()));
    let sizes = arena.mount(Select::multiple().with_options(options()));

    arena.dispatch(colors, &SelectEvent::BodyClick).unwrap();
    arena.dispatch(sizes, &SelectEvent::BodyClick).unwrap();
    arena.dispatch(sizes, &key(Key::ArrowDown)).unwrap();

    let message = arena
        .dispatch(colors, &key(Key::Enter))
        .unwrap()
        .expect("enter commits the highlight");
    assert_eq!(message.instance, colors);
    arena.set_value(message.instance, message.value).unwrap();

    assert!(!arena.get(colors).unwrap().is_open());
    assert_eq!(arena.get(colors).unwrap().value().labels(), vec!["First"]);
    assert!(arena.get(sizes).unwrap().is_open());
    assert_eq!(arena.get(sizes).unwrap().highlighted_index(), Some(1));
    assert!(arena.get(sizes).unwrap().value().is_empty());
}

#[test]
fn test_widget_from_config() {
    let config = SelectConfig::from_toml_str(
        r#"
multiple = true
value = ["b"]

[[options]]
label = "Alpha"
value = "a"

[[options]]
label = "Beta"
value = "b"
"#,
    )
    .unwrap();

    let mut host = Host::new(config.build().unwrap());
    host.send(SelectEvent::BodyClick);
    host.send(SelectEvent::OptionClick(0));
    assert_eq!(host.select.value().labels(), vec!["Beta", "Alpha"]);
}
