use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::catalog::StaticCatalog;
use crate::model::CatalogEntry;
use crate::registry::EffectRegistry;
use crate::selector::NoParamMemory;

struct FixedPrompter {
    reply: String,
    calls: usize,
}

impl ParamPrompter for FixedPrompter {
    fn prompt_for_params(&mut self, _identifier: &str, _current: &str) -> String {
        self.calls += 1;
        self.reply.clone()
    }

    fn prompt_for_preset(&mut self, _identifier: &str, _current: &str) -> String {
        self.calls += 1;
        format!("{} (preset)", self.reply)
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn catalog() -> StaticCatalog {
    StaticCatalog::new(vec![
        CatalogEntry::new("Normalize", "Normalize", "Volume and Compression"),
        CatalogEntry::new("Echo", "Echo", "Delay and Reverb"),
        CatalogEntry::new("No Action", "NoAction", "Special Command"),
    ])
}

fn prompter() -> FixedPrompter {
    FixedPrompter {
        reply: "Delay=9".to_string(),
        calls: 0,
    }
}

#[test]
fn arrow_keys_drive_selection_and_params_field() {
    let catalog = catalog();
    let registry = EffectRegistry::builtin();
    let mut app = App::new(CommandSelector::new(&catalog, &registry, &NoParamMemory), None);
    let mut p = prompter();

    app.handle_key(key(KeyCode::Down), &mut p);
    assert_eq!(app.selector.state().selected_index, Some(0));
    assert_eq!(app.selector.state().display_text, "Normalize");

    app.handle_key(key(KeyCode::Down), &mut p);
    assert_eq!(app.selector.state().display_text, "Echo");
    assert_eq!(app.params.buf, "Delay=1 Decay=0.5");

    app.handle_key(key(KeyCode::End), &mut p);
    assert_eq!(app.selector.state().selected_index, Some(2));
    assert_eq!(app.params.buf, "");
    app.handle_key(key(KeyCode::PageDown), &mut p);
    assert_eq!(app.selector.state().selected_index, Some(2));
    app.handle_key(key(KeyCode::PageUp), &mut p);
    assert_eq!(app.selector.state().selected_index, Some(0));
}

#[test]
fn typed_params_reach_the_selector() {
    let catalog = catalog();
    let registry = EffectRegistry::builtin();
    let mut app = App::new(CommandSelector::new(&catalog, &registry, &NoParamMemory), None);
    let mut p = prompter();

    app.handle_key(key(KeyCode::Down), &mut p);
    app.handle_key(key(KeyCode::Down), &mut p);
    app.handle_key(key(KeyCode::Tab), &mut p);
    assert_eq!(app.focus, Focus::Params);
    for _ in 0.."Decay=0.5".len() {
        app.handle_key(key(KeyCode::Backspace), &mut p);
    }
    for c in "Decay=0.8  ".chars() {
        app.handle_key(key(KeyCode::Char(c)), &mut p);
    }
    assert_eq!(app.selector.state().parameter_text, "Delay=1 Decay=0.8  ");

    app.handle_key(key(KeyCode::Enter), &mut p);
    assert_eq!(
        app.into_outcome(),
        DialogOutcome::Committed(CommandStep::new("Echo", "Delay=1 Decay=0.8"))
    );
}

#[test]
fn ctrl_shortcuts_follow_action_availability() {
    let catalog = catalog();
    let registry = EffectRegistry::builtin();
    let mut app = App::new(CommandSelector::new(&catalog, &registry, &NoParamMemory), None);
    let mut p = prompter();

    app.handle_key(key(KeyCode::End), &mut p);
    app.handle_key(ctrl('e'), &mut p);
    app.handle_key(ctrl('p'), &mut p);
    assert_eq!(p.calls, 0);
    assert!(matches!(app.status, Some((StatusKind::Error, _))));

    app.handle_key(key(KeyCode::Up), &mut p);
    app.handle_key(ctrl('e'), &mut p);
    assert_eq!(p.calls, 1);
    assert_eq!(app.params.buf, "Delay=9");

    app.handle_key(ctrl('p'), &mut p);
    assert_eq!(p.calls, 2);
    assert_eq!(app.selector.state().parameter_text, "Delay=9 (preset)");
    assert_eq!(app.params.buf, "Delay=9 (preset)");
}

#[test]
fn seeded_dialog_shows_step_and_escape_cancels() {
    let catalog = catalog();
    let registry = EffectRegistry::builtin();
    let seed = CommandStep::new("StereoToMono", "");
    let mut app = App::new(
        CommandSelector::new(&catalog, &registry, &NoParamMemory),
        Some(&seed),
    );
    let mut p = prompter();

    assert_eq!(app.selector.state().display_text, "StereoToMono");
    assert_eq!(app.selector.state().selected_index, None);

    app.handle_key(key(KeyCode::Esc), &mut p);
    assert_eq!(app.close, Some(CloseRequest::Cancel));
    assert_eq!(app.into_outcome(), DialogOutcome::Cancelled);
}

#[test]
fn help_modal_swallows_keys_until_closed() {
    let catalog = catalog();
    let registry = EffectRegistry::builtin();
    let mut app = App::new(CommandSelector::new(&catalog, &registry, &NoParamMemory), None);
    let mut p = prompter();

    app.handle_key(key(KeyCode::F(1)), &mut p);
    assert!(app.help.0.is_some());
    app.handle_key(key(KeyCode::Down), &mut p);
    assert_eq!(app.selector.state().selected_index, None);
    app.handle_key(key(KeyCode::Esc), &mut p);
    assert!(app.help.0.is_none());
    assert_eq!(app.close, None);
}
