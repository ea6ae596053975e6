use std::collections::HashMap;

use super::*;
use crate::catalog::StaticCatalog;
use crate::model::{EffectId, Preset};

#[derive(Default)]
struct FakeRegistry {
    effects: HashMap<String, (String, String, Vec<Preset>)>,
}

impl FakeRegistry {
    fn with(mut self, identifier: &str, effect_id: &str, default: &str, presets: usize) -> Self {
        let presets = (0..presets)
            .map(|i| Preset {
                name: format!("p{i}"),
                params: format!("Preset={i}"),
            })
            .collect();
        self.effects.insert(
            identifier.to_string(),
            (effect_id.to_string(), default.to_string(), presets),
        );
        self
    }

    fn find(&self, effect_id: &EffectId) -> Option<&(String, String, Vec<Preset>)> {
        self.effects.values().find(|(id, _, _)| id == effect_id.as_str())
    }
}

impl CapabilityRegistry for FakeRegistry {
    fn resolve_effect_id(&self, identifier: &str) -> Option<EffectId> {
        self.effects
            .get(identifier)
            .map(|(id, _, _)| EffectId(id.clone()))
    }

    fn has_presets(&self, effect_id: &EffectId) -> bool {
        self.find(effect_id).is_some_and(|(_, _, p)| !p.is_empty())
    }

    fn default_preset(&self, effect_id: &EffectId) -> String {
        self.find(effect_id)
            .map(|(_, d, _)| d.clone())
            .unwrap_or_default()
    }
}

#[derive(Default)]
struct FakeMemory(HashMap<String, String>);

impl ParamMemory for FakeMemory {
    fn current_params_for(&self, identifier: &str) -> String {
        self.0.get(identifier).cloned().unwrap_or_default()
    }
}

struct ScriptedPrompter {
    params_reply: String,
    preset_reply: String,
    calls: Vec<(String, String, String)>,
}

impl ScriptedPrompter {
    fn new(params_reply: &str, preset_reply: &str) -> Self {
        Self {
            params_reply: params_reply.to_string(),
            preset_reply: preset_reply.to_string(),
            calls: Vec::new(),
        }
    }
}

impl ParamPrompter for ScriptedPrompter {
    fn prompt_for_params(&mut self, identifier: &str, current: &str) -> String {
        self.calls
            .push(("params".into(), identifier.into(), current.into()));
        self.params_reply.clone()
    }

    fn prompt_for_preset(&mut self, identifier: &str, current: &str) -> String {
        self.calls
            .push(("preset".into(), identifier.into(), current.into()));
        self.preset_reply.clone()
    }
}

fn audio_catalog() -> StaticCatalog {
    StaticCatalog::new(vec![
        CatalogEntry::new("Normalize", "Normalize", "Volume and Compression"),
        CatalogEntry::new("Echo", "Echo", "Delay and Reverb"),
        CatalogEntry::new("Export as MP3", "ExportMP3", "Special Command"),
    ])
}

fn audio_registry() -> FakeRegistry {
    FakeRegistry::default()
        .with("Normalize", "fx:normalize", "PeakLevel=-1", 0)
        .with("Echo", "fx:echo", "Delay=1 Decay=0.5", 2)
}

#[test]
fn starts_empty_with_actions_disabled() {
    let catalog = audio_catalog();
    let registry = audio_registry();
    let sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    assert_eq!(sel.state(), &SelectionState::default());
    assert!(sel.entries().is_empty());
}

#[test]
fn load_catalog_lists_display_names_in_order() {
    let catalog = audio_catalog();
    let registry = audio_registry();
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    let items: Vec<&str> = sel.list_items().collect();
    assert_eq!(items, vec!["Normalize", "Echo", "Export as MP3"]);
    assert_eq!(sel.state().selected_index, None);
}

#[test]
fn reloading_catalog_drops_selection_but_keeps_flags() {
    let catalog = audio_catalog();
    let registry = audio_registry();
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    sel.on_selection_changed(1);
    let flags = sel.state().actions;

    sel.load_catalog();
    assert_eq!(sel.entries().len(), 3);
    assert_eq!(sel.state().selected_index, None);
    assert_eq!(sel.state().actions, flags);
}

#[test]
fn selecting_echo_shows_name_details_and_both_actions() {
    let catalog = audio_catalog();
    let registry = audio_registry();
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    sel.on_selection_changed(1);

    let st = sel.state();
    assert_eq!(st.selected_index, Some(1));
    assert_eq!(st.display_text, "Echo");
    assert_eq!(st.internal_command_name, "Echo");
    assert_eq!(st.detail_text, "Echo\nDelay and Reverb");
    assert!(st.can_edit_parameters());
    assert!(st.can_use_preset());
}

#[test]
fn every_entry_updates_display_and_detail_text() {
    let catalog = audio_catalog();
    let registry = audio_registry();
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    for (i, e) in catalog.entries().iter().enumerate() {
        sel.on_selection_changed(i);
        assert_eq!(sel.state().display_text, e.display_name);
        assert_eq!(
            sel.state().detail_text,
            format!("{}\n{}", e.identifier, e.category)
        );
    }
}

#[test]
fn special_command_disables_both_actions_and_has_no_default_params() {
    let catalog = audio_catalog();
    let registry = audio_registry();
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    sel.on_selection_changed(1);
    sel.on_selection_changed(2);

    let st = sel.state();
    assert_eq!(st.internal_command_name, "ExportMP3");
    assert!(!st.can_edit_parameters());
    assert!(!st.can_use_preset());
    assert_eq!(st.parameter_text, "");
}

#[test]
fn effect_without_presets_only_allows_editing() {
    let catalog = audio_catalog();
    let registry = audio_registry();
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    sel.on_selection_changed(0);
    assert!(sel.state().can_edit_parameters());
    assert!(!sel.state().can_use_preset());
}

#[test]
fn empty_effect_id_counts_as_special() {
    let catalog = audio_catalog();
    let registry = audio_registry().with("ExportMP3", "", "", 1);
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    sel.on_selection_changed(2);
    assert_eq!(sel.state().actions, ActionAvailability::default());
}

#[test]
fn stored_params_take_priority_over_registry_default() {
    let catalog = audio_catalog();
    let registry = audio_registry();
    let mut memory = FakeMemory::default();
    memory
        .0
        .insert("Echo".to_string(), "Delay=0.25 Decay=0.1".to_string());
    let mut sel = CommandSelector::new(&catalog, &registry, &memory);
    sel.load_catalog();

    sel.on_selection_changed(1);
    assert_eq!(sel.state().parameter_text, "Delay=0.25 Decay=0.1");

    sel.on_selection_changed(0);
    assert_eq!(sel.state().parameter_text, "PeakLevel=-1");
}

#[test]
fn repeated_selection_event_keeps_user_edits() {
    let catalog = audio_catalog();
    let registry = audio_registry();
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    sel.on_selection_changed(1);
    sel.set_parameter_text("Delay=2 Decay=0.9");

    sel.on_selection_changed(1);
    assert_eq!(sel.state().parameter_text, "Delay=2 Decay=0.9");
    assert_eq!(sel.state().detail_text, "Echo\nDelay and Reverb");
}

#[test]
fn same_display_name_still_refreshes_flags() {
    // Two rows share a display name; only the flags follow the second row.
    let catalog = StaticCatalog::new(vec![
        CatalogEntry::new("Echo", "Echo", "Delay and Reverb"),
        CatalogEntry::new("Echo", "EchoLegacy", "Special Command"),
    ]);
    let registry = FakeRegistry::default().with("Echo", "fx:echo", "Delay=1", 1);
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    sel.on_selection_changed(0);
    sel.on_selection_changed(1);

    let st = sel.state();
    assert_eq!(st.selected_index, Some(1));
    assert_eq!(st.internal_command_name, "Echo");
    assert_eq!(st.parameter_text, "Delay=1");
    assert!(!st.can_edit_parameters());
    assert!(!st.can_use_preset());
}

#[test]
fn out_of_range_index_is_ignored() {
    let catalog = audio_catalog();
    let registry = audio_registry();
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    sel.on_selection_changed(1);
    let before = sel.state().clone();
    sel.on_selection_changed(99);
    assert_eq!(sel.state(), &before);
}

#[test]
fn seeding_known_command_selects_its_row() {
    let catalog = audio_catalog();
    let registry = audio_registry();
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    sel.set_command_and_params("Echo", "Delay=3 Decay=0.2");

    let st = sel.state();
    assert_eq!(st.selected_index, Some(1));
    assert_eq!(st.display_text, "Echo");
    assert_eq!(st.detail_text, "Echo\nDelay and Reverb");
    assert_eq!(st.parameter_text, "Delay=3 Decay=0.2");
    assert!(st.can_edit_parameters());
    assert!(st.can_use_preset());
}

#[test]
fn seeded_params_survive_the_follow_up_selection_event() {
    let catalog = audio_catalog();
    let registry = audio_registry();
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    sel.set_command_and_params("Echo", "Delay=3 Decay=0.2");
    sel.on_selection_changed(1);
    assert_eq!(sel.state().parameter_text, "Delay=3 Decay=0.2");
}

#[test]
fn seeding_unknown_command_shows_raw_identifier() {
    let catalog = audio_catalog();
    let registry = audio_registry();
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    sel.set_command_and_params("StereoToMono", "");

    let st = sel.state();
    assert_eq!(st.display_text, "StereoToMono");
    assert_eq!(st.selected_index, None);
    assert_eq!(
        sel.commit(),
        DialogOutcome::Committed(CommandStep::new("StereoToMono", ""))
    );
}

#[test]
fn seeding_unknown_command_recomputes_flags() {
    let catalog = audio_catalog();
    let registry = audio_registry();
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    sel.on_selection_changed(1);
    assert!(sel.state().can_use_preset());

    sel.set_command_and_params("StereoToMono", "");
    assert_eq!(sel.state().selected_index, Some(1));
    assert_eq!(sel.state().actions, ActionAvailability::default());
    // Details are only rewritten when the command is found.
    assert_eq!(sel.state().detail_text, "Echo\nDelay and Reverb");
}

#[test]
fn seeding_unknown_registry_effect_keeps_editing_available() {
    let catalog = audio_catalog();
    let registry = audio_registry().with("Reverb", "fx:reverb", "", 0);
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    sel.set_command_and_params("Reverb", "RoomSize=10");
    assert_eq!(sel.state().display_text, "Reverb");
    assert!(sel.state().can_edit_parameters());
    assert!(!sel.state().can_use_preset());
}

#[test]
fn seeding_twice_is_idempotent() {
    let catalog = audio_catalog();
    let registry = audio_registry();
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    sel.set_command_and_params("Normalize", "PeakLevel=-2");
    let once = sel.state().clone();
    sel.set_command_and_params("Normalize", "PeakLevel=-2");
    assert_eq!(sel.state(), &once);
}

#[test]
fn commit_trims_identifier_both_sides_and_params_trailing() {
    let catalog = audio_catalog();
    let registry = audio_registry();
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    sel.set_command_and_params("  Echo \t", "  Delay=1  \n");
    assert_eq!(
        sel.commit(),
        DialogOutcome::Committed(CommandStep::new("Echo", "  Delay=1"))
    );
}

#[test]
fn cancel_reports_no_change() {
    let catalog = audio_catalog();
    let registry = audio_registry();
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    sel.on_selection_changed(0);
    assert_eq!(sel.cancel(), DialogOutcome::Cancelled);
}

#[test]
fn edit_parameters_passes_current_state_and_trims_reply() {
    let catalog = audio_catalog();
    let registry = audio_registry();
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    sel.on_selection_changed(1);
    let before = sel.state().clone();

    let mut prompter = ScriptedPrompter::new("Delay=4 Decay=0.4   ", "");
    assert!(sel.edit_parameters(&mut prompter));

    assert_eq!(
        prompter.calls,
        vec![(
            "params".to_string(),
            "Echo".to_string(),
            "Delay=1 Decay=0.5".to_string()
        )]
    );
    let st = sel.state();
    assert_eq!(st.parameter_text, "Delay=4 Decay=0.4");
    assert_eq!(st.internal_command_name, before.internal_command_name);
    assert_eq!(st.display_text, before.display_text);
    assert_eq!(st.detail_text, before.detail_text);
    assert_eq!(st.actions, before.actions);
}

#[test]
fn use_preset_replaces_params_only() {
    let catalog = audio_catalog();
    let registry = audio_registry();
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    sel.on_selection_changed(1);

    let mut prompter = ScriptedPrompter::new("", "Delay=0.12 Decay=0.3\n");
    assert!(sel.use_preset(&mut prompter));
    assert_eq!(sel.state().parameter_text, "Delay=0.12 Decay=0.3");
    assert_eq!(sel.state().internal_command_name, "Echo");
}

#[test]
fn disabled_actions_do_not_prompt() {
    let catalog = audio_catalog();
    let registry = audio_registry();
    let mut sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    sel.load_catalog();
    sel.on_selection_changed(2);

    let mut prompter = ScriptedPrompter::new("x", "y");
    assert!(!sel.edit_parameters(&mut prompter));
    assert!(!sel.use_preset(&mut prompter));
    assert!(prompter.calls.is_empty());

    sel.on_selection_changed(0);
    assert!(!sel.use_preset(&mut prompter));
    assert!(prompter.calls.is_empty());
}

#[test]
fn show_help_opens_dialog_page() {
    struct Recorder(Vec<String>);
    impl HelpViewer for Recorder {
        fn show_help(&mut self, page: &str) {
            self.0.push(page.to_string());
        }
    }

    let catalog = audio_catalog();
    let registry = audio_registry();
    let sel = CommandSelector::new(&catalog, &registry, &NoParamMemory);
    let mut viewer = Recorder(Vec::new());
    sel.show_help(&mut viewer);
    assert_eq!(viewer.0, vec![HELP_PAGE.to_string()]);
}
