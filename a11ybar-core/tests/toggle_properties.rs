use a11ybar_core::{
    Controller, ExclusionGroup, Feature, FlagSet, FlagStore, MemoryStore, RecordedStyle, WidgetConfig,
    derive_class_list,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn fresh(store: &MemoryStore) -> Controller<&MemoryStore, RecordedStyle> {
    let mut ctl = Controller::new(store, RecordedStyle::new(), &WidgetConfig::default());
    ctl.initialize();
    ctl
}

fn toggle_sequence(len: usize) -> Vec<Feature> {
    let mut rng = SmallRng::seed_from_u64(0x2545_f491);
    (0..len)
        .map(|_| Feature::ALL[rng.gen_range(0..Feature::COUNT)])
        .collect()
}

fn active_in(flags: FlagSet, group: ExclusionGroup) -> usize {
    flags
        .active()
        .filter(|f| f.exclusion_group() == Some(group))
        .count()
}

#[test]
fn at_most_one_flag_per_group_after_any_sequence() {
    let store = MemoryStore::new();
    let mut ctl = fresh(&store);
    for feature in toggle_sequence(500) {
        ctl.toggle(feature);
        let flags = ctl.flags();
        assert!(active_in(flags, ExclusionGroup::Visual) <= 1);
        assert!(active_in(flags, ExclusionGroup::Alignment) <= 1);
    }
}

#[test]
fn conflicting_stored_flags_keep_the_first_group_member() {
    let store = MemoryStore::new();
    for key in ["lightContrast", "darkContrast", "rightAlign", "leftAlign", "bigCursor"] {
        store.mark(key).unwrap();
    }
    let ctl = fresh(&store);
    let flags = ctl.flags();
    assert_eq!(active_in(flags, ExclusionGroup::Visual), 1);
    assert_eq!(active_in(flags, ExclusionGroup::Alignment), 1);
    assert!(ctl.is_on(Feature::DarkContrast));
    assert!(ctl.is_on(Feature::LeftAlign));
    assert!(ctl.is_on(Feature::BigCursor));

    assert!(ctl.style().has_class("dark-contrast"));
    assert!(!ctl.style().has_class("light-contrast"));
    assert_eq!(
        ctl.class_list().into_iter().collect::<Vec<_>>(),
        vec!["cursor", "left-align"]
    );
    let keys = store.keys();
    assert!(!keys.contains("lightContrast"));
    assert!(!keys.contains("rightAlign"));
    assert!(keys.contains("darkContrast"));
    assert!(keys.contains("leftAlign"));
}

#[test]
fn storage_mirrors_persistable_flags() {
    let store = MemoryStore::new();
    let mut ctl = fresh(&store);
    for feature in toggle_sequence(200) {
        ctl.toggle(feature);
        for f in Feature::ALL {
            if let Some(key) = f.storage_key() {
                assert_eq!(store.keys().contains(key), ctl.is_on(f), "{f} out of sync");
            }
        }
    }
}

#[test]
fn reset_twice_matches_reset_once() {
    let store = MemoryStore::new();
    let mut ctl = fresh(&store);
    ctl.toggle(Feature::BigCursor);
    ctl.toggle(Feature::Desaturation);
    ctl.toggle(Feature::PageStructure);
    ctl.reset();
    let once = (ctl.flags(), store.keys());
    ctl.reset();
    let twice = (ctl.flags(), store.keys());
    assert_eq!(once, twice);
    assert_eq!(twice.0, FlagSet::new());
    assert!(twice.1.is_empty());
}

#[test]
fn reset_deletes_keys_of_excluded_features() {
    let store = MemoryStore::new();
    store.mark("magnify").unwrap();
    let cfg = WidgetConfig {
        excluded_features: vec!["magnify".into()],
        ..WidgetConfig::default()
    };
    let mut ctl = Controller::new(&store, RecordedStyle::new(), &cfg);
    ctl.initialize();
    ctl.toggle(Feature::HideImage);
    ctl.reset();
    assert!(store.keys().is_empty());
}

#[test]
fn persisted_flags_survive_reinitialization() {
    let store = MemoryStore::new();
    for feature in Feature::ALL {
        if feature.storage_key().is_none() {
            continue;
        }
        let companion = if feature == Feature::BigCursor {
            Feature::HideImage
        } else {
            Feature::BigCursor
        };
        let mut ctl = fresh(&store);
        ctl.reset();
        ctl.toggle(feature);
        ctl.toggle(companion);
        let before = ctl.flags();

        let reloaded = fresh(&store);
        assert!(reloaded.is_on(feature), "{feature} lost on reload");
        assert_eq!(reloaded.flags(), before);
    }
}

#[test]
fn page_structure_panel_is_closed_after_reload() {
    let store = MemoryStore::new();
    let mut ctl = fresh(&store);
    ctl.toggle(Feature::PageStructure);
    assert!(ctl.is_on(Feature::PageStructure));
    let reloaded = fresh(&store);
    assert!(!reloaded.is_on(Feature::PageStructure));
}

#[test]
fn class_list_depends_only_on_flag_values() {
    let store_a = MemoryStore::new();
    let store_b = MemoryStore::new();
    let mut a = fresh(&store_a);
    let mut b = fresh(&store_b);

    for feature in toggle_sequence(64) {
        a.toggle(feature);
    }
    // Reach the same flags along a different path.
    for feature in a.flags().active() {
        b.toggle(feature);
    }
    assert_eq!(a.flags(), b.flags());
    assert_eq!(a.class_list(), b.class_list());
    assert_eq!(derive_class_list(&a.flags()), a.class_list());
}

#[test]
fn contrast_exclusivity_scenario() {
    let store = MemoryStore::new();
    let mut ctl = fresh(&store);
    assert_eq!(ctl.flags(), FlagSet::new());

    ctl.toggle(Feature::DarkContrast);
    assert!(ctl.is_on(Feature::DarkContrast));
    assert!(Feature::DarkContrast.rivals().all(|r| !ctl.is_on(r)));

    ctl.toggle(Feature::LightContrast);
    assert!(ctl.is_on(Feature::LightContrast));
    assert!(!ctl.is_on(Feature::DarkContrast));
    assert!(!ctl.style().has_class("dark-contrast"));
    assert!(ctl.style().has_class("light-contrast"));
}

#[test]
fn reset_enablement_scenario() {
    for feature in Feature::ALL {
        let store = MemoryStore::new();
        let mut ctl = fresh(&store);
        assert!(!ctl.reset_enabled());
        assert!(!ctl.reset());
        assert_eq!(ctl.flags(), FlagSet::new());

        ctl.toggle(feature);
        assert!(ctl.reset_enabled(), "{feature} should enable reset");
        assert!(ctl.reset());
        assert_eq!(ctl.flags(), FlagSet::new());
        assert!(!ctl.reset_enabled());
    }
}

#[test]
fn unavailable_storage_is_never_fatal() {
    let store = MemoryStore::disabled();
    let mut ctl = fresh(&store);
    assert_eq!(ctl.flags(), FlagSet::new());
    for feature in toggle_sequence(50) {
        ctl.toggle(feature);
    }
    ctl.toggle(Feature::BigCursor);
    ctl.reset();
    assert_eq!(ctl.flags(), FlagSet::new());
}
