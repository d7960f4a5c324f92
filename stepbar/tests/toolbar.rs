use std::cell::RefCell;
use std::rc::Rc;

use stepbar::{
    Command, ConfigError, IconDescriptor, IconError, Toolbar, ToolbarConfig, check_unique_actions,
};

fn sample_icons() -> Vec<IconDescriptor> {
    vec![
        IconDescriptor::new("MdPlayArrow", "play"),
        IconDescriptor::new("MdPause", "pause"),
        IconDescriptor::new("MdMusicNote", "music note"),
        IconDescriptor::new("MdLocalCafe", "cafe"),
        IconDescriptor::new("MdLocalAirport", "airport"),
        IconDescriptor::new("MdPhoto", "photo"),
        IconDescriptor::new("MdCancel", "cancel"),
    ]
}

// =============================================================================
// Click Tests
// =============================================================================

#[test]
fn test_click_invokes_callback_once() {
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let sink = clicks.clone();
    let mut toolbar = Toolbar::new(sample_icons(), ToolbarConfig::default())
        .on_icon_clicked(move |action| sink.borrow_mut().push(action.to_string()));

    let before = toolbar.state().clone();
    toolbar.click_icon("play");

    assert_eq!(*clicks.borrow(), vec!["play".to_string()]);
    assert_eq!(toolbar.state(), &before);
}

#[test]
fn test_click_without_handler_is_dropped() {
    let mut toolbar = Toolbar::new(sample_icons(), ToolbarConfig::default());
    toolbar.click_icon("play");
    assert_eq!(toolbar.visible_batches().len(), 1);
}

// =============================================================================
// Expand Control Tests
// =============================================================================

#[test]
fn test_control_cycles_through_batches() {
    let mut toolbar = Toolbar::new(sample_icons(), ToolbarConfig::default());

    let control = toolbar.control().unwrap();
    assert!(!control.flipped);
    assert_eq!(control.command, Command::Expand);

    assert_eq!(toolbar.press_control(), Some(Command::Expand));
    assert_eq!(toolbar.press_control(), Some(Command::Expand));
    assert!(toolbar.all_visible());

    let control = toolbar.control().unwrap();
    assert!(control.flipped);
    assert_eq!(control.command, Command::Collapse);

    assert_eq!(toolbar.press_control(), Some(Command::Collapse));
    assert_eq!(toolbar.visible_batches().len(), 1);
}

#[test]
fn test_no_control_for_short_list() {
    let icons = sample_icons().into_iter().take(2).collect();
    let mut toolbar = Toolbar::new(icons, ToolbarConfig::default());

    assert!(toolbar.control().is_none());
    assert_eq!(toolbar.press_control(), None);
    toolbar.expand();
    assert_eq!(toolbar.visible_batches().len(), 1);
}

#[test]
fn test_empty_toolbar() {
    let toolbar = Toolbar::new(Vec::new(), ToolbarConfig::default());
    assert_eq!(toolbar.visible_batches().len(), 1);
    assert_eq!(toolbar.visible_batches()[0].key(), "");
    assert!(toolbar.control().is_none());
}

#[test]
fn test_toolbar_without_icons() {
    let mut toolbar = Toolbar::without_icons(ToolbarConfig::default());
    assert!(toolbar.icons().is_none());
    assert!(toolbar.all_visible());
    assert!(toolbar.control().is_none());
    toolbar.expand();
    assert_eq!(toolbar.visible_batches().len(), 1);
}

#[test]
fn test_single_full_batch_shows_flipped_control() {
    let icons = sample_icons().into_iter().take(3).collect();
    let toolbar = Toolbar::new(icons, ToolbarConfig::default());

    let control = toolbar.control().unwrap();
    assert!(control.flipped);
    assert_eq!(control.command, Command::Collapse);
}

#[test]
fn test_grip_is_cosmetic() {
    let mut plain = Toolbar::new(sample_icons(), ToolbarConfig::default());
    let mut gripped = Toolbar::new(sample_icons(), ToolbarConfig::default()).with_grip(true);
    assert!(!plain.has_grip());
    assert!(gripped.has_grip());

    plain.expand();
    gripped.expand();
    assert_eq!(plain.state(), gripped.state());
}

#[test]
fn test_custom_batch_size() {
    let config = ToolbarConfig::default().batch_size(2);
    let mut toolbar = Toolbar::new(sample_icons(), config);
    toolbar.expand();
    toolbar.expand();
    toolbar.expand();
    let lens: Vec<usize> = toolbar.visible_batches().iter().map(|b| b.len()).collect();
    assert_eq!(lens, vec![2, 2, 2, 1]);
    assert!(toolbar.all_visible());
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_config_defaults() {
    let config = ToolbarConfig::default();
    assert_eq!(config.batch_size, 3);
    assert_eq!(config.icon_width, 35);
}

#[test]
fn test_config_rejects_zero() {
    assert_eq!(ToolbarConfig::new(0, 35), Err(ConfigError::ZeroBatchSize));
    assert_eq!(ToolbarConfig::new(3, 0), Err(ConfigError::ZeroIconWidth));
    assert!(ToolbarConfig::new(4, 20).is_ok());
}

#[test]
fn test_config_from_json_fills_defaults() {
    let config: ToolbarConfig = serde_json::from_str(r#"{ "batch_size": 4 }"#).unwrap();
    assert_eq!(config.batch_size, 4);
    assert_eq!(config.icon_width, 35);
}

#[test]
fn test_zero_batch_size_is_clamped() {
    let icons = sample_icons().into_iter().take(2).collect();
    let mut toolbar = Toolbar::new(icons, ToolbarConfig::default().batch_size(0));
    assert_eq!(toolbar.config().batch_size, 1);

    for _ in 0..5 {
        toolbar.press_control();
        let batches = toolbar.visible_batches();
        assert!(batches.len() <= 2);
        assert!(batches.iter().all(|b| !b.is_empty()));
    }

    let keys: Vec<&str> = toolbar.visible_batches().iter().map(|b| b.key()).collect();
    assert_eq!(keys, vec!["play", "pause"]);
    assert!(toolbar.all_visible());
}

#[test]
fn test_zero_sizes_from_json_are_clamped() {
    let config: ToolbarConfig =
        serde_json::from_str(r#"{ "batch_size": 0, "icon_width": 0 }"#).unwrap();
    assert_eq!(config.validate(), Err(ConfigError::ZeroBatchSize));

    let toolbar = Toolbar::new(sample_icons(), config);
    assert_eq!(*toolbar.config(), ToolbarConfig::new(1, 1).unwrap());
}

// =============================================================================
// Icon List Tests
// =============================================================================

#[test]
fn test_icons_from_json() {
    let icons: Vec<IconDescriptor> =
        serde_json::from_str(r#"[{ "icon": "MdPlayArrow", "action": "play" }]"#).unwrap();
    assert_eq!(icons, vec![IconDescriptor::new("MdPlayArrow", "play")]);
}

#[test]
fn test_duplicate_actions_reported() {
    let mut icons = sample_icons();
    icons.push(IconDescriptor::new("MdReplay", "play"));

    assert_eq!(
        check_unique_actions(&icons),
        Err(IconError::DuplicateAction {
            action: "play".to_string(),
            first: 0,
            second: 7,
        })
    );
    assert!(check_unique_actions(&sample_icons()).is_ok());
}
