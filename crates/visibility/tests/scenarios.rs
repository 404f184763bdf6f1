mod common;

use common::{anatomy, outline};
use pretty_assertions::assert_eq;
use scene_tree::prelude::*;
use visibility::{
    family, hide, on_active_changed, show_hidden, FamilyMode, HideOptions, ScopeFallback,
    ShowOptions, VisibilityError, VisibilitySettings,
};

/// A -> B -> C.t -> D-line
fn chain() -> (SceneGraph, [NodeId; 4]) {
    let mut scene = SceneGraph::new();
    let a = scene.add("A", NodeKind::Regular);
    let b = scene.add_child(a, "B", NodeKind::Regular).unwrap();
    let c = scene.add_child(b, "C.t", NodeKind::LabelText).unwrap();
    let d = scene.add_child(c, "D-line", NodeKind::LabelLine).unwrap();
    (scene, [a, b, c, d])
}

#[test]
fn labels_only_family_reaches_through_a_regular_child() {
    let (scene, [a, _b, c, d]) = chain();
    assert_eq!(
        family(&scene, a, FamilyMode::LabelsOnly).as_slice(),
        &[a, c, d]
    );
}

#[test]
fn hide_following_parent_takes_the_whole_subtree() {
    let (mut scene, [a, b, c, d]) = chain();
    scene.select_active(a);

    let report = hide(&mut scene, &HideOptions::new(), &VisibilitySettings::default()).unwrap();
    assert_eq!(report.roots, vec![a]);
    assert_eq!(report.hidden, vec![a, b, c, d]);
}

#[test]
fn hide_without_following_parent_keeps_regular_children() {
    let (mut scene, [a, b, c, d]) = chain();
    scene.select_active(a);

    let options = HideOptions::new().follow_parent(false);
    let report = hide(&mut scene, &options, &VisibilitySettings::default()).unwrap();
    assert_eq!(report.hidden, vec![a, c, d]);
    assert!(!scene.is_hidden(b));
}

#[test]
fn hide_unselected_spares_both_families_and_lights() {
    let mut a = anatomy();
    a.scene.set_hidden(a.sun, true);
    a.scene.set_selected(a.femur, true);
    a.scene.set_selected(a.biceps, true);
    a.scene.set_active(Some(a.femur));

    let options = HideOptions::new().hide_unselected(true);
    let report = hide(&mut a.scene, &options, &VisibilitySettings::default()).unwrap();

    assert_eq!(report.roots, vec![a.femur, a.biceps]);
    assert_eq!(
        report.hidden,
        vec![
            a.leg,
            a.tibia,
            a.tibia_label,
            a.tibia_line,
            a.bones_group,
            a.bones_group_line,
            a.skull,
            a.frontal,
            a.muscles_group,
        ]
    );
    for id in [a.femur, a.femur_label, a.femur_line, a.biceps, a.biceps_label] {
        assert!(!a.scene.is_hidden(id));
    }
    assert!(a.scene.is_hidden(a.sun));
}

#[test]
fn hide_unselected_never_hides_a_visible_light() {
    let mut a = anatomy();
    a.scene.select_active(a.tibia);

    let options = HideOptions::new().hide_unselected(true);
    hide(&mut a.scene, &options, &VisibilitySettings::default()).unwrap();

    assert!(!a.scene.is_hidden(a.sun));
    assert!(a.scene.is_hidden(a.femur));
}

#[test]
fn hide_unselected_in_active_layer_leaves_other_layers() {
    let mut a = anatomy();
    a.scene.select_active(a.femur);

    let options = HideOptions::new().hide_unselected(true).active_layer_only(true);
    let report = hide(&mut a.scene, &options, &VisibilitySettings::default()).unwrap();

    assert_eq!(
        report.hidden,
        vec![
            a.leg,
            a.tibia,
            a.tibia_label,
            a.tibia_line,
            a.bones_group,
            a.bones_group_line,
            a.skull,
            a.frontal,
        ]
    );
    assert!(!a.scene.is_hidden(a.biceps));
    assert!(!a.scene.is_hidden(a.muscles_group));
}

#[test]
fn layer_scoped_hide_is_rejected_without_a_layer() {
    let mut a = anatomy();
    a.scene.select_active(a.sun);
    let strict = VisibilitySettings::new().scope_fallback(ScopeFallback::Reject);

    let options = HideOptions::new().hide_unselected(true).active_layer_only(true);
    assert_eq!(
        hide(&mut a.scene, &options, &strict),
        Err(VisibilityError::NoActiveLayer(a.sun))
    );
    assert!(a.scene.objects().iter().all(|&id| !a.scene.is_hidden(id)));
}

#[test]
fn layer_scoped_show_widens_to_the_scene_by_default() {
    let mut a = anatomy();
    a.scene.set_hidden(a.biceps, true);
    a.scene.set_hidden(a.leg, true);
    a.scene.set_active(Some(a.sun));

    let options = ShowOptions::new().active_layer_only(true);
    let report = show_hidden(&mut a.scene, &options, &VisibilitySettings::default()).unwrap();
    assert_eq!(report.shown, vec![a.leg, a.biceps]);
}

#[test]
fn reactor_reshapes_labels_around_the_active_object() {
    let mut a = anatomy();
    let settings = VisibilitySettings::default();

    a.scene.set_active(Some(a.femur));
    let report = on_active_changed(&mut a.scene, &settings);
    assert_eq!(report.active, Some(a.femur));
    assert_eq!(
        report.hidden,
        vec![a.muscles_group, a.tibia_label, a.tibia_line, a.biceps_label, a.frontal]
    );
    assert!(report.shown.is_empty());

    insta::assert_snapshot!(outline(&a.scene), @r"
    Sun
    Leg
      Femur
        Femur.t
          Femur-line
      Tibia
        Tibia.t (hidden)
          Tibia-line (hidden)
    Bones of leg.g
      Bones of leg-line
    Skull...
      Frontal bone (hidden)
    Biceps
      Biceps.t (hidden)
    Muscles of arm.g (hidden)
    ");

    a.scene.set_active(Some(a.tibia));
    let report = on_active_changed(&mut a.scene, &settings);
    assert_eq!(report.shown, vec![a.tibia_label, a.tibia_line]);
    assert_eq!(report.hidden, vec![a.femur_label, a.femur_line]);
}

#[test]
fn reactor_is_idempotent() {
    let mut a = anatomy();
    let settings = VisibilitySettings::default();
    a.scene.set_active(Some(a.biceps));

    let first = on_active_changed(&mut a.scene, &settings);
    assert!(first.changed() > 0);
    let second = on_active_changed(&mut a.scene, &settings);
    assert_eq!(second.changed(), 0);
    assert_eq!(second.active, Some(a.biceps));
}

#[test]
fn reactor_shows_container_children_only_while_active() {
    let mut a = anatomy();
    let settings = VisibilitySettings::default();

    a.scene.set_active(Some(a.femur));
    on_active_changed(&mut a.scene, &settings);
    assert!(a.scene.is_hidden(a.frontal));

    a.scene.set_active(Some(a.skull));
    let report = on_active_changed(&mut a.scene, &settings);
    assert!(report.shown.contains(&a.frontal));
    assert!(!a.scene.is_hidden(a.frontal));
}

#[test]
fn reactor_ignores_an_active_label() {
    let mut a = anatomy();
    let settings = VisibilitySettings::default();
    a.scene.set_active(Some(a.femur));
    on_active_changed(&mut a.scene, &settings);

    a.scene.set_active(Some(a.biceps_label));
    let report = on_active_changed(&mut a.scene, &settings);
    assert!(report.is_skipped());
    assert!(a.scene.is_hidden(a.biceps_label));
    assert!(!a.scene.is_hidden(a.femur_label));
}

#[test]
fn group_labels_hidden_for_scene_level_active_object() {
    let mut a = anatomy();
    let settings = VisibilitySettings::default();
    a.scene.set_active(Some(a.sun));

    on_active_changed(&mut a.scene, &settings);
    for id in [a.bones_group, a.bones_group_line, a.muscles_group] {
        assert!(a.scene.is_hidden(id));
    }
}
