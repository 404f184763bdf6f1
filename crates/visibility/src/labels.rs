//! Label visibility rules shared by the operators and the selection reactor

use std::collections::HashSet;

use log::debug;
use scene_tree::{NodeId, NodeKind, SceneHost};

use crate::plan::{Applied, VisibilityPlan};
use crate::settings::VisibilitySettings;

fn objects_of_kind<H>(host: &H, kind: NodeKind) -> Vec<NodeId>
where
    H: SceneHost + ?Sized,
{
    host.objects()
        .into_iter()
        .filter(|&id| host.kind(id) == kind)
        .collect()
}

/// A group label followed by the label lines hanging off it
fn with_lines<H>(host: &H, group: NodeId) -> Vec<NodeId>
where
    H: SceneHost + ?Sized,
{
    let mut ids = vec![group];
    ids.extend(
        host.children(group)
            .filter(|&c| host.kind(c) == NodeKind::LabelLine),
    );
    ids
}

/// Group labels are shown only for the active object's own collection
///
/// All of them are hidden when group labels are disabled, when there is no
/// active object, or when the active object lives directly in the scene
/// master collection.
pub fn plan_group_labels<H>(
    host: &H,
    active: Option<NodeId>,
    settings: &VisibilitySettings,
    plan: &mut VisibilityPlan,
) where
    H: SceneHost + ?Sized,
{
    let groups = objects_of_kind(host, NodeKind::Group);
    if groups.is_empty() {
        return;
    }

    let collection = active
        .and_then(|a| host.primary_collection(a))
        .filter(|c| !c.is_scene());

    match collection {
        Some(collection) if settings.enable_group_labels => {
            let inside: HashSet<NodeId> = host.collection_objects(collection).into_iter().collect();
            for group in groups {
                if inside.contains(&group) {
                    plan.show_all(with_lines(host, group));
                } else {
                    plan.hide_all(with_lines(host, group));
                }
            }
        }
        _ => {
            for group in groups {
                plan.hide_all(with_lines(host, group));
            }
        }
    }
}

/// Every label text other than the active object's own is hidden, with its children
///
/// Labels are gathered from every object, hidden or not, since the plan does not
/// read the current hide flags. Lines under a label that is already hidden are
/// hidden along with it.
pub fn plan_foreign_labels<H>(host: &H, active: Option<NodeId>, plan: &mut VisibilityPlan)
where
    H: SceneHost + ?Sized,
{
    for label in objects_of_kind(host, NodeKind::LabelText) {
        if Some(label) == active || (active.is_some() && host.parent(label) == active) {
            continue;
        }
        plan.hide(label);
        plan.hide_all(host.children(label).collect::<Vec<_>>());
    }
}

/// Ellipsis containers show their children only while active
///
/// Every container is considered, hidden or not. Children of a hidden inactive
/// container are hidden too.
pub fn plan_ellipsis_children<H>(host: &H, active: Option<NodeId>, plan: &mut VisibilityPlan)
where
    H: SceneHost + ?Sized,
{
    for container in objects_of_kind(host, NodeKind::EllipsisContainer) {
        let children: Vec<NodeId> = host.children(container).collect();
        if Some(container) == active {
            plan.show_all(children);
        } else {
            plan.hide_all(children);
        }
    }
}

/// Toggle group labels and bring the scene in line with the new setting
pub fn set_group_labels<H>(
    host: &mut H,
    settings: &mut VisibilitySettings,
    enabled: bool,
) -> Applied
where
    H: SceneHost + ?Sized,
{
    settings.enable_group_labels = enabled;
    let mut plan = VisibilityPlan::new();
    plan_group_labels(host, host.active_object(), settings, &mut plan);
    let applied = plan.apply(host);
    debug!(
        "Group labels {}: {} objects changed",
        if enabled { "enabled" } else { "disabled" },
        applied.changed()
    );
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scene_tree::{CollectionId, SceneGraph};

    struct Groups {
        scene: SceneGraph,
        bone: NodeId,
        bones_group: NodeId,
        bones_line: NodeId,
        muscles_group: NodeId,
        muscles_line: NodeId,
    }

    fn groups() -> Groups {
        let mut scene = SceneGraph::new();
        let bones = scene.new_collection("Bones", CollectionId::SCENE).unwrap();
        let muscles = scene.new_collection("Muscles", CollectionId::SCENE).unwrap();

        let bone = scene.add("Femur", NodeKind::Regular);
        let bones_group = scene.add("Bones of leg.g", NodeKind::Group);
        let bones_line = scene
            .add_child(bones_group, "Bones of leg-line", NodeKind::LabelLine)
            .unwrap();
        let muscles_group = scene.add("Muscles of leg.g", NodeKind::Group);
        let muscles_line = scene
            .add_child(muscles_group, "Muscles of leg-line", NodeKind::LabelLine)
            .unwrap();
        for id in [bone, bones_group, bones_line] {
            scene.link(id, bones).unwrap();
        }
        for id in [muscles_group, muscles_line] {
            scene.link(id, muscles).unwrap();
        }
        scene.set_active(Some(bone));

        Groups {
            scene,
            bone,
            bones_group,
            bones_line,
            muscles_group,
            muscles_line,
        }
    }

    #[test]
    fn test_group_labels_follow_active_collection() {
        let mut g = groups();
        g.scene.set_hidden(g.bones_group, true);
        let mut settings = VisibilitySettings::default();

        let applied = set_group_labels(&mut g.scene, &mut settings, true);
        assert_eq!(applied.shown, vec![g.bones_group]);
        assert_eq!(applied.hidden, vec![g.muscles_group, g.muscles_line]);
        assert!(!g.scene.is_hidden(g.bones_line));
    }

    #[test]
    fn test_disabling_group_labels_hides_all() {
        let mut g = groups();
        let mut settings = VisibilitySettings::default();

        set_group_labels(&mut g.scene, &mut settings, false);
        assert!(!settings.enable_group_labels);
        for id in [g.bones_group, g.bones_line, g.muscles_group, g.muscles_line] {
            assert!(g.scene.is_hidden(id));
        }
        assert!(!g.scene.is_hidden(g.bone));
    }

    #[test]
    fn test_foreign_labels_hidden_with_children() {
        let mut scene = SceneGraph::new();
        let femur = scene.add("Femur", NodeKind::Regular);
        let own = scene.add_child(femur, "Femur.t", NodeKind::LabelText).unwrap();
        let tibia = scene.add("Tibia", NodeKind::Regular);
        let other = scene.add_child(tibia, "Tibia.t", NodeKind::LabelText).unwrap();
        let other_line = scene.add_child(other, "Tibia-line", NodeKind::LabelLine).unwrap();

        let mut plan = VisibilityPlan::new();
        plan_foreign_labels(&scene, Some(femur), &mut plan);
        assert_eq!(plan.decision(own), None);
        assert_eq!(plan.decision(other), Some(true));
        assert_eq!(plan.decision(other_line), Some(true));
    }
}
