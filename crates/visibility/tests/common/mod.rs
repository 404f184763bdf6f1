#![allow(dead_code)]

use scene_tree::prelude::*;

/// Render a scene as an indented outline, flagging hidden objects
pub fn outline(scene: &SceneGraph) -> String {
    scene
        .walk(TraversalOrder::PreOrder)
        .map(|id| {
            let mut line = format!(
                "{:indent$}{}",
                "",
                scene.name(id).unwrap_or("?"),
                indent = scene.depth(id) * 2
            );
            if scene.is_hidden(id) {
                line.push_str(" (hidden)");
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Objects built from a compact description
pub struct Anatomy {
    pub scene: SceneGraph,
    pub skeleton: CollectionId,
    pub muscles: CollectionId,
    pub sun: NodeId,
    pub leg: NodeId,
    pub femur: NodeId,
    pub femur_label: NodeId,
    pub femur_line: NodeId,
    pub tibia: NodeId,
    pub tibia_label: NodeId,
    pub tibia_line: NodeId,
    pub bones_group: NodeId,
    pub bones_group_line: NodeId,
    pub biceps: NodeId,
    pub biceps_label: NodeId,
    pub muscles_group: NodeId,
    pub skull: NodeId,
    pub frontal: NodeId,
}

/// A small anatomy scene:
///
/// ```text
/// Sun (light, scene collection)
/// Leg                                [Skeletal system]
///   Femur -> Femur.t -> Femur-line
///   Tibia -> Tibia.t -> Tibia-line
/// Bones of leg.g -> Bones of leg-line [Skeletal system]
/// Biceps -> Biceps.t                 [Muscular system]
/// Muscles of arm.g                   [Muscular system]
/// Skull... -> Frontal bone           [Skeletal system]
/// ```
pub fn anatomy() -> Anatomy {
    let mut scene = SceneGraph::new();
    let skeleton = scene.new_collection("Skeletal system", CollectionId::SCENE).unwrap();
    let muscles = scene.new_collection("Muscular system", CollectionId::SCENE).unwrap();

    let sun = scene.add_light("Sun");
    scene.link(sun, CollectionId::SCENE).unwrap();

    let leg = scene.add("Leg", NodeKind::Regular);
    let femur = scene.add_child(leg, "Femur", NodeKind::Regular).unwrap();
    let femur_label = scene.add_child(femur, "Femur.t", NodeKind::LabelText).unwrap();
    let femur_line = scene.add_child(femur_label, "Femur-line", NodeKind::LabelLine).unwrap();
    let tibia = scene.add_child(leg, "Tibia", NodeKind::Regular).unwrap();
    let tibia_label = scene.add_child(tibia, "Tibia.t", NodeKind::LabelText).unwrap();
    let tibia_line = scene.add_child(tibia_label, "Tibia-line", NodeKind::LabelLine).unwrap();
    let bones_group = scene.add("Bones of leg.g", NodeKind::Group);
    let bones_group_line = scene
        .add_child(bones_group, "Bones of leg-line", NodeKind::LabelLine)
        .unwrap();
    let skull = scene.add("Skull...", NodeKind::EllipsisContainer);
    let frontal = scene.add_child(skull, "Frontal bone", NodeKind::Regular).unwrap();
    for id in [
        leg,
        femur,
        femur_label,
        femur_line,
        tibia,
        tibia_label,
        tibia_line,
        bones_group,
        bones_group_line,
        skull,
        frontal,
    ] {
        scene.link(id, skeleton).unwrap();
    }

    let biceps = scene.add("Biceps", NodeKind::Regular);
    let biceps_label = scene.add_child(biceps, "Biceps.t", NodeKind::LabelText).unwrap();
    let muscles_group = scene.add("Muscles of arm.g", NodeKind::Group);
    for id in [biceps, biceps_label, muscles_group] {
        scene.link(id, muscles).unwrap();
    }

    Anatomy {
        scene,
        skeleton,
        muscles,
        sun,
        leg,
        femur,
        femur_label,
        femur_line,
        tibia,
        tibia_label,
        tibia_line,
        bones_group,
        bones_group_line,
        biceps,
        biceps_label,
        muscles_group,
        skull,
        frontal,
    }
}
