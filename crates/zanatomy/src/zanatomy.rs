use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Context;
use glam::Quat;
use log::info;
use scene_tree::prelude::*;
use scene_tree::{clean_name, SceneError};
use visibility::{enter_local_view, exit_local_view, hide, show_hidden, HideOptions, ShowOptions};
use zanatomy::{Config, EventBus, Session};

struct Demo {
    scene: SceneGraph,
    femur: NodeId,
    tibia: NodeId,
    biceps: NodeId,
}

/// A handful of bones and muscles with labels, in two systems
fn demo_scene() -> Result<Demo, SceneError> {
    let mut scene = SceneGraph::new();
    let skeleton = scene.new_collection("Skeletal system", CollectionId::SCENE)?;
    let muscles = scene.new_collection("Muscular system", CollectionId::SCENE)?;

    let sun = scene.add_light("Sun");
    scene.link(sun, CollectionId::SCENE)?;

    let bones = [
        "Bones of lower limb.g",
        "Femur",
        "Femur.t",
        "Femur-line",
        "Tibia",
        "Tibia.t",
        "Tibia-line",
        "Skull...",
        "Frontal bone",
    ]
    .map(|name| scene.add_legacy(name, ObjectType::Mesh));
    let [group, femur, femur_t, femur_line, tibia, tibia_t, tibia_line, skull, frontal] = bones;
    scene.set_parent(femur_t, Some(femur))?;
    scene.set_parent(femur_line, Some(femur_t))?;
    scene.set_parent(tibia_t, Some(tibia))?;
    scene.set_parent(tibia_line, Some(tibia_t))?;
    scene.set_parent(frontal, Some(skull))?;
    scene.set_parent(femur, Some(group))?;
    scene.set_parent(tibia, Some(group))?;
    for &id in &bones {
        scene.link(id, skeleton)?;
    }

    let biceps = scene.add("Biceps brachii", NodeKind::Regular);
    let biceps_t = scene.add_child(biceps, "Biceps brachii.t", NodeKind::LabelText)?;
    scene.link(biceps, muscles)?;
    scene.link(biceps_t, muscles)?;

    Ok(Demo {
        scene,
        femur,
        tibia,
        biceps,
    })
}

fn log_outline(scene: &SceneGraph) {
    for id in scene.walk(TraversalOrder::PreOrder) {
        let name = scene.name(id).unwrap_or_default();
        let state = if scene.is_visible(id) { "" } else { " (hidden)" };
        info!("{:indent$}{}{}", "", name, state, indent = scene.depth(id) * 2);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let Demo {
        mut scene,
        femur,
        tibia,
        biceps,
    } = demo_scene().context("Failed to build the demo scene")?;

    let bus = Rc::new(RefCell::new(EventBus::new()));
    let config = Config::new().refresh_interval(Duration::from_millis(16));
    let mut session = Session::new(bus.clone(), config);
    session.start().context("Failed to start the session")?;

    // Picking an object reshapes the labels around it
    scene.select_active(femur);
    bus.borrow_mut().dispatch(&mut scene);
    info!("Active: {}", clean_name(scene.name(femur).unwrap_or_default()).0);
    log_outline(&scene);

    // Orbiting the viewport turns the labels on the next tick
    session.set_viewport_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_4));
    let fired = bus.borrow_mut().advance(&mut scene, Duration::from_millis(16));
    info!("{} timers fired", fired);

    // Hide everything but the femur and the biceps, then bring it all back
    scene.set_selected(biceps, true);
    let settings = session.settings();
    let report = hide(&mut scene, &HideOptions::new().hide_unselected(true), &settings)
        .context("Failed to hide unselected objects")?;
    info!("Hid {} objects around {:?}", report.hidden.len(), report.roots);
    log_outline(&scene);

    let report = show_hidden(&mut scene, &ShowOptions::new(), &settings)
        .context("Failed to reveal hidden objects")?;
    info!("Revealed {} objects", report.shown.len());

    scene.deselect_all();
    scene.select_active(tibia);
    bus.borrow_mut().dispatch(&mut scene);
    let view = enter_local_view(&mut scene).context("Failed to enter local view")?;
    info!("Local view of {} objects", view.members.len());
    log_outline(&scene);
    exit_local_view(&mut scene);

    session.set_group_labels(&mut scene, false);
    session.stop().context("Failed to stop the session")?;
    Ok(())
}
