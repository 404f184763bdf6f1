//! Local view that keeps the scene's lights

use std::collections::HashSet;

use log::{info, warn};
use scene_tree::{NodeId, SceneHost};

use crate::error::{Result, VisibilityError};
use crate::family::{families, FamilyMode};
use crate::root::{resolve_roots, RootPolicy};

/// The isolated set of a local view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalView {
    /// Roots the selection resolved to
    pub roots: Vec<NodeId>,
    /// Objects kept in view: the roots' label families and the visible lights
    pub members: Vec<NodeId>,
    /// Members that were hidden or unselectable while the view was set up
    pub restored: Vec<NodeId>,
}

/// Isolate the selection's objects, their labels and every visible light
///
/// Members are revealed, made selectable and selected while the view is
/// recorded, then their hide and selectable flags and the selection are put
/// back as they were. Objects outside the view simply stop being visible
/// until [`exit_local_view`].
pub fn enter_local_view<H>(host: &mut H) -> Result<LocalView>
where
    H: SceneHost + ?Sized,
{
    let selection = host.selection();
    if selection.is_empty() {
        warn!("Local view: nothing selected");
        return Err(VisibilityError::NothingSelected);
    }

    let roots = resolve_roots(host, &selection, RootPolicy::StopBelowTopLevel);
    let mut members = families(host, &roots, FamilyMode::LabelsOnly);
    let lights: Vec<NodeId> = host
        .visible_objects()
        .into_iter()
        .filter(|&id| host.is_light(id) && !members.contains(&id))
        .collect();
    members.extend(lights);

    // Members are entered revealed, selectable and selected
    let mut hidden = Vec::new();
    let mut locked = Vec::new();
    for &id in &members {
        if host.set_hidden(id, false) {
            hidden.push(id);
        }
        if host.set_selectable(id, true) {
            locked.push(id);
        }
        host.set_selected(id, true);
    }

    host.set_local_view(Some(members.iter().copied().collect::<HashSet<_>>()));

    for &id in &members {
        host.set_selected(id, false);
    }
    for &id in &selection {
        host.set_selected(id, true);
    }
    for &id in &locked {
        host.set_selectable(id, false);
    }
    for &id in &hidden {
        host.set_hidden(id, true);
    }

    let mut restored = hidden;
    for id in locked {
        if !restored.contains(&id) {
            restored.push(id);
        }
    }
    info!(
        "Local view: {} roots, {} objects in view, {} flags restored",
        roots.len(),
        members.len(),
        restored.len()
    );
    Ok(LocalView {
        roots,
        members,
        restored,
    })
}

/// Leave the local view, returning false if none was active
pub fn exit_local_view<H>(host: &mut H) -> bool
where
    H: SceneHost + ?Sized,
{
    let was_active = host.local_view().is_some();
    host.set_local_view(None);
    was_active
}
