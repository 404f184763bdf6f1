//! Small hierarchy utilities: selection expansion, render sync, label renaming

use log::{debug, warn};
use scene_tree::{NodeId, NodeKind, SceneHost, TreeTraversal};

use crate::error::{Result, VisibilityError};

/// Select the active object's parent and everything below the selection
///
/// Returns the newly selected objects.
pub fn select_hierarchy<H>(host: &mut H) -> Result<Vec<NodeId>>
where
    H: SceneHost,
{
    let active = host.active_object().ok_or(VisibilityError::NoActiveObject)?;

    let mut newly = Vec::new();
    if let Some(parent) = host.parent(active) {
        if host.set_selected(parent, true) {
            newly.push(parent);
        }
    }
    for id in host.selection() {
        for d in host.descendants(id) {
            if host.set_selected(d, true) {
                newly.push(d);
            }
        }
    }
    debug!("Selected hierarchy of {}: {} new objects", active, newly.len());
    Ok(newly)
}

/// Make render exclusion match viewport visibility for every object
///
/// Returns the number of objects changed.
pub fn sync_render_visibility<H>(host: &mut H) -> usize
where
    H: SceneHost + ?Sized,
{
    let mut changed = 0;
    for id in host.objects() {
        let visible = host.is_visible(id);
        if host.set_render_hidden(id, !visible) {
            changed += 1;
        }
    }
    debug!("Synced render visibility: {} objects changed", changed);
    changed
}

/// Rename a label text and its line after `text`
///
/// The label becomes `"{text}.t"` and its first child `"{text}-line"`.
pub fn rename_label<H>(host: &mut H, label: NodeId, text: &str) -> Result<()>
where
    H: SceneHost + ?Sized,
{
    if !host.contains(label) {
        return Err(VisibilityError::UnknownNode(label));
    }
    if host.kind(label) != NodeKind::LabelText {
        warn!("Rename label: {} is not a label", label);
        return Err(VisibilityError::NotALabel(label));
    }

    host.rename(label, &format!("{text}.t"));
    let line = host.children(label).next();
    if let Some(line) = line {
        host.rename(line, &format!("{text}-line"));
    }
    Ok(())
}
