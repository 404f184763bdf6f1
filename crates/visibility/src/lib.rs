// Visibility operators for labelled scene hierarchies
// This crate decides which objects are shown or hidden when the user hides,
// reveals, isolates or activates objects in a scene.

mod error;
mod family;
mod hide;
mod hierarchy;
mod labels;
mod local_view;
mod plan;
mod reactor;
mod root;
mod scope;
mod settings;
mod show;

pub use error::{Result, VisibilityError};
pub use family::{families, family, Family, FamilyMode};
pub use hide::{hide, HideOptions, HideReport};
pub use hierarchy::{rename_label, select_hierarchy, sync_render_visibility};
pub use labels::{plan_ellipsis_children, plan_foreign_labels, plan_group_labels, set_group_labels};
pub use local_view::{enter_local_view, exit_local_view, LocalView};
pub use plan::{Applied, VisibilityPlan};
pub use reactor::{on_active_changed, plan_for_active, ReactorReport};
pub use root::{find_root, resolve_roots, RootPolicy};
pub use scope::{active_layer, Scope};
pub use settings::{ScopeFallback, VisibilitySettings};
pub use show::{show_hidden, ShowOptions, ShowReport};
