use std::collections::HashSet;

use proptest::prelude::*;
use scene_tree::prelude::*;

fn parent_choices() -> impl Strategy<Value = Vec<Option<usize>>> {
    prop::collection::vec(prop::option::of(0usize..64), 1..48)
}

/// Build a scene where object `i` is parented to `parents[i] % i` (or is top-level)
fn random_scene(parents: &[Option<usize>]) -> SceneGraph {
    let mut scene = SceneGraph::new();
    let mut ids = Vec::new();
    for (i, parent) in parents.iter().enumerate() {
        let id = scene.add(format!("obj{i}"), NodeKind::Regular);
        if let (Some(p), true) = (parent, i > 0) {
            scene.set_parent(id, Some(ids[p % i])).unwrap();
        }
        ids.push(id);
    }
    scene
}

proptest! {
    #[test]
    fn walk_visits_every_object_once(parents in parent_choices()) {
        let scene = random_scene(&parents);

        for order in [
            TraversalOrder::PreOrder,
            TraversalOrder::PostOrder,
            TraversalOrder::BreadthFirst,
        ] {
            let visited: Vec<_> = scene.walk(order).collect();
            let unique: HashSet<_> = visited.iter().copied().collect();
            prop_assert_eq!(visited.len(), scene.node_count());
            prop_assert_eq!(unique.len(), scene.node_count());
        }
    }

    #[test]
    fn depth_matches_ancestor_chain(parents in parent_choices()) {
        let scene = random_scene(&parents);

        for id in scene.objects() {
            let ancestors = scene.ancestors(id);
            prop_assert_eq!(scene.depth(id), ancestors.len());
            if let Some(&top) = ancestors.last() {
                prop_assert!(scene.is_top_level(top));
                prop_assert!(scene.is_ancestor_of(top, id));
            } else {
                prop_assert!(scene.is_top_level(id));
            }
        }
    }

    #[test]
    fn preorder_puts_parents_first(parents in parent_choices()) {
        let scene = random_scene(&parents);
        let order: Vec<_> = scene.walk(TraversalOrder::PreOrder).collect();

        for (pos, id) in order.iter().enumerate() {
            if let Some(parent) = scene.parent(*id) {
                let parent_pos = order.iter().position(|&o| o == parent).unwrap();
                prop_assert!(parent_pos < pos);
            }
        }
    }
}

#[test]
fn descendants_of_removed_subtree_root_are_promoted() {
    let mut scene = SceneGraph::new();
    let a = scene.add("A", NodeKind::Regular);
    let b = scene.add_child(a, "B", NodeKind::Regular).unwrap();
    let c = scene.add_child(b, "C", NodeKind::Regular).unwrap();

    scene.remove_object(b).unwrap();

    assert!(scene.is_top_level(c));
    assert!(scene.descendants(a).is_empty());
    assert_eq!(scene.roots().collect::<Vec<_>>(), vec![a, c]);
}
