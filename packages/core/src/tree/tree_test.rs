//! Tests for the node hierarchy
//!
//! Covers parent/child consistency, cycle rejection, depth, search order,
//! typed lookups, route mutations and detach/re-attach.

#[cfg(test)]
mod tests {
    use crate::models::{Ascent, Location, NodeKey, NodeKind, NodeType, Route, ASCENT_NAME_PREFIX};
    use crate::tree::{Tree, TreeError};
    use chrono::NaiveDate;

    /// root -> Crag -> Sector -> Route "Crimpy"
    fn create_test_tree() -> (Tree, NodeKey, NodeKey, NodeKey) {
        let mut tree = Tree::new();
        let crag = tree
            .add_location("Crag", Some(tree.root()), Location::new())
            .unwrap();
        let sector = tree
            .add_location("Sector", Some(crag), Location::new())
            .unwrap();
        let route = tree
            .add_route("Crimpy", Some(sector), Route::new().with_grade("7a"))
            .unwrap();
        (tree, crag, sector, route)
    }

    // ========================================================================
    // Construction
    // ========================================================================

    #[test]
    fn test_new_tree_has_root_only() {
        let tree = Tree::new();
        let root = &tree[tree.root()];

        assert_eq!(root.name(), "root");
        assert_eq!(root.node_type(), NodeType::Node);
        assert!(root.is_root_container());
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_create_node_with_parent_links_both_directions() {
        let mut tree = Tree::new();
        let root = tree.root();
        let child = tree.create_node("child", NodeKind::Node, Some(root)).unwrap();

        assert_eq!(tree.parent(child), Some(root));
        assert_eq!(tree.children(root), &[child]);
    }

    #[test]
    fn test_create_node_without_parent_is_detached() {
        let mut tree = Tree::new();
        let orphan = tree.create_node("orphan", Location::new(), None).unwrap();

        assert!(tree.parent(orphan).is_none());
        assert_eq!(tree.node_count(), 1);
        assert!(tree.find("orphan").is_none());
    }

    #[test]
    fn test_add_route_requires_parent() {
        let mut tree = Tree::new();
        let result = tree.add_route("Nowhere", None, Route::new());

        assert_eq!(result, Err(TreeError::missing_parent("Nowhere")));
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_add_location_requires_parent() {
        let mut tree = Tree::new();
        let parent = tree.find("does not exist");
        let result = tree.add_location("Lost", parent, Location::new());

        assert!(matches!(result, Err(TreeError::MissingParent { .. })));
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut tree = Tree::new();
        let root = tree.root();
        let a = tree.add_location("A", Some(root), Location::new()).unwrap();
        let b = tree.add_location("B", Some(root), Location::new()).unwrap();
        let c = tree.add_location("C", Some(root), Location::new()).unwrap();

        assert_eq!(tree.children(root), &[a, b, c]);
    }

    // ========================================================================
    // set_parent
    // ========================================================================

    #[test]
    fn test_set_parent_to_self_fails() {
        let (mut tree, crag, _, _) = create_test_tree();
        let result = tree.set_parent(crag, Some(crag));

        assert!(matches!(result, Err(TreeError::SelfParent { .. })));
        assert_eq!(tree.parent(crag), Some(tree.root()));
    }

    #[test]
    fn test_set_parent_to_current_parent_fails() {
        let (mut tree, crag, sector, _) = create_test_tree();
        let result = tree.set_parent(sector, Some(crag));

        assert!(matches!(result, Err(TreeError::CircularReference { .. })));
        assert_eq!(tree.children(crag), &[sector]);
    }

    #[test]
    fn test_set_parent_to_descendant_fails() {
        let (mut tree, crag, _, route) = create_test_tree();
        let result = tree.set_parent(crag, Some(route));

        assert!(matches!(result, Err(TreeError::CircularReference { .. })));
        // Nothing moved
        assert_eq!(tree.parent(crag), Some(tree.root()));
        assert!(tree.children(route).is_empty());
        assert_eq!(tree.depth(route), 3);
    }

    #[test]
    fn test_set_parent_moves_between_parents() {
        let (mut tree, crag, sector, route) = create_test_tree();
        tree.set_parent(route, Some(crag)).unwrap();

        assert_eq!(tree.parent(route), Some(crag));
        assert!(tree.children(sector).is_empty());
        assert_eq!(tree.children(crag), &[sector, route]);
        assert_eq!(tree.depth(route), 2);
    }

    #[test]
    fn test_set_parent_none_detaches() {
        let (mut tree, _, sector, route) = create_test_tree();
        tree.set_parent(route, None).unwrap();

        assert!(tree.parent(route).is_none());
        assert!(tree.children(sector).is_empty());
        assert_eq!(tree.depth(route), 0);
    }

    // ========================================================================
    // Depth
    // ========================================================================

    #[test]
    fn test_depth_along_chain() {
        let (tree, crag, sector, route) = create_test_tree();

        assert_eq!(tree.depth(tree.root()), 0);
        assert_eq!(tree.depth(crag), 1);
        assert_eq!(tree.depth(sector), 2);
        assert_eq!(tree.depth(route), 3);
    }

    #[test]
    fn test_ancestors_walk_to_root() {
        let (tree, crag, sector, route) = create_test_tree();
        let chain: Vec<_> = tree.ancestors(route).collect();

        assert_eq!(chain, vec![sector, crag, tree.root()]);
        assert!(tree.is_ancestor(crag, route));
        assert!(!tree.is_ancestor(route, crag));
    }

    // ========================================================================
    // Search
    // ========================================================================

    #[test]
    fn test_find_is_preorder_first_match() {
        let mut tree = Tree::new();
        let root = tree.root();
        let left = tree.add_location("Left", Some(root), Location::new()).unwrap();
        let deep = tree
            .add_route("Twin", Some(left), Route::new().with_grade("6a"))
            .unwrap();
        tree.add_route("Twin", Some(root), Route::new().with_grade("5c"))
            .unwrap();

        // The nested route under the first child wins over the later sibling
        assert_eq!(tree.find("Twin"), Some(deep));
    }

    #[test]
    fn test_descendants_order() {
        let (tree, crag, sector, route) = create_test_tree();
        let order: Vec<_> = tree.descendants(tree.root()).collect();

        assert_eq!(order, vec![tree.root(), crag, sector, route]);
    }

    #[test]
    fn test_find_missing_returns_none() {
        let (tree, _, _, _) = create_test_tree();
        assert!(tree.find("Nope").is_none());
    }

    #[test]
    fn test_find_route_and_location() {
        let (tree, _, sector, route) = create_test_tree();

        assert_eq!(tree.find_route("Crimpy"), Ok(route));
        assert_eq!(tree.find_location("Sector"), Ok(sector));
    }

    #[test]
    fn test_typed_lookup_wrong_variant() {
        let (tree, _, _, _) = create_test_tree();

        assert_eq!(
            tree.find_location("Crimpy"),
            Err(TreeError::type_mismatch(
                "Crimpy",
                NodeType::Location,
                NodeType::Route
            ))
        );
        assert!(matches!(
            tree.find_route("Sector"),
            Err(TreeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_typed_lookup_not_found() {
        let (tree, _, _, _) = create_test_tree();
        assert_eq!(tree.find_route("Ghost"), Err(TreeError::not_found("Ghost")));
    }

    #[test]
    fn test_find_by_id() {
        let (tree, _, sector, _) = create_test_tree();
        let id = tree[sector].id().to_string();

        assert_eq!(tree.find_by_id(&id), Some(sector));
        assert!(tree.find_by_id("missing").is_none());
    }

    // ========================================================================
    // Route mutations
    // ========================================================================

    #[test]
    fn test_add_comment_and_beta() {
        let (mut tree, _, _, route) = create_test_tree();
        tree.add_comment(route, "Great line").unwrap();
        tree.add_beta(route, "Heel hook left").unwrap();

        let payload = tree[route].kind().as_route().unwrap();
        assert_eq!(payload.comments, vec!["Great line"]);
        assert_eq!(payload.betas, vec!["Heel hook left"]);
    }

    #[test]
    fn test_add_comment_on_location_fails() {
        let (mut tree, crag, _, _) = create_test_tree();
        let result = tree.add_comment(crag, "not a route");

        assert!(matches!(
            result,
            Err(TreeError::TypeMismatch {
                expected: NodeType::Route,
                found: NodeType::Location,
                ..
            })
        ));
    }

    #[test]
    fn test_add_ascent_under_route() {
        let (mut tree, _, _, route) = create_test_tree();
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let ascent = tree.add_ascent(route, Ascent::on(date)).unwrap();

        assert_eq!(tree.parent(ascent), Some(route));
        assert!(tree[ascent].name().starts_with(ASCENT_NAME_PREFIX));
        assert_eq!(tree[ascent].kind().as_ascent().unwrap().date, date);
        assert_eq!(tree.depth(ascent), 4);
    }

    #[test]
    fn test_add_ascent_requires_route() {
        let (mut tree, crag, _, _) = create_test_tree();
        let before = tree.node_count();
        let result = tree.add_ascent(crag, Ascent::new());

        assert!(matches!(result, Err(TreeError::TypeMismatch { .. })));
        assert_eq!(tree.node_count(), before);
    }

    // ========================================================================
    // Delete / re-attach / UI state
    // ========================================================================

    #[test]
    fn test_delete_subtree_clears_links() {
        let (mut tree, crag, sector, route) = create_test_tree();
        tree.delete_subtree(sector);

        assert!(tree.parent(sector).is_none());
        assert!(tree.children(sector).is_empty());
        assert!(tree.parent(route).is_none());
        assert!(tree.children(crag).is_empty());
        assert!(tree.find("Crimpy").is_none());
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn test_deleted_node_can_be_reattached() {
        let (mut tree, crag, sector, _) = create_test_tree();
        tree.delete_subtree(sector);

        let other = tree
            .add_location("Other", Some(tree.root()), Location::new())
            .unwrap();
        tree.set_parent(sector, Some(other)).unwrap();

        assert_eq!(tree.parent(sector), Some(other));
        assert_eq!(tree.children(other), &[sector]);
        assert!(tree.children(crag).is_empty());
        assert_eq!(tree.depth(sector), 2);
    }

    #[test]
    fn test_toggle_expanded() {
        let (mut tree, crag, _, _) = create_test_tree();
        assert!(tree[crag].is_expanded());

        assert!(!tree.toggle_expanded(crag));
        assert!(!tree[crag].is_expanded());
        assert!(tree.toggle_expanded(crag));
        // Pure UI state
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_rename() {
        let (mut tree, crag, _, _) = create_test_tree();
        tree.rename(crag, "Renamed");

        assert_eq!(tree.find("Renamed"), Some(crag));
        assert!(tree.find("Crag").is_none());
    }

    #[test]
    fn test_outline_indents_three_spaces_per_level() {
        let (tree, _, _, _) = create_test_tree();
        assert_eq!(tree.outline(), "root\n   Crag\n      Sector\n         Crimpy\n");
    }

    #[test]
    fn test_count_by_type() {
        let (mut tree, _, _, route) = create_test_tree();
        tree.add_ascent(route, Ascent::new()).unwrap();
        let counts = tree.count_by_type();

        assert_eq!(counts.get(&NodeType::Node), Some(&1));
        assert_eq!(counts.get(&NodeType::Location), Some(&2));
        assert_eq!(counts.get(&NodeType::Route), Some(&1));
        assert_eq!(counts.get(&NodeType::Ascent), Some(&1));
    }
}
