//! Category forest utilities
//!
//! Categories are stored as a flat adjacency list (`parent_id` links).
//! These functions build the display tree, compute descendant sets for
//! subtree filtering and cascading deletes, and filter products by subtree.

use shared::models::{Category, Product};
use std::collections::{HashMap, HashSet, VecDeque};

/// A category with its children attached, for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNode {
    pub category: Category,
    pub children: Vec<CategoryNode>,
}

/// Build the display forest from the flat category list
///
/// Roots are the categories with no parent; children keep their input
/// order. Categories whose parent id points at a missing category are
/// unreachable from any root and simply do not appear.
pub fn build_forest(categories: &[Category]) -> Vec<CategoryNode> {
    let mut children_of: HashMap<&str, Vec<&Category>> = HashMap::new();
    for cat in categories {
        if let Some(parent) = cat.parent_id.as_deref() {
            children_of.entry(parent).or_default().push(cat);
        }
    }

    fn attach(cat: &Category, children_of: &HashMap<&str, Vec<&Category>>) -> CategoryNode {
        let children = children_of
            .get(cat.id.as_str())
            .map(|kids| kids.iter().map(|c| attach(c, children_of)).collect())
            .unwrap_or_default();
        CategoryNode {
            category: cat.clone(),
            children,
        }
    }

    categories
        .iter()
        .filter(|c| c.parent_id.is_none())
        .map(|c| attach(c, &children_of))
        .collect()
}

/// Compute the id set of a category and every category below it
///
/// Breadth-first expansion from the seed id. The result set doubles as the
/// visited guard, so the walk terminates even if corrupt data introduced a
/// parent/child cycle. Backs both the storefront's subtree filter and the
/// admin's cascading delete.
pub fn descendant_ids(seed: &str, categories: &[Category]) -> HashSet<String> {
    let mut children_of: HashMap<&str, Vec<&str>> = HashMap::new();
    for cat in categories {
        if let Some(parent) = cat.parent_id.as_deref() {
            children_of.entry(parent).or_default().push(cat.id.as_str());
        }
    }

    let mut ids: HashSet<String> = HashSet::new();
    ids.insert(seed.to_string());
    let mut queue: VecDeque<&str> = VecDeque::new();
    queue.push_back(seed);

    while let Some(current) = queue.pop_front() {
        if let Some(kids) = children_of.get(current) {
            for &child in kids {
                if ids.insert(child.to_string()) {
                    queue.push_back(child);
                }
            }
        }
    }
    ids
}

/// Products assigned to `category_id` or any category below it
pub fn products_in_subtree<'a>(
    category_id: &str,
    products: &'a [Product],
    categories: &[Category],
) -> Vec<&'a Product> {
    let ids = descendant_ids(category_id, categories);
    products
        .iter()
        .filter(|p| p.category_id.as_deref().is_some_and(|c| ids.contains(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn cat(id: &str, name: &str, parent: Option<&str>) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            parent_id: parent.map(str::to_string),
        }
    }

    fn sample() -> Vec<Category> {
        vec![
            cat("a", "root A", None),
            cat("b", "child B", Some("a")),
            cat("c", "grandchild C", Some("b")),
            cat("x", "root X", None),
            cat("y", "child Y", Some("x")),
        ]
    }

    #[test]
    fn test_build_forest_shape() {
        let forest = build_forest(&sample());
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].category.id, "a");
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].category.id, "b");
        assert_eq!(forest[0].children[0].children[0].category.id, "c");
        assert_eq!(forest[1].category.id, "x");
        assert_eq!(forest[1].children.len(), 1);
    }

    #[test]
    fn test_descendant_ids_includes_seed_and_subtree() {
        let cats = sample();
        let ids = descendant_ids("a", &cats);
        assert_eq!(
            ids,
            ["a", "b", "c"].iter().map(|s| s.to_string()).collect()
        );
        // leaf: just itself
        let ids = descendant_ids("c", &cats);
        assert_eq!(ids, ["c"].iter().map(|s| s.to_string()).collect());
    }

    #[test]
    fn test_descendant_ids_excludes_other_roots() {
        let ids = descendant_ids("a", &sample());
        assert!(!ids.contains("x"));
        assert!(!ids.contains("y"));
    }

    #[test]
    fn test_descendant_ids_terminates_on_cycle() {
        // corrupt data: b -> c -> b
        let cats = vec![
            cat("b", "B", Some("c")),
            cat("c", "C", Some("b")),
        ];
        let ids = descendant_ids("b", &cats);
        assert_eq!(ids, ["b", "c"].iter().map(|s| s.to_string()).collect());
    }

    #[test]
    fn test_products_in_subtree() {
        let cats = sample();
        let product = |id: &str, cat: Option<&str>| Product {
            id: id.to_string(),
            name: id.to_string(),
            price: dec!(100),
            image_url: String::new(),
            description: String::new(),
            category_id: cat.map(str::to_string),
        };
        let products = vec![
            product("p1", Some("c")),
            product("p2", Some("a")),
            product("p3", Some("y")),
            product("p4", None),
        ];
        let hits = products_in_subtree("a", &products, &cats);
        let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }
}
