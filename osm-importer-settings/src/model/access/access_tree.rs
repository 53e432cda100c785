use super::AccessSelection;
use std::collections::BTreeSet;

/// OSM access categories as (label, parent label) pairs, parents listed before children.
/// see <https://wiki.openstreetmap.org/wiki/Key:access#Transport_mode_restrictions>.
const OSM_ACCESS_CATEGORIES: [(&str, Option<&str>); 22] = [
    ("foot", None),
    ("horse", None),
    ("vehicle", None),
    ("bicycle", Some("vehicle")),
    ("carriage", Some("vehicle")),
    ("motor_vehicle", Some("vehicle")),
    ("motorcycle", Some("motor_vehicle")),
    ("moped", Some("motor_vehicle")),
    ("mofa", Some("motor_vehicle")),
    ("motorcar", Some("motor_vehicle")),
    ("motorhome", Some("motor_vehicle")),
    ("tourist_bus", Some("motor_vehicle")),
    ("goods", Some("motor_vehicle")),
    ("hgv", Some("motor_vehicle")),
    ("agricultural", Some("motor_vehicle")),
    ("psv", Some("motor_vehicle")),
    ("bus", Some("psv")),
    ("taxi", Some("psv")),
    ("minibus", Some("psv")),
    ("share_taxi", Some("psv")),
    ("hov", Some("motor_vehicle")),
    ("emergency", Some("motor_vehicle")),
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct AccessNode {
    label: String,
    parent: Option<usize>,
}

/// arena-backed access category tree. nodes are addressed by their insertion index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessTree {
    nodes: Vec<AccessNode>,
    selected: BTreeSet<usize>,
}

impl Default for AccessTree {
    /// the OSM transport mode hierarchy, nothing selected.
    fn default() -> Self {
        let mut tree = AccessTree::empty();
        for (label, parent_label) in OSM_ACCESS_CATEGORIES {
            let parent = parent_label.and_then(|p| tree.find(p));
            tree.add_node(label, parent);
        }
        tree
    }
}

impl AccessTree {
    pub fn empty() -> Self {
        Self {
            nodes: vec![],
            selected: BTreeSet::new(),
        }
    }

    /// adds a node below `parent` (or as a root) and returns its index. a parent index
    /// that does not exist yet makes the node a root.
    pub fn add_node(&mut self, label: &str, parent: Option<usize>) -> usize {
        let parent = parent.filter(|p| *p < self.nodes.len());
        self.nodes.push(AccessNode {
            label: String::from(label),
            parent,
        });
        self.nodes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// first node whose label matches, ignoring ASCII case, searching the whole tree.
    pub fn find(&self, label: &str) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| n.label.eq_ignore_ascii_case(label))
    }

    /// adds a node to the selection. returns false if no such node exists.
    pub fn select(&mut self, node: usize) -> bool {
        if node >= self.nodes.len() {
            return false;
        }
        self.selected.insert(node);
        true
    }

    /// selects the first node matching `label`, see [`AccessTree::find`].
    pub fn select_label(&mut self, label: &str) -> Option<usize> {
        let node = self.find(label)?;
        self.select(node);
        Some(node)
    }

    pub fn deselect(&mut self, node: usize) {
        self.selected.remove(&node);
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// the label of the selected node when exactly one is selected.
    pub fn selected_label(&self) -> Option<&str> {
        match self.selected.iter().collect::<Vec<_>>().as_slice() {
            [node] => Some(self.label(**node)),
            _ => None,
        }
    }
}

impl AccessSelection for AccessTree {
    type Node = usize;

    fn selected(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    fn parent(&self, node: usize) -> Option<usize> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    fn label(&self, node: usize) -> &str {
        self.nodes
            .get(node)
            .map(|n| n.label.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::AccessTree;
    use crate::model::access::AccessSelection;

    #[test]
    fn test_default_tree_motorcar_path() {
        let tree = AccessTree::default();
        let motorcar = tree.find("motorcar").expect("motorcar in tree");
        assert_eq!(
            tree.path_to_root(motorcar),
            vec!["motorcar", "motor_vehicle", "vehicle"]
        );
    }

    #[test]
    fn test_default_tree_roots() {
        let tree = AccessTree::default();
        for root in ["foot", "horse", "vehicle"] {
            let node = tree.find(root).expect("root in tree");
            assert_eq!(tree.parent(node), None);
        }
        let bus = tree.find("bus").expect("bus in tree");
        assert_eq!(
            tree.path_to_root(bus),
            vec!["bus", "psv", "motor_vehicle", "vehicle"]
        );
    }

    #[test]
    fn test_find_ignores_case() {
        let tree = AccessTree::default();
        assert_eq!(tree.find("MotorCar"), tree.find("motorcar"));
        assert!(tree.find("spaceship").is_none());
    }

    #[test]
    fn test_selection() {
        let mut tree = AccessTree::default();
        assert!(tree.selected().is_empty());
        assert_eq!(tree.selected_label(), None);

        let hgv = tree.select_label("hgv").expect("hgv in tree");
        assert_eq!(tree.selected(), vec![hgv]);
        assert_eq!(tree.selected_label(), Some("hgv"));

        tree.select_label("bicycle");
        assert_eq!(tree.selected().len(), 2);
        assert_eq!(tree.selected_label(), None);

        tree.deselect(hgv);
        assert_eq!(tree.selected_label(), Some("bicycle"));
        tree.clear_selection();
        assert!(tree.selected().is_empty());
        assert!(!tree.select(tree.len()));
    }
}
