/// a hierarchy of access categories with parent links and a current selection,
/// such as a tree widget presented by a host UI.
pub trait AccessSelection {
    type Node: Copy;

    /// currently selected nodes.
    fn selected(&self) -> Vec<Self::Node>;
    /// parent of a node, `None` for a root.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;
    fn label(&self, node: Self::Node) -> &str;

    /// labels from `node` up to its root, innermost first.
    fn path_to_root(&self, node: Self::Node) -> Vec<String> {
        let mut path = vec![];
        let mut current = Some(node);
        while let Some(n) = current {
            path.push(String::from(self.label(n)));
            current = self.parent(n);
        }
        path
    }
}
