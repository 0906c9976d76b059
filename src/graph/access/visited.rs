//! Traversal-local scratch state.
//!
//! Every traversal allocates its own visited flags and BFS parent links, sized by
//! the vertex arena's slot count and indexed by slot. Nothing is stored on the
//! vertices, so traversals only need `&DiGraph` and never observe each other.

use crate::graph::vertex::VertexId;

/// Dense visited flags for one traversal.
pub(crate) struct VisitedFlags {
    flags: Vec<bool>,
}

impl VisitedFlags {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, id: VertexId) -> bool {
        self.flags.get(id.index()).copied().unwrap_or(false)
    }

    #[inline(always)]
    pub(crate) fn mark(&mut self, id: VertexId) {
        if let Some(flag) = self.flags.get_mut(id.index()) {
            *flag = true;
        }
    }

    /// Returns `true` iff this call observed the vertex as not-yet-visited and marked it.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, id: VertexId) -> bool {
        match self.flags.get_mut(id.index()) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }
}

/// Visited flags plus the BFS tree built while marking them.
pub(crate) struct BfsTree {
    visited: VisitedFlags,
    parent: Vec<Option<VertexId>>,
}

impl BfsTree {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            visited: VisitedFlags::new(len),
            parent: vec![None; len],
        }
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, id: VertexId) -> bool {
        self.visited.is_visited(id)
    }

    #[inline(always)]
    pub(crate) fn mark_root(&mut self, root: VertexId) {
        self.visited.mark(root);
    }

    /// Marks `child` as discovered from `parent`. Returns `false` if it was
    /// already discovered; its parent link is then left untouched.
    #[inline(always)]
    pub(crate) fn discover(&mut self, child: VertexId, parent: VertexId) -> bool {
        if !self.visited.try_visit(child) {
            return false;
        }
        if let Some(slot) = self.parent.get_mut(child.index()) {
            *slot = Some(parent);
        }
        true
    }

    #[inline(always)]
    pub(crate) fn parent(&self, id: VertexId) -> Option<VertexId> {
        self.parent.get(id.index()).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::SlotMap;

    #[test]
    fn try_visit_marks_once() {
        let mut ids = SlotMap::new();
        let a = ids.insert(());
        let mut flags = VisitedFlags::new(ids.slot_count());

        assert!(!flags.is_visited(a));
        assert!(flags.try_visit(a));
        assert!(!flags.try_visit(a));
        assert!(flags.is_visited(a));
    }

    #[test]
    fn discover_keeps_first_parent() {
        let mut ids = SlotMap::new();
        let root = ids.insert(());
        let x = ids.insert(());
        let y = ids.insert(());
        let mut tree = BfsTree::new(ids.slot_count());

        tree.mark_root(root);
        assert!(tree.is_visited(root));
        assert_eq!(tree.parent(root), None);

        assert!(tree.discover(y, root));
        assert!(!tree.discover(y, x));
        assert_eq!(tree.parent(y), Some(root));
        assert!(!tree.discover(root, y));
    }
}
