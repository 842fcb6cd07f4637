use crate::ir::{AttrKind, Attrs};

/// Defaults in effect for nodes, edges and graphs created at one nesting
/// depth.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultFrame {
    pub node: Attrs,
    pub edge: Attrs,
    pub graph: Attrs,
}

impl DefaultFrame {
    pub fn attrs_mut(&mut self, kind: AttrKind) -> &mut Attrs {
        match kind {
            AttrKind::Node => &mut self.node,
            AttrKind::Edge => &mut self.edge,
            AttrKind::Graph => &mut self.graph,
        }
    }
}

/// Stack of default frames. Entering a subgraph pushes a copy of the current
/// frame; leaving it pops the copy. The root frame is never popped.
#[derive(Debug, Clone, Default)]
pub struct DefaultContext {
    root: DefaultFrame,
    scopes: Vec<DefaultFrame>,
}

impl DefaultContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &DefaultFrame {
        self.scopes.last().unwrap_or(&self.root)
    }

    fn current_mut(&mut self) -> &mut DefaultFrame {
        self.scopes.last_mut().unwrap_or(&mut self.root)
    }

    /// Number of frames, including the root.
    pub fn depth(&self) -> usize {
        self.scopes.len() + 1
    }

    pub fn push(&mut self) {
        let frame = self.current().clone();
        self.scopes.push(frame);
    }

    /// Drops the innermost scope frame. Returns `None` at the root.
    pub fn pop(&mut self) -> Option<DefaultFrame> {
        self.scopes.pop()
    }

    /// Overlays `attrs` onto the current frame's mapping for `kind`.
    pub fn merge(&mut self, kind: AttrKind, attrs: &Attrs) {
        let target = self.current_mut().attrs_mut(kind);
        for (key, value) in attrs {
            target.insert(key.clone(), value.clone());
        }
    }
}
