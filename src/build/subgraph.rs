use super::Compiler;
use crate::ir::SubgraphStmt;
use tracing::debug;

impl Compiler<'_> {
    /// Expands a subgraph in its own default scope. A subgraph that ends up
    /// without members is removed again.
    pub(super) fn subgraph_stmt(&mut self, stmt: &SubgraphStmt, scope: Option<&str>) {
        let id = match &stmt.id {
            Some(id) => id.clone(),
            None => self.generate_subgraph_id(),
        };

        self.defaults.push();
        self.ensure_node(&id, scope);

        for nested in &stmt.stmts {
            self.dispatch(nested, Some(id.as_str()));
        }

        if self.graph.children(&id).is_empty() {
            debug!(subgraph = %id, depth = self.defaults.depth(), "removing empty subgraph");
            self.remove_node(&id);
        }

        self.defaults.pop();
    }

    /// Removes `id` together with every incident edge, named ones included.
    fn remove_node(&mut self, id: &String) {
        // `Graph::remove_node` only drops the unnamed edge between each pair.
        for edge in self.graph.node_edges(id, None).unwrap_or_default() {
            self.graph.remove_edge(&edge.v, &edge.w, edge.name);
        }
        self.graph.remove_node(id);
    }

    fn generate_subgraph_id(&mut self) -> String {
        loop {
            let id = self.ids.next(&self.config.subgraph_id_prefix);
            if !self.graph.has_node(&id) {
                return id;
            }
        }
    }
}
