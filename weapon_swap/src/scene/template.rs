/// Substitute model template (the prefab spawned at each anchor).

/// Renderer description carried by a template node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemplateRenderer {
    pub mesh_name: Option<String>,
    pub materials: Vec<String>,
}

/// Tree of named nodes instantiated by `SceneGraph::instantiate`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelTemplate {
    pub name: String,
    pub renderer: Option<TemplateRenderer>,
    pub children: Vec<ModelTemplate>,
}

impl ModelTemplate {
    /// Single empty node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            renderer: None,
            children: Vec::new(),
        }
    }

    /// Attach a renderer with the given mesh and materials
    pub fn with_renderer(mut self, mesh_name: impl Into<String>, materials: &[&str]) -> Self {
        self.renderer = Some(TemplateRenderer {
            mesh_name: Some(mesh_name.into()),
            materials: materials.iter().map(|m| m.to_string()).collect(),
        });
        self
    }

    /// Append a child template
    pub fn with_child(mut self, child: ModelTemplate) -> Self {
        self.children.push(child);
        self
    }

    /// Number of nodes one instantiation creates
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ModelTemplate::node_count).sum::<usize>()
    }
}
