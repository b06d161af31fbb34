use super::Component;

/// DependencyEdge: one component and the purls it depends on
///
/// `depends_on` is never empty for edges produced by the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    bom_ref: String,
    depends_on: Vec<String>,
}

impl DependencyEdge {
    pub fn new(bom_ref: String, depends_on: Vec<String>) -> Self {
        Self {
            bom_ref,
            depends_on,
        }
    }

    pub fn bom_ref(&self) -> &str {
        &self.bom_ref
    }

    pub fn depends_on(&self) -> &[String] {
        &self.depends_on
    }
}

/// BazelDependencyGraph aggregate: everything extracted from one query dump
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BazelDependencyGraph {
    components: Vec<Component>,
    dependencies: Vec<DependencyEdge>,
}

impl BazelDependencyGraph {
    pub fn new(components: Vec<Component>, dependencies: Vec<DependencyEdge>) -> Self {
        Self {
            components,
            dependencies,
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn dependencies(&self) -> &[DependencyEdge] {
        &self.dependencies
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }
}
