use nodebaker_schema::NodeBootstrappingConfiguration;

/// Turns a node configuration into the boot payload (custom data) and the
/// provisioning command (CSE) run on the node.
pub trait TemplateGenerator: Send + Sync {
    fn node_bootstrapping_payload(&self, config: &NodeBootstrappingConfiguration) -> String;

    fn node_bootstrapping_cmd(&self, config: &NodeBootstrappingConfiguration) -> String;
}
