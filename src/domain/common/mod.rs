pub mod services;

#[cfg(test)]
pub mod testing {
    use crate::domain::{
        cluster::entities::{ClusterScope, NetworkSpec, VnetSpec},
        common::services::Service,
        securitygroup::ports::MockSecurityGroupClient,
    };

    /// Scope used by most tests: self-managed network in `my-rg`.
    pub fn test_scope() -> ClusterScope {
        ClusterScope::new("my-rg", "test-location", NetworkSpec::default())
    }

    /// Builder to easily create test services
    pub struct TestServiceBuilder {
        scope: ClusterScope,
        client: Option<MockSecurityGroupClient>,
    }

    impl TestServiceBuilder {
        pub fn new() -> Self {
            Self {
                scope: test_scope(),
                client: None,
            }
        }

        /// Puts the scope's cluster into custom vnet mode.
        pub fn with_vnet(mut self, vnet: VnetSpec) -> Self {
            self.scope.network.vnet = vnet;
            self
        }

        /// Configure a custom mock client
        pub fn with_client(mut self, client: MockSecurityGroupClient) -> Self {
            self.client = Some(client);
            self
        }

        /// Configures a mock client with a closure
        pub fn customize_client<F>(mut self, configurator: F) -> Self
        where
            F: FnOnce(&mut MockSecurityGroupClient),
        {
            let mut mock = MockSecurityGroupClient::new();
            configurator(&mut mock);
            self.client = Some(mock);
            self
        }

        pub fn build(self) -> Service<MockSecurityGroupClient> {
            let client = self.client.unwrap_or_default();

            Service::new(self.scope, client)
        }
    }

    impl Default for TestServiceBuilder {
        fn default() -> Self {
            Self::new()
        }
    }
}
