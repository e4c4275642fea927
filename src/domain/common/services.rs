use crate::domain::{cluster::entities::ClusterScope, securitygroup::ports::SecurityGroupClient};

#[derive(Clone)]
pub struct Service<C>
where
    C: SecurityGroupClient,
{
    pub(crate) scope: ClusterScope,
    pub(crate) client: C,
}

impl<C> Service<C>
where
    C: SecurityGroupClient,
{
    pub fn new(scope: ClusterScope, client: C) -> Self {
        Service { scope, client }
    }
}
