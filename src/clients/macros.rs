macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $collection_snake:ident) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<list_ $collection_snake>](&self) -> Result<Vec<$entity>, crate::gateway::GatewayError> {
                    tracing::debug!("Sending request");
                    self.inner.list().await.map_err(crate::gateway::GatewayError::from)
                }
            }
        }
    };
}

macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $collection_snake:ident) => {
        impl_client_new!($client_name, $entity);
        impl_client_methods!($client_name, $entity, $collection_snake);
    };
}
