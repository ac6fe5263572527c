use async_trait::async_trait;

#[async_trait]
/// Represents a source of configuration values that are resolved on demand
pub trait ConfigurationSource<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    type Error;

    /// Retrieves the configuration, resolving it first if needed
    async fn get(&self) -> Result<T, Self::Error>;
}
