use crate::model::PathCache;
use commons::async_trait::async_trait;

#[async_trait]
pub trait WithPaths {
    async fn with_paths<F, O>(&self, function: F) -> O
    where
        F: FnOnce(&PathCache) -> O + Send;

    async fn mut_paths<F, O>(&self, function: F) -> O
    where
        F: FnOnce(&mut PathCache) -> O + Send;
}
