use crate::actors::PathFetcher;
use crate::traits::{GetVehiclePath, RedrawMap, RunInBackground, WithPaths};
use futures::future::BoxFuture;

pub trait SendPathFetcher:
    GetVehiclePath + RedrawMap + RunInBackground + WithPaths + Clone + Sized + Send + Sync + 'static
{
    fn send_path_fetcher_future_background<F, O>(&self, function: F)
    where
        O: Send + 'static,
        F: for<'a> FnOnce(&'a mut PathFetcher<Self>) -> BoxFuture<'a, O> + Send + 'static;
}
