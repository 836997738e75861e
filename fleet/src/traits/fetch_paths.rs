use crate::traits::SendPathFetcher;
use futures::FutureExt;

pub trait FetchPaths {
    fn fetch_paths(&self, vehicle_ids: Vec<String>);
}

impl<T> FetchPaths for T
where
    T: SendPathFetcher,
{
    fn fetch_paths(&self, vehicle_ids: Vec<String>) {
        self.send_path_fetcher_future_background(move |path_fetcher| {
            path_fetcher.fetch_paths(vehicle_ids).boxed()
        });
    }
}
