use crate::traits::SendMapArtist;
use futures::FutureExt;

pub trait RedrawMap {
    fn redraw_map(&self);
}

impl<T> RedrawMap for T
where
    T: SendMapArtist,
{
    fn redraw_map(&self) {
        self.send_map_artist_future_background(|map_artist| map_artist.redraw().boxed());
    }
}
