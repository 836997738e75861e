pub extern crate async_channel;
pub extern crate async_trait;
pub extern crate futures;
pub extern crate log;
pub extern crate tokio;
pub extern crate tokio_util;

pub mod almost;
pub mod fn_sender;
pub mod poller;
pub mod process;

use std::sync::{Arc, Mutex};

pub type Arm<T> = Arc<Mutex<T>>;

pub fn same_elements<T>(a: &[T], b: &[T]) -> bool
where
    T: PartialEq,
{
    if a.len() != b.len() {
        return false;
    }
    for element in a {
        if !b.contains(&element) {
            return false;
        }
    }
    true
}
