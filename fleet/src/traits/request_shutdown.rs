pub trait RequestShutdown {
    fn request_shutdown(&self);
}
