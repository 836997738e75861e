use async_channel::{unbounded, Receiver, Sender};
use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

pub type MessageFn<I> = dyn for<'a> FnOnce(&'a mut I) -> BoxFuture<'a, ()> + Send;

pub struct FnMessage<I> {
    function: Option<Box<MessageFn<I>>>,
    sender_name: &'static str,
}

impl<I> FnMessage<I> {
    pub fn sender_name(&self) -> &'static str {
        self.sender_name
    }
}

#[async_trait]
pub trait FnMessageExt<I>
where
    I: Send,
{
    async fn apply(&mut self, input: &mut I);
}

#[async_trait]
impl<I> FnMessageExt<I> for FnMessage<I>
where
    I: Send,
{
    async fn apply(&mut self, input: &mut I) {
        if let Some(function) = self.function.take() {
            function(input).await;
        }
    }
}

#[async_trait]
impl<I> FnMessageExt<I> for Vec<FnMessage<I>>
where
    I: Send,
{
    async fn apply(&mut self, input: &mut I) {
        for message in self {
            message.apply(input).await;
        }
    }
}

/// Resolves to the output of a message once the receiving actor has applied it.
///
/// The message is queued as soon as it is sent, so the future may be dropped
/// without awaiting it when the caller does not need the output.
pub struct FnSenderFuture<O> {
    reply_rx: oneshot::Receiver<O>,
    sender_name: &'static str,
}

impl<O> Future for FnSenderFuture<O> {
    type Output = O;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<O> {
        let sender_name = self.sender_name;
        match Pin::new(&mut self.reply_rx).poll(cx) {
            Poll::Ready(Ok(output)) => Poll::Ready(output),
            Poll::Ready(Err(_)) => panic!(
                "Message from function sender {} was dropped before it was applied",
                sender_name
            ),
            Poll::Pending => Poll::Pending,
        }
    }
}

pub struct FnSender<I>
where
    I: Send,
{
    tx: Sender<FnMessage<I>>,
    name: &'static str,
}

impl<I> FnSender<I>
where
    I: Send,
{
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn clone_with_name(&self, name: &'static str) -> FnSender<I> {
        FnSender {
            tx: self.tx.clone(),
            name,
        }
    }

    pub fn send_future<O, F>(&self, function: F) -> FnSenderFuture<O>
    where
        O: Send + 'static,
        F: for<'a> FnOnce(&'a mut I) -> BoxFuture<'a, O> + Send + 'static,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        let function: Box<MessageFn<I>> = Box::new(move |input: &mut I| {
            async move {
                let out = function(input).await;
                // The caller may have stopped waiting for the output
                let _ = reply_tx.send(out);
            }
            .boxed()
        });

        let message = FnMessage {
            function: Some(function),
            sender_name: self.name,
        };

        self.tx.try_send(message).unwrap_or_else(|err| {
            panic!(
                "Function sender {} could not send message: {}",
                self.name, err
            )
        });

        FnSenderFuture {
            reply_rx,
            sender_name: self.name,
        }
    }

    pub fn send<O, F>(&self, function: F) -> FnSenderFuture<O>
    where
        O: Send + 'static,
        F: FnOnce(&mut I) -> O + Send + 'static,
    {
        self.send_future(|input| async move { function(input) }.boxed())
    }
}

impl<I> Clone for FnSender<I>
where
    I: Send,
{
    fn clone(&self) -> FnSender<I> {
        FnSender {
            tx: self.tx.clone(),
            name: self.name,
        }
    }
}

pub struct FnReceiver<I> {
    rx: Receiver<FnMessage<I>>,
}

impl<I> FnReceiver<I> {
    /// Waits for the next message. Returns `None` once every sender is gone.
    pub async fn get_message(&mut self) -> Option<FnMessage<I>> {
        self.rx.recv().await.ok()
    }

    pub fn get_messages(&mut self) -> Vec<FnMessage<I>> {
        let mut out = vec![];
        while let Ok(message) = self.rx.try_recv() {
            out.push(message);
        }
        out
    }
}

pub fn fn_channel<I>() -> (FnSender<I>, FnReceiver<I>)
where
    I: Send,
{
    let (tx, rx) = unbounded();
    (FnSender { tx, name: "root" }, FnReceiver { rx })
}

#[cfg(test)]
mod tests {

    use super::*;
    use futures::executor::block_on;
    use std::thread;

    struct Odometer {
        km: f64,
        run: bool,
    }

    impl Odometer {
        async fn add(&mut self, km: f64) {
            self.km += km;
        }

        async fn km(&self) -> f64 {
            self.km
        }
    }

    fn spawn_odometer(mut rx: FnReceiver<Odometer>) -> thread::JoinHandle<f64> {
        thread::spawn(move || {
            let mut odometer = Odometer {
                km: 100.0,
                run: true,
            };
            while odometer.run {
                block_on(async {
                    if let Some(mut message) = rx.get_message().await {
                        message.apply(&mut odometer).await;
                    }
                });
            }
            odometer.km
        })
    }

    #[test]
    fn send_future() {
        let (tx, rx) = fn_channel();
        let handle = spawn_odometer(rx);

        block_on(tx.send_future(|odometer| odometer.add(1.5).boxed()));
        assert_eq!(block_on(tx.send_future(|odometer| odometer.km().boxed())), 101.5);

        block_on(tx.send(|odometer| odometer.run = false));
        assert_eq!(handle.join().unwrap(), 101.5);
    }

    #[test]
    fn send() {
        let (tx, rx) = fn_channel();
        let handle = spawn_odometer(rx);

        block_on(tx.send(|odometer| odometer.km += 2.0));
        assert_eq!(block_on(tx.send(|odometer| odometer.km)), 102.0);

        block_on(tx.send(|odometer| odometer.run = false));
        assert_eq!(handle.join().unwrap(), 102.0);
    }

    #[test]
    fn message_is_queued_without_awaiting() {
        // Given
        let (tx, mut rx) = fn_channel::<Odometer>();
        let mut odometer = Odometer {
            km: 0.0,
            run: true,
        };

        // When
        let _ = tx.clone_with_name("fire_and_forget").send(|odometer| odometer.km = 7.0);

        // Then
        let mut messages = rx.get_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender_name(), "fire_and_forget");
        block_on(messages.apply(&mut odometer));
        assert_eq!(odometer.km, 7.0);
    }

    #[test]
    fn get_message_returns_none_when_senders_dropped() {
        let (tx, mut rx) = fn_channel::<Odometer>();
        drop(tx);
        assert!(block_on(rx.get_message()).is_none());
    }
}
