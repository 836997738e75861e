use crate::fn_sender::{FnMessageExt, FnReceiver};
use async_trait::async_trait;
use log::debug;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use std::any::type_name;

/// Owns an actor and the receiving end of its function channel, and moves both
/// onto a tokio task while running.
///
/// A passive process only reacts to messages. An active process also calls
/// [`Step::step`] in a loop between messages. Pausing an active process cancels
/// the step in flight; pausing a passive process lets the current message finish.
pub struct Process<T> {
    state: Option<ProcessState<T>>,
}

enum ProcessState<T> {
    Paused {
        object: T,
        object_rx: FnReceiver<T>,
    },
    Running {
        token: CancellationToken,
        handle: JoinHandle<(T, FnReceiver<T>)>,
    },
}

impl<T> Process<T>
where
    T: Send + 'static,
{
    pub fn new(object: T, object_rx: FnReceiver<T>) -> Process<T> {
        Process {
            state: Some(ProcessState::Paused { object, object_rx }),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, Some(ProcessState::Running { .. }))
    }

    async fn object_and_rx(&mut self) -> (T, FnReceiver<T>) {
        match self.state.take().expect("Process has no state!") {
            ProcessState::Paused { object, object_rx } => (object, object_rx),
            ProcessState::Running { token, handle } => {
                token.cancel();
                match handle.await {
                    Ok(out) => out,
                    Err(err) => panic!("{} process failed: {}", type_name::<T>(), err),
                }
            }
        }
    }

    pub async fn run_passive(&mut self) {
        debug!("Running {} (passive)", type_name::<T>());
        let (mut object, mut object_rx) = self.object_and_rx().await;
        process_messages(&mut object, &mut object_rx).await;
        let token = CancellationToken::new();
        let handle = run_passive(object, object_rx, token.clone());
        self.state = Some(ProcessState::Running { token, handle });
    }

    pub async fn pause(&mut self) {
        debug!("Pausing {}", type_name::<T>());
        let (object, object_rx) = self.object_and_rx().await;
        self.state = Some(ProcessState::Paused { object, object_rx });
    }

    pub fn object_ref(&self) -> Result<&T, &'static str> {
        match self.state.as_ref() {
            Some(ProcessState::Paused { object, .. }) => Ok(object),
            _ => Err("Can only access object in paused process!"),
        }
    }

    pub fn object_mut(&mut self) -> Result<&mut T, &'static str> {
        match self.state.as_mut() {
            Some(ProcessState::Paused { object, .. }) => Ok(object),
            _ => Err("Can only access object in paused process!"),
        }
    }
}

async fn process_messages<T>(object: &mut T, object_rx: &mut FnReceiver<T>)
where
    T: Send,
{
    let mut messages = object_rx.get_messages();
    if !messages.is_empty() {
        debug!(
            "Processed {} queued messages for {}",
            messages.len(),
            type_name::<T>()
        );
        messages.apply(object).await;
    }
}

pub fn run_passive<T>(
    mut object: T,
    mut object_rx: FnReceiver<T>,
    token: CancellationToken,
) -> JoinHandle<(T, FnReceiver<T>)>
where
    T: Send + 'static,
{
    tokio::spawn(async move {
        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => break,
                message = object_rx.get_message() => match message {
                    Some(mut message) => message.apply(&mut object).await,
                    None => break,
                },
            }
        }
        (object, object_rx)
    })
}

#[async_trait]
pub trait Step {
    async fn step(&mut self);
}

impl<T> Process<T>
where
    T: Step + Send + 'static,
{
    pub async fn run_active(&mut self) {
        debug!("Running {} (active)", type_name::<T>());
        let (mut object, mut object_rx) = self.object_and_rx().await;
        process_messages(&mut object, &mut object_rx).await;
        let token = CancellationToken::new();
        let handle = run_active(object, object_rx, token.clone());
        self.state = Some(ProcessState::Running { token, handle });
    }
}

pub fn run_active<T>(
    mut object: T,
    mut object_rx: FnReceiver<T>,
    token: CancellationToken,
) -> JoinHandle<(T, FnReceiver<T>)>
where
    T: Step + Send + 'static,
{
    tokio::spawn(async move {
        loop {
            object_rx.get_messages().apply(&mut object).await;
            tokio::select! {
                biased;
                _ = token.cancelled() => break,
                _ = object.step() => (),
            }
        }
        (object, object_rx)
    })
}
