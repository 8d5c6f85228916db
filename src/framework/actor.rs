//! # Generic Actor Server
//!
//! `StateActor` is the "Server" side of the Actor Model. It owns one state value and
//! the receiving end of the request channel, and processes requests strictly one at
//! a time.

use crate::framework::client::StateClient;
use crate::framework::error::FrameworkError;
use crate::framework::message::StateRequest;
use crate::framework::state::ActorState;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic single-writer actor.
///
/// # Concurrency Model
/// Every read-modify-write on the state happens inside `run()`, one request at a
/// time. Clients can be cloned into any number of tasks; their requests queue on the
/// channel and are never interleaved, so no `Mutex` or `RwLock` is needed for the
/// state and no update is lost.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StateActor::new()` returns the actor (server) and a client.
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop on a Tokio task.
///
/// ```rust
/// use async_trait::async_trait;
/// use cart_store::framework::{ActorState, StateActor};
///
/// #[derive(Clone, Debug, Default)]
/// struct Counter(u64);
///
/// #[derive(Debug)]
/// enum CounterAction { Add(u64) }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("counter error")]
/// struct CounterError;
///
/// #[async_trait]
/// impl ActorState for Counter {
///     type Action = CounterAction;
///     type ActionResult = u64;
///     type Context = ();
///     type Error = CounterError;
///
///     async fn handle_action(&mut self, action: CounterAction, _: &()) -> Result<u64, CounterError> {
///         match action { CounterAction::Add(n) => self.0 += n }
///         Ok(self.0)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StateActor::new(10, Counter::default());
///     tokio::spawn(actor.run(()));
///     assert_eq!(client.perform_action(CounterAction::Add(2)).await.unwrap(), 2);
/// }
/// ```
pub struct StateActor<S: ActorState> {
    receiver: mpsc::Receiver<StateRequest<S>>,
    state: S,
}

impl<S: ActorState> StateActor<S> {
    /// Creates a new `StateActor` and its associated `StateClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the MPSC channel. When it is full, client calls
    ///   wait until there is space. Zero is raised to one.
    /// * `initial` - The state before `on_start` runs.
    pub fn new(buffer_size: usize, initial: S) -> (Self, StateClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            state: initial,
        };
        let client = StateClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// `on_start` completes before the first request is read, and `on_stop` runs
    /// after the channel drains. The final state is returned so the owner can
    /// inspect it after shutdown.
    pub async fn run(mut self, context: S::Context) -> S {
        // Just the type name, e.g. "Cart" instead of "cart_store::model::cart::Cart"
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Actor started");

        self.state.on_start(&context).await;

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StateRequest::Get { respond_to } => {
                    debug!(state_type, "Get");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                StateRequest::Action { action, respond_to } => {
                    debug!(state_type, ?action, "Action");
                    let result = self
                        .state
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::StateError(Box::new(e)));
                    if let Err(e) = &result {
                        warn!(state_type, error = %e, "Action failed");
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        self.state.on_stop(&context).await;
        info!(state_type, "Shutdown");
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Tally {
        values: Vec<i32>,
        started: bool,
    }

    #[derive(Debug)]
    enum TallyAction {
        Push(i32),
        Pop,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("nothing to pop")]
    struct EmptyTally;

    #[async_trait]
    impl ActorState for Tally {
        type Action = TallyAction;
        type ActionResult = usize;
        type Context = ();
        type Error = EmptyTally;

        async fn on_start(&mut self, _ctx: &()) {
            self.started = true;
        }

        async fn handle_action(&mut self, action: TallyAction, _ctx: &()) -> Result<usize, EmptyTally> {
            match action {
                TallyAction::Push(v) => self.values.push(v),
                TallyAction::Pop => {
                    self.values.pop().ok_or(EmptyTally)?;
                }
            }
            Ok(self.values.len())
        }
    }

    #[tokio::test]
    async fn test_actions_apply_in_order_and_state_is_returned() {
        let (actor, client) = StateActor::new(4, Tally::default());
        let handle = tokio::spawn(actor.run(()));

        assert_eq!(client.perform_action(TallyAction::Push(1)).await.unwrap(), 1);
        assert_eq!(client.perform_action(TallyAction::Push(2)).await.unwrap(), 2);

        let snapshot = client.get().await.unwrap();
        assert!(snapshot.started);
        assert_eq!(snapshot.values, vec![1, 2]);

        drop(client);
        let final_state = handle.await.unwrap();
        assert_eq!(final_state.values, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_action_error_is_wrapped() {
        let (actor, client) = StateActor::new(4, Tally::default());
        tokio::spawn(actor.run(()));

        let err = client.perform_action(TallyAction::Pop).await.unwrap_err();
        assert!(matches!(err, FrameworkError::StateError(_)));
        assert_eq!(err.to_string(), "State error: nothing to pop");

        // A failed action leaves the actor serving requests
        assert_eq!(client.perform_action(TallyAction::Push(5)).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_clients_do_not_lose_updates() {
        let (actor, client) = StateActor::new(2, Tally::default());
        tokio::spawn(actor.run(()));

        let mut handles = vec![];
        for i in 0..50 {
            let client = client.clone();
            handles.push(tokio::spawn(async move {
                client.perform_action(TallyAction::Push(i)).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(client.get().await.unwrap().values.len(), 50);
    }

    #[tokio::test]
    async fn test_zero_buffer_still_serves() {
        let (actor, client) = StateActor::new(0, Tally::default());
        tokio::spawn(actor.run(()));

        assert_eq!(client.perform_action(TallyAction::Push(7)).await.unwrap(), 1);
        assert_eq!(client.perform_action(TallyAction::Push(8)).await.unwrap(), 2);
    }
}
