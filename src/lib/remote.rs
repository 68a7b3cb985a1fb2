//! Keyed bindings for remote data. A binding points at one backend
//! resource identified by its request key (for example a user id). When
//! the key changes the previous value is discarded and a new fetch
//! starts; when a fetch finishes after its key was superseded, the result
//! is dropped instead of overwriting newer state. The pure state machine
//! lives in [`RemoteBinding`] and is host-testable; [`use_remote`] wires
//! it into the reactive graph.

use super::errors::AppError;
use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Lifecycle of one remote resource.
#[derive(Clone, Debug, PartialEq)]
pub enum RemoteState<T> {
    /// No fetch has started yet.
    Idle,
    /// A fetch for the current key is in flight.
    Loading,
    /// The most recent fetch for the current key returned data.
    Loaded(T),
    /// The most recent fetch for the current key failed. The binding
    /// stays failed until it is rekeyed or explicitly refetched.
    Failed(AppError),
}

impl<T> RemoteState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteState::Idle | RemoteState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            RemoteState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            RemoteState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

impl<T> Default for RemoteState<T> {
    fn default() -> Self {
        RemoteState::Idle
    }
}

/// Number of loaded items, or `None` while the list is still loading or
/// failed. Used for tab badges that should stay hidden until data is in.
pub fn loaded_len<T>(state: &RemoteState<Vec<T>>) -> Option<usize> {
    state.value().map(Vec::len)
}

/// Handle for one started fetch. Settling with a ticket from a
/// superseded generation is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// State machine for one keyed remote resource.
#[derive(Debug)]
pub struct RemoteBinding<K, T> {
    key: Option<K>,
    generation: u64,
    state: RemoteState<T>,
}

impl<K: PartialEq, T> RemoteBinding<K, T> {
    pub fn new() -> Self {
        Self {
            key: None,
            generation: 0,
            state: RemoteState::Idle,
        }
    }

    /// Points the binding at `key` and returns the ticket for the fetch
    /// that must now run. Returns `None` when the key is unchanged, so
    /// repeated renders of the same view never duplicate requests.
    pub fn rebind(&mut self, key: K) -> Option<FetchTicket> {
        if self.key.as_ref() == Some(&key) {
            return None;
        }

        self.key = Some(key);
        self.generation += 1;
        self.state = RemoteState::Loading;
        Some(FetchTicket(self.generation))
    }

    /// Records the outcome of the fetch identified by `ticket`. Returns
    /// `false` when the ticket was superseded by a newer rebind, in which
    /// case the result is dropped.
    pub fn settle(&mut self, ticket: FetchTicket, result: Result<T, AppError>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }

        self.state = match result {
            Ok(value) => RemoteState::Loaded(value),
            Err(error) => RemoteState::Failed(error),
        };
        true
    }

    pub fn state(&self) -> &RemoteState<T> {
        &self.state
    }
}

impl<K: PartialEq, T> Default for RemoteBinding<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reactive handle to a remote resource bound with [`use_remote`].
pub struct Remote<T: 'static> {
    state: ReadSignal<RemoteState<T>>,
    refresh: WriteSignal<u64>,
}

impl<T> Clone for Remote<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Remote<T> {}

impl<T: Clone + Send + Sync + 'static> Remote<T> {
    /// Current state of the resource. Tracks when read reactively.
    pub fn get(&self) -> RemoteState<T> {
        self.state.get()
    }

    /// Discards the current value and fetches the current key again.
    pub fn refetch(&self) {
        self.refresh.update(|count| *count += 1);
    }
}

/// Binds a remote resource into the reactive graph. `key` is tracked:
/// whenever it produces a new value the binding rekeys and `fetch` runs
/// for it. Unchanged keys never refetch, stale responses never
/// overwrite newer state, and failures are logged and surfaced through
/// [`RemoteState::Failed`].
pub fn use_remote<K, T, Fut>(
    key: impl Fn() -> K + 'static,
    fetch: impl Fn(K) -> Fut + Clone + 'static,
) -> Remote<T>
where
    K: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let (state, set_state) = signal(RemoteState::Idle);
    let (refresh, set_refresh) = signal(0u64);
    // The refresh counter folds into the key so a manual refetch rekeys
    // the binding and supersedes any in-flight response.
    let binding = StoredValue::new(RemoteBinding::<(u64, K), T>::new());

    Effect::new(move |_| {
        let current = (refresh.get(), key());
        let Some(ticket) = binding
            .try_update_value(|binding| binding.rebind(current.clone()))
            .flatten()
        else {
            return;
        };

        set_state.set(RemoteState::Loading);

        let fetch = fetch.clone();
        spawn_local(async move {
            let result = fetch(current.1).await;
            if let Err(error) = &result {
                logging::error!("remote fetch failed: {error}");
            }

            let next = match &result {
                Ok(value) => RemoteState::Loaded(value.clone()),
                Err(error) => RemoteState::Failed(error.clone()),
            };
            let settled = binding
                .try_update_value(|binding| binding.settle(ticket, result))
                .unwrap_or(false);
            if settled {
                let _ = set_state.try_set(next);
            }
        });
    });

    Remote {
        state,
        refresh: set_refresh,
    }
}

#[cfg(test)]
mod tests {
    use super::{RemoteBinding, RemoteState};
    use crate::app_lib::errors::AppError;

    fn offline() -> AppError {
        AppError::Network("offline".to_string())
    }

    #[test]
    fn rebind_same_key_issues_no_ticket() {
        let mut posts = RemoteBinding::<String, Vec<String>>::new();

        let ticket = posts.rebind("user-1".to_string());
        assert!(ticket.is_some());
        assert!(posts.rebind("user-1".to_string()).is_none());
        assert_eq!(posts.state(), &RemoteState::Loading);
    }

    #[test]
    fn rebind_new_key_discards_loaded_value() {
        let mut posts = RemoteBinding::<String, Vec<String>>::new();

        let ticket = posts.rebind("user-1".to_string()).unwrap();
        assert!(posts.settle(ticket, Ok(vec!["first post".to_string()])));
        assert!(posts.state().value().is_some());

        assert!(posts.rebind("user-2".to_string()).is_some());
        assert_eq!(posts.state(), &RemoteState::Loading);
    }

    #[test]
    fn stale_response_never_overwrites_newer_state() {
        let mut posts = RemoteBinding::<String, Vec<String>>::new();

        let stale = posts.rebind("user-1".to_string()).unwrap();
        let current = posts.rebind("user-2".to_string()).unwrap();

        assert!(posts.settle(current, Ok(vec!["kept".to_string()])));
        assert!(!posts.settle(stale, Ok(vec!["dropped".to_string()])));
        assert_eq!(
            posts.state().value(),
            Some(&vec!["kept".to_string()])
        );
    }

    #[test]
    fn failure_sticks_until_rekeyed() {
        let mut profile = RemoteBinding::<String, String>::new();

        let ticket = profile.rebind("user-1".to_string()).unwrap();
        assert!(profile.settle(ticket, Err(offline())));
        assert_eq!(profile.state().error(), Some(&offline()));

        // Same key again: no new fetch, the failure stays visible.
        assert!(profile.rebind("user-1".to_string()).is_none());
        assert_eq!(profile.state().error(), Some(&offline()));

        // A new key clears it.
        assert!(profile.rebind("user-2".to_string()).is_some());
        assert!(profile.state().is_loading());
    }

    #[test]
    fn refresh_counter_rekeys_the_same_user() {
        let mut posts = RemoteBinding::<(u64, String), Vec<String>>::new();

        let first = posts.rebind((0, "user-1".to_string())).unwrap();
        assert!(posts.settle(first, Err(offline())));

        // A manual refetch bumps the counter, which counts as a new key.
        let second = posts.rebind((1, "user-1".to_string()));
        assert!(second.is_some());
        assert!(posts.state().is_loading());
    }

    #[test]
    fn loaded_len_counts_only_loaded_lists() {
        use super::loaded_len;

        let mut posts = RemoteBinding::<String, Vec<String>>::new();
        assert_eq!(loaded_len(posts.state()), None);

        let ticket = posts.rebind("user-1".to_string()).unwrap();
        assert_eq!(loaded_len(posts.state()), None);

        assert!(posts.settle(ticket, Ok(vec!["first".to_string()])));
        assert_eq!(loaded_len(posts.state()), Some(1));

        let ticket = posts.rebind("user-2".to_string()).unwrap();
        assert!(posts.settle(ticket, Ok(Vec::new())));
        assert_eq!(loaded_len(posts.state()), Some(0));

        let ticket = posts.rebind("user-3".to_string()).unwrap();
        assert!(posts.settle(ticket, Err(offline())));
        assert_eq!(loaded_len(posts.state()), None);
    }

    #[test]
    fn sections_fail_independently() {
        let mut profile = RemoteBinding::<String, String>::new();
        let mut catalogs = RemoteBinding::<String, Vec<String>>::new();

        let profile_ticket = profile.rebind("user-1".to_string()).unwrap();
        let catalog_ticket = catalogs.rebind("user-1".to_string()).unwrap();

        assert!(profile.settle(profile_ticket, Ok("Alice".to_string())));
        assert!(catalogs.settle(catalog_ticket, Err(offline())));

        assert_eq!(profile.state().value(), Some(&"Alice".to_string()));
        assert_eq!(catalogs.state().error(), Some(&offline()));
    }
}
