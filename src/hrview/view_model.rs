//! Reactive state behind the HR directory view.
//!
//! The view model owns two independent pieces of state, the current user and
//! the user list, each held in a `watch` channel so renderers can subscribe.
//! Mounting spawns one task per resource; neither waits on the other and the
//! order they finish in is irrelevant because they write disjoint fields.
//!
//! Load failures never escape: they are reported to the injected [`Logger`]
//! and the state falls back as follows.
//!
//! | Resource     | Success              | Failure                                   |
//! |--------------|----------------------|-------------------------------------------|
//! | current user | replaced wholesale   | `full_name` set to [`FALLBACK_FULL_NAME`] |
//! | user list    | replaced wholesale   | left unchanged                            |

use super::{
    api::HttpClient,
    features::{
        me::{self, CurrentUser},
        users::{self, User},
    },
    logger::{Logger, Resource},
};
use std::sync::Arc;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, error};

/// Label shown in place of the caller's name when `/api/hr/me` fails.
pub const FALLBACK_FULL_NAME: &str = "unknown user";

pub struct ViewModel {
    client: Arc<dyn HttpClient>,
    logger: Arc<dyn Logger>,
    current_user: watch::Sender<CurrentUser>,
    users: watch::Sender<Vec<User>>,
}

impl ViewModel {
    #[must_use]
    pub fn new(client: Arc<dyn HttpClient>, logger: Arc<dyn Logger>) -> Self {
        let (current_user, _) = watch::channel(CurrentUser::default());
        let (users, _) = watch::channel(Vec::new());

        Self {
            client,
            logger,
            current_user,
            users,
        }
    }

    #[must_use]
    pub fn current_user(&self) -> CurrentUser {
        self.current_user.borrow().clone()
    }

    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.users.borrow().clone()
    }

    #[must_use]
    pub fn subscribe_current_user(&self) -> watch::Receiver<CurrentUser> {
        self.current_user.subscribe()
    }

    #[must_use]
    pub fn subscribe_users(&self) -> watch::Receiver<Vec<User>> {
        self.users.subscribe()
    }

    pub async fn load_current_user(&self) {
        match me::client::fetch_me(self.client.as_ref()).await {
            Ok(user) => {
                debug!(username = %user.username, "current user loaded");
                self.current_user.send_replace(user);
            }
            Err(err) => {
                self.logger.fetch_failed(Resource::CurrentUser, &err);
                // username is intentionally left as it was
                self.current_user
                    .send_modify(|user| user.full_name = FALLBACK_FULL_NAME.to_string());
            }
        }
    }

    pub async fn load_users(&self) {
        match users::client::list_users(self.client.as_ref()).await {
            Ok(list) => {
                debug!(count = list.len(), "user list loaded");
                self.users.send_replace(list);
            }
            Err(err) => self.logger.fetch_failed(Resource::Users, &err),
        }
    }

    /// Activation hook: starts both loads as independent tasks and returns
    /// immediately.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn mount(self: &Arc<Self>) -> Mounted {
        let view = Arc::clone(self);
        let current_user = tokio::spawn(async move { view.load_current_user().await });

        let view = Arc::clone(self);
        let users = tokio::spawn(async move { view.load_users().await });

        Mounted {
            current_user,
            users,
        }
    }
}

/// Handle to the tasks started by [`ViewModel::mount`].
pub struct Mounted {
    current_user: JoinHandle<()>,
    users: JoinHandle<()>,
}

impl Mounted {
    /// Resolves once both loads have settled.
    pub async fn settled(self) {
        let (current_user, users) = tokio::join!(self.current_user, self.users);

        for (resource, result) in [
            (Resource::CurrentUser, current_user),
            (Resource::Users, users),
        ] {
            if let Err(err) = result {
                error!(%resource, "load task did not complete: {err}");
            }
        }
    }
}
