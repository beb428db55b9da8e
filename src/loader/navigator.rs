//! Navigation with explicit discarding of late loader results

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use super::{RouteLoader, View};
use crate::routes::Route;

/// Result of a navigation
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    /// The loader settled while this navigation was still current
    Applied(View),
    /// A newer navigation started first; the result was dropped
    Superseded,
}

/// Drives route transitions and publishes the current view
///
/// Each call to [`navigate`](Navigator::navigate) takes a new generation
/// number and shows the pending view. The settled view is published only if
/// no later navigation has started in the meantime.
pub struct Navigator {
    loader: RouteLoader,
    generation: AtomicU64,
    current: watch::Sender<View>,
}

impl Navigator {
    pub fn new(loader: RouteLoader) -> Self {
        let (current, _) = watch::channel(View::pending(&Route::ArticleList));
        Self {
            loader,
            generation: AtomicU64::new(0),
            current,
        }
    }

    /// Watch the view being displayed
    pub fn subscribe(&self) -> watch::Receiver<View> {
        self.current.subscribe()
    }

    /// View currently displayed
    pub fn current(&self) -> View {
        self.current.borrow().clone()
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Navigate to `route`, showing the pending view until its loader settles
    pub async fn navigate(&self, route: Route) -> Navigation {
        let ticket = self.begin(&route);
        tracing::debug!("Navigation {} to {}", ticket, route);

        let view = self.loader.load(&route).await;

        if !self.settle(ticket, &view) {
            tracing::debug!("Discarding result of navigation {} to {}", ticket, route);
            return Navigation::Superseded;
        }
        Navigation::Applied(view)
    }

    /// Take a new ticket and publish the pending view for `route`
    ///
    /// Both happen under the watch lock, so no settle can land in between.
    fn begin(&self, route: &Route) -> u64 {
        let mut ticket = 0;
        self.current.send_modify(|current| {
            ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *current = View::pending(route);
        });
        ticket
    }

    /// Publish `view` if `ticket` is still the latest; the check and the
    /// publish share the watch lock
    fn settle(&self, ticket: u64, view: &View) -> bool {
        self.current.send_if_modified(|current| {
            if self.generation.load(Ordering::SeqCst) != ticket {
                return false;
            }
            *current = view.clone();
            true
        })
    }
}
