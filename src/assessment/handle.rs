use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info, warn};
use parking_lot::Mutex;
use tokio::task::JoinHandle;

use super::{AssessmentPayload, Configurator, SubmissionSink, WeightStrategy};
use crate::directory::CompanyDirectory;
use crate::error::ApiError;

/// A mounted configurator: the form state plus its company fetch.
///
/// The fetch task only holds a weak reference to the state, so dropping the handle
/// (unmounting) lets an in-flight result fall on the floor instead of touching a dead form.
pub struct ConfiguratorHandle {
    state: Arc<Mutex<Configurator>>,
    directory: Arc<dyn CompanyDirectory>,
    pending: Mutex<Option<JoinHandle<()>>>,
    submitting: AtomicBool,
}

/// Clears the in-flight flag when a submission ends, including when it is cancelled.
struct SubmitGuard<'a>(&'a AtomicBool);

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ConfiguratorHandle {
    /// Creates the form and issues the one-shot company fetch.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn mount(directory: Arc<dyn CompanyDirectory>, strategy: WeightStrategy) -> Self {
        let handle = Self {
            state: Arc::new(Mutex::new(Configurator::new(strategy))),
            directory,
            pending: Mutex::new(None),
            submitting: AtomicBool::new(false),
        };
        info!("🧩 Assessment configurator mounted ({:?} weights)", strategy);
        handle.spawn_company_fetch();
        handle
    }

    /// Re-issues the company fetch after a failure. Returns `false` (and does nothing)
    /// while a fetch is pending or once companies are loaded.
    pub fn retry_companies(&self) -> bool {
        let issued = self.spawn_company_fetch();
        if issued {
            info!("🔁 Retrying company fetch");
        }
        issued
    }

    fn spawn_company_fetch(&self) -> bool {
        let Some(ticket) = self.state.lock().begin_company_fetch() else {
            return false;
        };

        let state = Arc::downgrade(&self.state);
        let directory = Arc::clone(&self.directory);
        let task = tokio::spawn(async move {
            let result = directory.fetch_companies().await;
            match state.upgrade() {
                Some(state) => {
                    state.lock().finish_company_fetch(ticket, result);
                }
                None => debug!("Configurator unmounted, discarding company fetch result"),
            }
        });
        *self.pending.lock() = Some(task);
        true
    }

    /// Waits for the outstanding company fetch, if any, to land.
    pub async fn companies_settled(&self) {
        let task = self.pending.lock().take();
        if let Some(task) = task {
            let _ = task.await;
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&Configurator) -> R) -> R {
        f(&self.state.lock())
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut Configurator) -> R) -> R {
        f(&mut self.state.lock())
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Hands the current draft to `sink`. Only one submission runs at a time; a second
    /// call while one is in flight fails with [`ApiError::InFlight`].
    ///
    /// Once the sink accepts, the form resets unless the draft was edited in the
    /// meantime, in which case the edits are kept. A rejected submission leaves the
    /// draft as it was.
    pub async fn submit(&self, sink: &dyn SubmissionSink) -> Result<AssessmentPayload, ApiError> {
        if self
            .submitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("⚠️ Ignoring submit while another submission is in flight");
            return Err(ApiError::InFlight);
        }
        let _guard = SubmitGuard(&self.submitting);

        let (submitted, payload, companies) = {
            let state = self.state.lock();
            (state.draft().clone(), state.submit(), state.companies().to_vec())
        };

        sink.submit(&payload, &companies).await?;
        self.state.lock().complete_submission(&submitted);
        Ok(payload)
    }
}
