use crate::client::{TranslateOutcome, TranslateRequest, TranslationClient};
use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;

/// The asynchronous boundary between the controller and the network.
pub trait Dispatch {
    fn dispatch(&mut self, request: TranslateRequest);
    /// Non-blocking; yields each settled request exactly once.
    fn try_settled(&mut self) -> Option<TranslateOutcome>;
}

type Wake = Arc<dyn Fn() + Send + Sync>;

/// Runs requests on a tokio runtime and hands outcomes back over a channel.
pub struct TokioDispatcher {
    rt: tokio::runtime::Runtime,
    client: Arc<TranslationClient>,
    tx: Sender<TranslateOutcome>,
    rx: Receiver<TranslateOutcome>,
    wake: Option<Wake>,
}

impl TokioDispatcher {
    pub fn new(client: TranslationClient) -> anyhow::Result<Self> {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("emotrans-net")
            .enable_all()
            .build()?;
        let (tx, rx) = crossbeam_channel::unbounded();
        Ok(Self { rt, client: Arc::new(client), tx, rx, wake: None })
    }

    /// Called after each settlement so the UI repaints without waiting for input.
    pub fn set_wake(&mut self, wake: impl Fn() + Send + Sync + 'static) {
        self.wake = Some(Arc::new(wake));
    }
}

impl Dispatch for TokioDispatcher {
    fn dispatch(&mut self, request: TranslateRequest) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let wake = self.wake.clone();
        self.rt.spawn(async move {
            let outcome = client.translate(&request).await;
            if tx.send(outcome).is_err() {
                tracing::debug!("settlement dropped: ui is gone");
            }
            if let Some(wake) = wake {
                wake();
            }
        });
    }

    fn try_settled(&mut self) -> Option<TranslateOutcome> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[test]
    fn settles_failed_request_and_wakes_ui() {
        // Bind then drop to get a port nobody listens on.
        let port = {
            let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            l.local_addr().unwrap().port()
        };
        let base = format!("http://127.0.0.1:{port}");
        let client = TranslationClient::new(&base, Some(Duration::from_secs(5))).unwrap();
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakes);
        let mut dispatcher = TokioDispatcher::new(client).unwrap();
        dispatcher.set_wake(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        dispatcher.dispatch(TranslateRequest { text: "hi".into(), target_language: Language::French });
        let outcome = dispatcher.rx.recv_timeout(Duration::from_secs(10)).unwrap();
        assert!(matches!(outcome, TranslateOutcome::Failed(_)));

        // The wake runs right after the send.
        for _ in 0..100 {
            if wakes.load(Ordering::SeqCst) == 1 {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(wakes.load(Ordering::SeqCst), 1);
        assert!(dispatcher.try_settled().is_none());
    }
}
