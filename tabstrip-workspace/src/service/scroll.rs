use crate::{
    message::scroll::{ScrollRequest, ScrollRestore},
    prelude::*,
};
use tokio::time;

/// Restores scroll offsets after a short delay, once a tab's content has mounted.
///
/// Each restore runs in a detached task, and nothing waits for it.
pub struct ScrollRestoreService {
    _run: Lifeline,
}

impl Service for ScrollRestoreService {
    type Bus = WorkspaceBus;
    type Lifeline = anyhow::Result<Self>;

    fn spawn(bus: &Self::Bus) -> Self::Lifeline {
        let mut rx = bus.rx::<ScrollRequest>()?;
        let tx = bus.tx::<ScrollRestore>()?;

        let _run = Self::task("run", async move {
            while let Some(request) = rx.recv().await {
                let mut tx = tx.clone();

                tokio::spawn(async move {
                    time::sleep(request.delay).await;

                    trace!("restoring scroll for tab {}", request.tab);
                    let restore = ScrollRestore {
                        tab: request.tab,
                        value: request.value,
                    };

                    tx.send(restore).await.ok();
                });
            }
        });

        Ok(Self { _run })
    }
}
