//! Best-effort ordered write queue.
//!
//! # Responsibility
//! - Move adapter writes off the caller path onto one writer thread.
//! - Report failed writes through logs and counters only.
//!
//! # Invariants
//! - Writes are applied in enqueue order, so a later document for a key
//!   always overwrites an earlier one.
//! - A failed write never surfaces to the caller and is never retried.
//! - Dropping the queue drains every write enqueued before the drop.

use super::KeyValueStore;
use log::{error, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

const WRITER_THREAD_NAME: &str = "moodgrid-persist";

enum WriteCommand {
    Put { key: String, value: String },
    Flush(Sender<()>),
}

#[derive(Debug, Default)]
struct WriteStats {
    completed: AtomicU64,
    failed: AtomicU64,
}

enum Writer {
    Background {
        sender: Sender<WriteCommand>,
        worker: JoinHandle<()>,
    },
    // Used when the writer thread cannot be spawned.
    Inline(Arc<dyn KeyValueStore>),
}

/// Ordered, fire-and-forget persistence channel for one adapter.
pub struct PersistQueue {
    writer: Option<Writer>,
    stats: Arc<WriteStats>,
}

impl PersistQueue {
    /// Starts the writer thread for `adapter`.
    pub fn spawn(adapter: Arc<dyn KeyValueStore>) -> Self {
        let stats = Arc::new(WriteStats::default());
        let (sender, receiver) = mpsc::channel::<WriteCommand>();

        let worker_adapter = Arc::clone(&adapter);
        let worker_stats = Arc::clone(&stats);
        let spawned = thread::Builder::new()
            .name(WRITER_THREAD_NAME.to_string())
            .spawn(move || {
                for command in receiver {
                    match command {
                        WriteCommand::Put { key, value } => {
                            apply_write(worker_adapter.as_ref(), &worker_stats, &key, &value);
                        }
                        WriteCommand::Flush(ack) => {
                            let _ = ack.send(());
                        }
                    }
                }
            });

        let writer = match spawned {
            Ok(worker) => Writer::Background { sender, worker },
            Err(err) => {
                error!(
                    "event=persist_queue_start module=storage status=error fallback=inline error={}",
                    err
                );
                Writer::Inline(adapter)
            }
        };

        Self {
            writer: Some(writer),
            stats,
        }
    }

    /// Queues `value` for `key`; returns before the write is applied.
    pub fn enqueue(&self, key: &str, value: String) {
        match self.writer.as_ref() {
            Some(Writer::Background { sender, .. }) => {
                let command = WriteCommand::Put {
                    key: key.to_string(),
                    value,
                };
                if sender.send(command).is_err() {
                    self.stats.failed.fetch_add(1, Ordering::SeqCst);
                    warn!(
                        "event=persist_write module=storage status=error key={} error_code=writer_gone",
                        key
                    );
                }
            }
            Some(Writer::Inline(adapter)) => {
                apply_write(adapter.as_ref(), &self.stats, key, &value);
            }
            None => {}
        }
    }

    /// Blocks until every write queued before this call has been applied.
    pub fn flush(&self) {
        if let Some(Writer::Background { sender, .. }) = self.writer.as_ref() {
            let (ack_tx, ack_rx) = mpsc::channel();
            if sender.send(WriteCommand::Flush(ack_tx)).is_ok() {
                let _ = ack_rx.recv();
            }
        }
    }

    /// Number of writes the adapter accepted.
    pub fn completed_writes(&self) -> u64 {
        self.stats.completed.load(Ordering::SeqCst)
    }

    /// Number of writes that failed and were dropped.
    pub fn failed_writes(&self) -> u64 {
        self.stats.failed.load(Ordering::SeqCst)
    }
}

impl Drop for PersistQueue {
    fn drop(&mut self) {
        if let Some(Writer::Background { sender, worker }) = self.writer.take() {
            drop(sender);
            if worker.join().is_err() {
                error!("event=persist_queue_stop module=storage status=error error_code=writer_panicked");
            }
        }
    }
}

fn apply_write(adapter: &dyn KeyValueStore, stats: &WriteStats, key: &str, value: &str) {
    match adapter.write(key, value) {
        Ok(()) => {
            stats.completed.fetch_add(1, Ordering::SeqCst);
        }
        Err(err) => {
            stats.failed.fetch_add(1, Ordering::SeqCst);
            warn!(
                "event=persist_write module=storage status=error key={} bytes={} error={}",
                key,
                value.len(),
                err
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PersistQueue;
    use crate::storage::{KeyValueStore, MemoryKeyValueStore};
    use std::sync::Arc;

    #[test]
    fn later_write_for_same_key_wins() {
        let adapter = Arc::new(MemoryKeyValueStore::new());
        let queue = PersistQueue::spawn(adapter.clone());
        for idx in 0..50 {
            queue.enqueue("doc", format!("v{idx}"));
        }
        queue.flush();

        assert_eq!(adapter.read("doc").unwrap().as_deref(), Some("v49"));
        assert_eq!(queue.completed_writes(), 50);
        assert_eq!(queue.failed_writes(), 0);
    }

    #[test]
    fn drop_drains_pending_writes() {
        let adapter = Arc::new(MemoryKeyValueStore::new());
        {
            let queue = PersistQueue::spawn(adapter.clone());
            queue.enqueue("a", "1".to_string());
            queue.enqueue("b", "2".to_string());
        }
        assert_eq!(adapter.read("a").unwrap().as_deref(), Some("1"));
        assert_eq!(adapter.read("b").unwrap().as_deref(), Some("2"));
    }
}
