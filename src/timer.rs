use iced::Task;
use iced::futures::future::{AbortHandle, abortable};
use std::time::Duration;

/// Deliver `message` once `delay` has passed.
///
/// The sleep is created on first poll, so building the task needs no runtime.
pub fn after<M>(delay: Duration, message: M) -> Task<M>
where
    M: Send + 'static,
{
    Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |_| message,
    )
}

/// Sleep for `delay` unless the guard goes away first.
///
/// Resolves to `true` when the full delay elapsed and `false` when aborted.
pub fn abortable_sleep(delay: Duration) -> (impl Future<Output = bool> + Send + 'static, TimerGuard) {
    let (sleep, handle) = abortable(async move { tokio::time::sleep(delay).await });
    (async move { sleep.await.is_ok() }, TimerGuard { handle })
}

/// Like [`after`], but the timer is aborted when the returned guard is dropped.
pub fn cancellable_after<M>(delay: Duration, message: M) -> (Task<M>, TimerGuard)
where
    M: Send + 'static,
{
    let (elapsed, guard) = abortable_sleep(delay);
    let task = Task::future(async move { elapsed.await.then_some(message) })
        .then(|fired| fired.map_or_else(Task::none, Task::done));

    (task, guard)
}

/// Keeps a timer alive. Dropping or replacing it aborts the timer.
pub struct TimerGuard {
    handle: AbortHandle,
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl std::fmt::Debug for TimerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerGuard")
            .field("aborted", &self.handle.is_aborted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_kept_guard_lets_timer_elapse() {
        let (elapsed, _guard) = abortable_sleep(Duration::from_millis(5));

        assert!(elapsed.await);
    }

    #[tokio::test]
    async fn test_dropped_guard_aborts_timer() {
        let (elapsed, guard) = abortable_sleep(Duration::from_secs(60));
        drop(guard);

        assert!(!elapsed.await);
    }

    #[tokio::test]
    async fn test_replacing_guard_aborts_only_superseded_timer() {
        let (first, guard) = abortable_sleep(Duration::from_secs(60));
        let mut slot = Some(guard);
        assert!(slot.is_some());

        let (second, guard) = abortable_sleep(Duration::from_millis(5));
        slot = Some(guard);

        assert!(!first.await);
        assert!(second.await);
        assert!(slot.is_some());
    }

    #[test]
    fn test_cancellable_after_builds_without_runtime() {
        let (_task, guard) = cancellable_after(Duration::from_secs(60), "quiet");

        assert!(format!("{:?}", guard).contains("aborted: false"));
    }
}
