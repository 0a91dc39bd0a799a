use std::time::Duration;

/// Waits for `duration` on the UI task.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Waits for `duration` on the UI task. The browser has no tokio timer, so
/// this parks on a `setTimeout` that answers over the eval channel.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    use dioxus::prelude::document;

    let script = format!("setTimeout(() => dioxus.send(true), {});", duration.as_millis());
    let mut timer = document::eval(&script);
    if let Err(err) = timer.recv::<bool>().await {
        tracing::warn!(?err, "timer script failed");
    }
}
