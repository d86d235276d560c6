// ABOUTME: The sole sanctioned channel between the webview UI and the host.
// ABOUTME: Exposes open-external, UI→host messages, and named subscriptions.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

type Listener = Box<dyn Fn(&serde_json::Value) + Send + Sync>;

/// Handle for one registered listener on one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionId {
    channel: String,
    id: u64,
}

/// Host-side registry of named message channels.
///
/// The UI posts into it through the `send_message` command; host code
/// subscribes per channel. Unsubscribing removes exactly the listener
/// that was registered, never its channel-mates.
pub struct MessageHub {
    next_id: AtomicU64,
    channels: Mutex<HashMap<String, Vec<(u64, Listener)>>>,
}

impl MessageHub {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(0),
            channels: Mutex::new(HashMap::new()),
        }
    }

    /// Register a listener on a named channel.
    pub async fn subscribe<F>(&self, channel: &str, listener: F) -> SubscriptionId
    where
        F: Fn(&serde_json::Value) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut channels = self.channels.lock().await;
        channels
            .entry(channel.to_string())
            .or_default()
            .push((id, Box::new(listener)));
        SubscriptionId {
            channel: channel.to_string(),
            id,
        }
    }

    /// Remove exactly the listener behind `subscription`. Returns false
    /// if it was already gone.
    pub async fn unsubscribe(&self, subscription: &SubscriptionId) -> bool {
        let mut channels = self.channels.lock().await;
        let Some(listeners) = channels.get_mut(&subscription.channel) else {
            log::warn!(
                "[Bridge] Unsubscribe from unknown channel: {}",
                subscription.channel
            );
            return false;
        };
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != subscription.id);
        let removed = listeners.len() < before;
        if listeners.is_empty() {
            channels.remove(&subscription.channel);
        }
        removed
    }

    /// Deliver a payload to every listener on the channel. Returns how
    /// many listeners were invoked.
    pub async fn publish(&self, channel: &str, payload: &serde_json::Value) -> usize {
        let channels = self.channels.lock().await;
        let Some(listeners) = channels.get(channel) else {
            return 0;
        };
        for (_, listener) in listeners {
            listener(payload);
        }
        listeners.len()
    }
}

/// Open a URL in the system's external handler.
#[tauri::command]
pub fn open_external(app: tauri::AppHandle, url: String) -> Result<(), String> {
    use tauri_plugin_opener::OpenerExt;

    app.opener()
        .open_url(&url, None::<&str>)
        .map_err(|e| format!("Failed to open {}: {}", url, e))
}

/// Post a named message from the UI to host-side subscribers.
#[tauri::command]
pub async fn send_message(
    hub: tauri::State<'_, MessageHub>,
    channel: String,
    payload: serde_json::Value,
) -> Result<(), String> {
    let delivered = hub.publish(&channel, &payload).await;
    log::debug!(
        "[Bridge] UI message on '{}' delivered to {} subscriber(s)",
        channel,
        delivered
    );
    Ok(())
}
