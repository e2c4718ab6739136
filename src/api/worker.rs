//! API worker thread
//!
//! Executes API requests in a background thread so the session thread never
//! blocks on the network. Receives requests via channel, runs them on a
//! current-thread tokio runtime, and sends tagged responses back.
//!
//! Responses are delivered in completion order, which may differ from
//! dispatch order; the session's correlation tags and sequence checks deal
//! with that on the receiving side.

use std::sync::mpsc::{Receiver, Sender};

use super::client::ApiClient;
use super::types::{ApiRequest, ApiResponse};

/// Spawn the API worker thread
///
/// Creates a background thread with a tokio runtime that:
/// 1. Listens for requests on the request channel
/// 2. Executes each against the platform API
/// 3. Sends the tagged response back via the response channel
///
/// The thread exits when the request channel closes (session dropped) or
/// when the response channel has no receiver left.
pub fn spawn_worker(
    client: ApiClient,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    std::thread::spawn(move || {
        // Create a single-threaded tokio runtime for this worker thread
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime");

        rt.block_on(worker_loop(client, request_rx, response_tx));
    });
}

/// Main worker loop - processes requests until the channel is closed
///
/// Uses blocking `recv()` on the request channel (fine in a dedicated
/// thread) and executes each request with the async client.
async fn worker_loop(
    client: ApiClient,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        log::debug!("API worker handling {:?}", request);
        let response = execute(&client, request).await;
        if response_tx.send(response).is_err() {
            log::debug!("Response channel closed, API worker exiting");
            break;
        }
    }
}

/// Execute one request and build its tagged response
async fn execute(client: &ApiClient, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::FetchFeed { tab, community_id } => ApiResponse::Feed {
            result: client.fetch_feed(tab, community_id).await,
        },
        ApiRequest::ToggleLike { dream_id } => ApiResponse::Like {
            dream_id,
            result: client.toggle_like(dream_id).await,
        },
        ApiRequest::ToggleSave { dream_id } => ApiResponse::Save {
            dream_id,
            result: client.toggle_save(dream_id).await,
        },
        ApiRequest::DeleteDream { dream_id } => ApiResponse::DreamDeleted {
            dream_id,
            result: client.delete_dream(dream_id).await,
        },
        ApiRequest::FetchProfile { user_id } => ApiResponse::Profile {
            result: client.fetch_profile(user_id).await,
        },
        ApiRequest::SetFollow {
            origin,
            user_id,
            follow,
        } => {
            let result = if follow {
                client.follow(user_id).await
            } else {
                client.unfollow(user_id).await
            };
            ApiResponse::Follow {
                origin,
                user_id,
                result,
            }
        }
        ApiRequest::SetBlock { user_id, block } => {
            let result = if block {
                client.block(user_id).await
            } else {
                client.unblock(user_id).await
            };
            ApiResponse::Block { user_id, result }
        }
        ApiRequest::SetMute { user_id, mute } => {
            let result = if mute {
                client.mute(user_id).await
            } else {
                client.unmute(user_id).await
            };
            ApiResponse::Mute { user_id, result }
        }
        ApiRequest::FetchSuggestions => ApiResponse::Suggestions {
            result: client.suggested_users().await,
        },
        ApiRequest::FetchCommunity { community_id } => ApiResponse::Community {
            result: client.fetch_community(community_id).await,
        },
        ApiRequest::JoinCommunity { community_id } => ApiResponse::Joined {
            community_id,
            result: client.join_community(community_id).await,
        },
        ApiRequest::FetchInbox => ApiResponse::Inbox {
            result: client.fetch_inbox().await,
        },
        ApiRequest::MarkRead { notification_id } => ApiResponse::MarkedRead {
            notification_id,
            result: client.mark_notification_read(notification_id).await,
        },
        ApiRequest::MarkAllRead => ApiResponse::MarkedAllRead {
            result: client.mark_all_notifications_read().await,
        },
        ApiRequest::Search {
            surface,
            query,
            scope,
            limit,
            request_id,
        } => ApiResponse::Search {
            surface,
            request_id,
            result: client.search(&query, scope, limit).await,
        },
    }
}
