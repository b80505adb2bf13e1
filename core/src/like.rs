//! Work out whether a post ended up liked after a toggle call.
//!
//! The toggle endpoint answers with a free-text message and, when a like was
//! created, the like record. A structured `liked` flag in the payload is
//! trusted first; otherwise the message is matched against the server's
//! known wording, with payload presence as the last resort.

/// Markers are compared against the lowercased message.
const ADDED: &str = "ditambahkan";
const SUCCESS: &str = "berhasil";
const DELETED: &str = "dihapus";
const REMOVED: [&str; 3] = [DELETED, "dibatalkan", "removed"];

/// Infer the liked state from the toggle response message.
///
/// Ordered, first match wins:
/// 1. message mentions the like was added → liked
/// 2. message reports success without mentioning deletion → liked
/// 3. message mentions removal or cancellation → not liked
/// 4. otherwise liked iff the response carried a data payload
pub fn infer_liked(message: &str, has_data: bool) -> bool {
    let message = message.to_lowercase();

    if message.contains(ADDED) || (message.contains(SUCCESS) && !message.contains(DELETED)) {
        true
    } else if REMOVED.iter().any(|marker| message.contains(marker)) {
        false
    } else {
        has_data
    }
}

/// Resolve the liked state, preferring an explicit flag from the server.
pub fn resolve_liked(explicit: Option<bool>, message: &str, has_data: bool) -> bool {
    explicit.unwrap_or_else(|| infer_liked(message, has_data))
}
