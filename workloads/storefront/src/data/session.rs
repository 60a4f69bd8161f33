//! Session cookie handling and the cart's session round-trip.
//!
//! Each visitor gets a `sess_` id in the `inkorner_session` cookie. The
//! cart snapshot is the session payload: loaded before the page
//! renders, written back by a store subscriber after every successful
//! mutation. Persistence failures are logged and the page is served
//! anyway - a broken session store must never take the shop down.

use ink_cache::{Session, SessionId};
use ink_commerce::{CartSnapshot, CartStore};
use ink_observability::{RequestContext, StructuredLogger};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "inkorner_session";

/// Extract and validate the session id from the request's cookies.
pub fn session_from_cookie(ctx: &RequestContext) -> Option<SessionId> {
    SessionId::parse(ctx.cookie(SESSION_COOKIE)?)
}

/// `Set-Cookie` value for a freshly minted session.
pub fn session_cookie_header(id: &SessionId) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id)
}

/// Build the request's cart store: restore the persisted snapshot
/// (creating the session record on a first visit; an unreadable session
/// degrades to an empty cart) and attach the write-back subscriber.
pub fn bootstrap_cart(id: &SessionId, logger: &StructuredLogger) -> CartStore {
    let snapshot = match Session::<CartSnapshot>::new().and_then(|s| s.get_or_create(id)) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            logger
                .warn_builder("cart session unreadable, starting empty")
                .field("error", e.to_string())
                .emit();
            CartSnapshot::default()
        }
    };

    let store = CartStore::from_snapshot(snapshot);

    let session_id = id.clone();
    let hook_logger = logger.clone();
    store.subscribe(move |snapshot| {
        let written = Session::<CartSnapshot>::new().and_then(|s| s.set(&session_id, snapshot));
        if let Err(e) = written {
            hook_logger
                .error_builder("failed to persist cart")
                .field("error", e.to_string())
                .emit();
        }
    });

    store
}
