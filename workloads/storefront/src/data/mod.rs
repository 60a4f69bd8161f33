//! Request data decoding: query strings, form bodies, session cookies.

pub mod encoding;
pub mod forms;
pub mod session;

pub use encoding::{parse_urlencoded, url_decode, url_encode};
pub use forms::{AddToCartForm, QuantityForm, VariantIdForm};
pub use session::{bootstrap_cart, session_cookie_header, session_from_cookie, SESSION_COOKIE};
