/// Header carrying the merchant channel identifier.
pub const HEADER_CHANNEL_ID: &str = "X-Channel-Id";

/// Header carrying the merchant channel secret.
pub const HEADER_CHANNEL_SECRET: &str = "X-Channel-Secret";

/// Content type sent with every request body.
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=UTF-8";

/// Gateway return code denoting success, independent of HTTP status.
pub const RETURN_CODE_SUCCESS: &str = "0000";
