/// Define unit structs for stable api error codes, each responding with
/// `{"ok": false, "message": .., "error": <code>}`.
#[macro_export]
macro_rules! error_code {
    ($($(#[doc=$doc:literal])* $vis:vis $ident:ident($status:ident, $code:literal, $message:literal));* $(;)*) => { $(
        $(#[doc=$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $ident;

        impl $crate::errors::ApiErrorCode for $ident {
            const CODE: &'static str = $code;
            const MESSAGE: &'static str = $message;
            const STATUS_CODE: ::axum::http::StatusCode = ::axum::http::StatusCode::$status;
        }

        impl ::axum::response::IntoResponse for $ident {
            fn into_response(self) -> ::axum::response::Response {
                $crate::errors::error_response::<Self>()
            }
        }
    )* };
}
