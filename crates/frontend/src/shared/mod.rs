pub mod api_error;
pub mod api_utils;
pub mod date_utils;
pub mod http;
pub mod icons;
pub mod toast;
