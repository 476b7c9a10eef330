//! HTTP response layer
//!
//! Response builders shared by the default invalid-method handler and the demo server.

pub mod response;

pub use response::{
    build_404_response, build_405_response, build_json_response, build_text_response,
    TEXT_CONTENT_TYPE,
};
