use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use js_sys::{ArrayBuffer, Uint8Array};
use log::info;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use super::{HttpResponse, HttpTransport};
use crate::error::DeliveryError;

/// Browser `fetch` in CORS mode. Only usable when running inside a window.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn post(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: Bytes,
    ) -> Result<HttpResponse, DeliveryError> {
        info!("http_post: {}", url);
        let window = web_sys::window().ok_or_else(|| {
            DeliveryError::Transport("No window available".to_string())
        })?;

        let request_init = RequestInit::new();
        request_init.set_method("POST");
        request_init.set_mode(RequestMode::Cors);

        let headers_map = Headers::new()?;
        for (key, value) in headers {
            headers_map.set(key, value)?;
        }
        request_init.set_headers(&headers_map);

        let body_array = Uint8Array::from(&body[..]);
        request_init.set_body(&body_array);

        let request = Request::new_with_str_and_init(url, &request_init)?;
        let response_js =
            JsFuture::from(window.fetch_with_request(&request)).await?;
        let response: Response = response_js.dyn_into()?;

        // body is read for every status, error responses carry the
        // provider's description
        let status = response.status();
        let body_js = JsFuture::from(response.array_buffer()?).await?;
        let buffer: ArrayBuffer = body_js.dyn_into()?;
        let body_bytes = Uint8Array::new(&buffer).to_vec();

        Ok(HttpResponse::new(status, Bytes::from(body_bytes)))
    }
}
