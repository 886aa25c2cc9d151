//! Multipart POST over the Fetch API

use super::js_error;
use crate::error::{FormError, Result};
use crate::submit::{FormRequest, Transport};
use crate::types::FormResponse;
use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::FormData;

pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn post_form(&self, request: FormRequest) -> Result<FormResponse> {
        let body = FormData::new().map_err(js_error)?;
        for (name, value) in request.payload.iter() {
            body.append_with_str(name, value).map_err(js_error)?;
        }

        // No Content-Type: the browser adds the multipart boundary itself
        let req = request
            .headers
            .iter()
            .fold(Request::post(&request.url), |req, (name, value)| {
                req.header(name, value)
            })
            .body(body)
            .map_err(|e| FormError::Network(e.to_string()))?;

        let resp = req
            .send()
            .await
            .map_err(|e| FormError::Network(e.to_string()))?;

        if !resp.ok() {
            return Err(FormError::Status(resp.status()));
        }

        resp.json::<FormResponse>()
            .await
            .map_err(|e| FormError::Parse(e.to_string()))
    }
}
