use crate::http::ResponseType;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Failure details of a [StandardResponse].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResponseError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
}

/// Uniform envelope for every HTTP call.
///
/// Requests never fail with `Err`: transport errors and error statuses come
/// back with `success == false` and an [ResponseError].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StandardResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ResponseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ResponseMetadata>,
}

impl<T> StandardResponse<T> {
    pub(crate) fn failure(message: &str, code: &str, details: Option<serde_json::Value>, metadata: Option<ResponseMetadata>) -> Self {
        StandardResponse {
            success: false,
            data: None,
            error: Some(ResponseError {
                message: message.to_string(),
                code: Some(code.to_string()),
                details,
            }),
            metadata,
        }
    }
}

/// Shapes a received response: statuses of 400 and above become failures
/// carrying the body as details; anything else is decoded per
/// `response_type`.
pub(crate) fn shape_response<T: DeserializeOwned>(
    status: u16,
    headers: HashMap<String, String>,
    body: &[u8],
    response_type: ResponseType,
) -> StandardResponse<T> {
    let metadata = Some(ResponseMetadata {
        status_code: status,
        headers,
    });

    if status >= 400 {
        log::error!("HTTP request failed with status {}", status);
        return StandardResponse::failure(
            &format!("Request failed with status code {}", status),
            &status.to_string(),
            body_details(body),
            metadata,
        );
    }

    match decode::<T>(body, response_type) {
        Ok(data) => StandardResponse {
            success: true,
            data,
            error: None,
            metadata,
        },
        Err(err) => {
            log::error!("Failed to decode HTTP response body: {}", err);
            StandardResponse::failure(
                &format!("Failed to decode response body: {}", err),
                "DECODE_ERROR",
                body_details(body),
                metadata,
            )
        }
    }
}

fn decode<T: DeserializeOwned>(body: &[u8], response_type: ResponseType) -> Result<Option<T>, serde_json::Error> {
    match response_type {
        ResponseType::Json if body.is_empty() => Ok(None),
        ResponseType::Json => serde_json::from_slice(body).map(Some),
        ResponseType::Text => {
            let text = String::from_utf8_lossy(body).into_owned();
            serde_json::from_value(serde_json::Value::String(text)).map(Some)
        }
        ResponseType::Bytes => {
            let bytes = body.iter().map(|b| serde_json::Value::from(*b)).collect();
            serde_json::from_value(serde_json::Value::Array(bytes)).map(Some)
        }
    }
}

fn body_details(body: &[u8]) -> Option<serde_json::Value> {
    if body.is_empty() {
        return None;
    }
    serde_json::from_slice(body)
        .ok()
        .or_else(|| Some(serde_json::Value::String(String::from_utf8_lossy(body).into_owned())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct User {
        name: String,
    }

    #[test]
    fn json_success() {
        let response: StandardResponse<User> =
            shape_response(200, HashMap::new(), br#"{"name":"A"}"#, ResponseType::Json);
        assert!(response.success);
        assert_eq!(response.data, Some(User { name: "A".into() }));
        assert!(response.error.is_none());
        assert_eq!(response.metadata.unwrap().status_code, 200);
    }

    #[test]
    fn empty_json_body_has_no_data() {
        let response: StandardResponse<User> = shape_response(204, HashMap::new(), b"", ResponseType::Json);
        assert!(response.success);
        assert!(response.data.is_none());
    }

    #[test]
    fn text_and_bytes() {
        let text: StandardResponse<String> = shape_response(200, HashMap::new(), b"hello", ResponseType::Text);
        assert_eq!(text.data.as_deref(), Some("hello"));

        let bytes: StandardResponse<Vec<u8>> = shape_response(200, HashMap::new(), &[1, 2, 255], ResponseType::Bytes);
        assert_eq!(bytes.data, Some(vec![1, 2, 255]));
    }

    #[test]
    fn error_status_carries_body() {
        let response: StandardResponse<User> =
            shape_response(404, HashMap::new(), br#"{"reason":"missing"}"#, ResponseType::Json);
        assert!(!response.success);
        let error = response.error.unwrap();
        assert_eq!(error.code.as_deref(), Some("404"));
        assert_eq!(error.details, Some(json!({ "reason": "missing" })));

        let response: StandardResponse<User> = shape_response(500, HashMap::new(), b"boom", ResponseType::Json);
        assert_eq!(response.error.unwrap().details, Some(json!("boom")));
    }

    #[test]
    fn undecodable_body_is_failure() {
        let response: StandardResponse<User> = shape_response(200, HashMap::new(), b"not json", ResponseType::Json);
        assert!(!response.success);
        assert_eq!(response.error.unwrap().code.as_deref(), Some("DECODE_ERROR"));
    }

    #[test]
    fn serializes_with_camel_case_metadata() {
        let response: StandardResponse<User> = shape_response(404, HashMap::new(), b"", ResponseType::Json);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["metadata"]["statusCode"], json!(404));
        assert_eq!(json["success"], json!(false));
        assert!(json.get("data").is_none());
    }
}
