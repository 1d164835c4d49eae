use std::sync::Arc;

use serde_json::{json, Value};

use crate::FetchedArtifact;

pub const SHARED_FILE_NAME: &str = "shared-image.jpg";
pub const SHARED_FILE_TYPE: &str = "image/jpeg";

const TITLE: &str = "Amazing Random Image";
const SHORT_TEXT: &str = "Check out this awesome image!";
const LONG_TEXT: &str = "Check out this awesome random image from Picsum!";

/// A binary attachment for a share payload. Wraps the bytes of the current
/// fetched artifact; the data is shared, never copied per dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareFile {
    pub name: String,
    pub mime_type: String,
    pub data: Arc<[u8]>,
}

/// The data handed to the platform share entry point. Field presence is a
/// pure function of the method name; see [`SharePayload::for_method`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharePayload {
    pub title: Option<String>,
    pub text: Option<String>,
    pub url: Option<String>,
    pub files: Vec<ShareFile>,
}

/// One row of the method table: which fields a named share method carries.
struct PayloadShape {
    method: &'static str,
    title: Option<&'static str>,
    text: Option<&'static str>,
    with_url: bool,
    with_file: bool,
}

#[rustfmt::skip]
const SHAPES: &[PayloadShape] = &[
    PayloadShape { method: "image-only",       title: None,        text: None,             with_url: false, with_file: true },
    PayloadShape { method: "image-with-text",  title: None,        text: Some(SHORT_TEXT), with_url: false, with_file: true },
    PayloadShape { method: "image-with-title", title: Some(TITLE), text: None,             with_url: false, with_file: true },
    PayloadShape { method: "image-with-url",   title: None,        text: None,             with_url: true,  with_file: true },
    PayloadShape { method: "image-complete",   title: Some(TITLE), text: Some(LONG_TEXT),  with_url: true,  with_file: true },
    PayloadShape { method: "text-only",        title: None,        text: Some(SHORT_TEXT), with_url: false, with_file: false },
    PayloadShape { method: "title-only",       title: Some(TITLE), text: None,             with_url: false, with_file: false },
    PayloadShape { method: "url-only",         title: None,        text: None,             with_url: true,  with_file: false },
    PayloadShape { method: "text-and-title",   title: Some(TITLE), text: Some(LONG_TEXT),  with_url: false, with_file: false },
    PayloadShape { method: "text-and-url",     title: None,        text: Some(LONG_TEXT),  with_url: true,  with_file: false },
    PayloadShape { method: "title-and-url",    title: Some(TITLE), text: None,             with_url: true,  with_file: false },
    PayloadShape { method: "all-text-data",    title: Some(TITLE), text: Some(LONG_TEXT),  with_url: true,  with_file: false },
];

/// Any method name outside the table shares a plain title + text payload.
const FALLBACK_SHAPE: PayloadShape = PayloadShape {
    method: "fallback",
    title: Some("Test Share"),
    text: Some("Testing Web Share API"),
    with_url: false,
    with_file: false,
};

/// The method names the harness exposes as actions, in display order.
pub const METHOD_NAMES: [&str; 12] = [
    "image-only",
    "image-with-text",
    "image-with-title",
    "image-with-url",
    "image-complete",
    "text-only",
    "title-only",
    "url-only",
    "text-and-title",
    "text-and-url",
    "title-and-url",
    "all-text-data",
];

impl SharePayload {
    /// Build the payload for a named share method. The url field, when the
    /// shape carries one, is the endpoint the artifact was fetched from; the
    /// attached file wraps the artifact's bytes as `shared-image.jpg`.
    #[must_use]
    pub fn for_method(method: &str, image_url: &str, artifact: &FetchedArtifact) -> Self {
        let shape = SHAPES
            .iter()
            .find(|shape| shape.method == method)
            .unwrap_or(&FALLBACK_SHAPE);

        Self {
            title: shape.title.map(str::to_string),
            text: shape.text.map(str::to_string),
            url: shape.with_url.then(|| image_url.to_string()),
            files: if shape.with_file {
                vec![ShareFile {
                    name: SHARED_FILE_NAME.to_string(),
                    mime_type: SHARED_FILE_TYPE.to_string(),
                    data: Arc::clone(&artifact.data),
                }]
            } else {
                Vec::new()
            },
        }
    }

    /// Render the payload for diagnostics. File bodies are summarized by
    /// name, type, and size; the bytes themselves never reach a report.
    #[must_use]
    pub fn to_diagnostic(&self) -> Value {
        let mut value = json!({});
        if let Some(title) = &self.title {
            value["title"] = json!(title);
        }
        if let Some(text) = &self.text {
            value["text"] = json!(text);
        }
        if let Some(url) = &self.url {
            value["url"] = json!(url);
        }
        if !self.files.is_empty() {
            value["files"] = Value::Array(
                self.files
                    .iter()
                    .map(|file| {
                        json!({
                            "name": file.name,
                            "type": file.mime_type,
                            "size": file.data.len(),
                        })
                    })
                    .collect(),
            );
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DisplayRegistry;

    const IMAGE_URL: &str = "https://picsum.photos/200";

    fn artifact() -> FetchedArtifact {
        let registry = DisplayRegistry::default();
        let data: Arc<[u8]> = Arc::from(&b"\xff\xd8\xff\xe0 not a real jpeg"[..]);
        FetchedArtifact {
            display: registry.allocate(Arc::clone(&data)),
            data,
        }
    }

    // (method, has title, has text, has url, has file)
    #[rustfmt::skip]
    const EXPECTED: [(&str, bool, bool, bool, bool); 12] = [
        ("image-only",       false, false, false, true),
        ("image-with-text",  false, true,  false, true),
        ("image-with-title", true,  false, false, true),
        ("image-with-url",   false, false, true,  true),
        ("image-complete",   true,  true,  true,  true),
        ("text-only",        false, true,  false, false),
        ("title-only",       true,  false, false, false),
        ("url-only",         false, false, true,  false),
        ("text-and-title",   true,  true,  false, false),
        ("text-and-url",     false, true,  true,  false),
        ("title-and-url",    true,  false, true,  false),
        ("all-text-data",    true,  true,  true,  false),
    ];

    #[test]
    fn field_presence_is_a_pure_function_of_method_name() {
        let artifact = artifact();
        for (method, title, text, url, file) in EXPECTED {
            let payload = SharePayload::for_method(method, IMAGE_URL, &artifact);
            assert_eq!(payload.title.is_some(), title, "title for {method}");
            assert_eq!(payload.text.is_some(), text, "text for {method}");
            assert_eq!(payload.url.is_some(), url, "url for {method}");
            assert_eq!(!payload.files.is_empty(), file, "file for {method}");
        }
    }

    #[test]
    fn method_names_cover_the_whole_table() {
        assert_eq!(METHOD_NAMES.len(), EXPECTED.len());
        for name in METHOD_NAMES {
            assert!(EXPECTED.iter().any(|(method, ..)| *method == name));
        }
    }

    #[test]
    fn text_only_carries_the_short_caption() {
        let payload = SharePayload::for_method("text-only", IMAGE_URL, &artifact());
        assert_eq!(
            payload,
            SharePayload {
                text: Some("Check out this awesome image!".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn image_complete_carries_every_field_and_wraps_the_artifact() {
        let artifact = artifact();
        let payload = SharePayload::for_method("image-complete", IMAGE_URL, &artifact);
        assert_eq!(payload.title.as_deref(), Some("Amazing Random Image"));
        assert_eq!(
            payload.text.as_deref(),
            Some("Check out this awesome random image from Picsum!")
        );
        assert_eq!(payload.url.as_deref(), Some(IMAGE_URL));
        assert_eq!(payload.files.len(), 1);
        let file = &payload.files[0];
        assert_eq!(file.name, SHARED_FILE_NAME);
        assert_eq!(file.mime_type, SHARED_FILE_TYPE);
        assert_eq!(file.data, artifact.data);
    }

    #[test]
    fn unknown_method_names_fall_back_to_title_and_text() {
        let payload = SharePayload::for_method("basic", IMAGE_URL, &artifact());
        assert_eq!(payload.title.as_deref(), Some("Test Share"));
        assert_eq!(payload.text.as_deref(), Some("Testing Web Share API"));
        assert_eq!(payload.url, None);
        assert!(payload.files.is_empty());
    }

    #[test]
    fn diagnostic_rendering_summarizes_files_without_inlining_bytes() {
        let artifact = artifact();
        let payload = SharePayload::for_method("image-only", IMAGE_URL, &artifact);
        let diagnostic = payload.to_diagnostic();
        assert_eq!(
            diagnostic,
            serde_json::json!({
                "files": [{
                    "name": "shared-image.jpg",
                    "type": "image/jpeg",
                    "size": artifact.data.len(),
                }]
            })
        );
    }
}
