use bytes::Bytes;
use uuid::Uuid;

/// Hand-assembled multipart/form-data body.
///
/// Parts are written in insertion order, each opened by `--boundary\r\n` and
/// the body closed by `--boundary--\r\n`.
pub struct MultipartForm {
    boundary: String,
    parts: Vec<MultipartPart>,
}

struct MultipartPart {
    name: String,
    filename: Option<String>,
    content_type: Option<String>,
    data: Bytes,
}

impl MultipartForm {
    /// Creates a new MultipartForm with a random boundary
    pub fn new() -> Self {
        Self::with_boundary(Uuid::new_v4().simple().to_string())
    }

    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            parts: Vec::new(),
        }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Adds a plain form field. No per-part content type is written.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.parts.push(MultipartPart {
            name: name.to_string(),
            filename: None,
            content_type: None,
            data: Bytes::from(value.to_string()),
        });
        self
    }

    /// Adds a file field to the form
    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: Bytes) -> Self {
        self.parts.push(MultipartPart {
            name: name.to_string(),
            filename: Some(filename.to_string()),
            content_type: Some(content_type.to_string()),
            data,
        });
        self
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Builds the multipart form, returning the content-type header and body
    pub fn build(self) -> (String, Bytes) {
        let content_type = self.content_type();
        let payload: usize = self.parts.iter().map(|p| p.data.len() + 128).sum();
        let mut body = Vec::with_capacity(payload + self.boundary.len() * (self.parts.len() + 1));

        for part in &self.parts {
            body.extend_from_slice(b"--");
            body.extend_from_slice(self.boundary.as_bytes());
            body.extend_from_slice(b"\r\n");

            body.extend_from_slice(b"Content-Disposition: form-data; name=\"");
            body.extend_from_slice(part.name.as_bytes());
            body.extend_from_slice(b"\"");

            if let Some(filename) = &part.filename {
                body.extend_from_slice(b"; filename=\"");
                body.extend_from_slice(filename.as_bytes());
                body.extend_from_slice(b"\"");
            }
            body.extend_from_slice(b"\r\n");

            if let Some(content_type) = &part.content_type {
                body.extend_from_slice(b"Content-Type: ");
                body.extend_from_slice(content_type.as_bytes());
                body.extend_from_slice(b"\r\n");
            }
            body.extend_from_slice(b"\r\n");

            body.extend_from_slice(&part.data);
            body.extend_from_slice(b"\r\n");
        }

        body.extend_from_slice(b"--");
        body.extend_from_slice(self.boundary.as_bytes());
        body.extend_from_slice(b"--\r\n");

        (content_type, Bytes::from(body))
    }
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}
