use crate::error::{CaseError, CaseResult};

/// A card image the user picked: embedded data URL or a remote address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    DataUrl { mime: String, url: String },
    Remote(String),
}

impl ImageSource {
    pub fn parse(raw: &str) -> CaseResult<Self> {
        let raw = raw.trim();
        if let Some(rest) = raw.strip_prefix("data:") {
            let (header, payload) = rest
                .split_once(',')
                .ok_or_else(|| CaseError::InvalidImageSource("data URL without payload".into()))?;
            if payload.is_empty() {
                return Err(CaseError::InvalidImageSource("empty data URL".into()));
            }
            let mime = header.split(';').next().unwrap_or_default();
            validate_mime(mime)?;
            return Ok(Self::DataUrl {
                mime: mime.to_ascii_lowercase(),
                url: raw.to_string(),
            });
        }
        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("https://") || lower.starts_with("http://") {
            return Ok(Self::Remote(raw.to_string()));
        }
        Err(CaseError::InvalidImageSource(format!(
            "unsupported image reference: {}",
            truncate(raw, 32)
        )))
    }

    pub fn as_str(&self) -> &str {
        match self {
            ImageSource::DataUrl { url, .. } => url,
            ImageSource::Remote(url) => url,
        }
    }
}

/// Only `image/*` types are accepted for the card.
pub fn validate_mime(mime: &str) -> CaseResult<()> {
    let mime = mime.trim().to_ascii_lowercase();
    match mime.strip_prefix("image/") {
        Some(sub) if !sub.is_empty() => Ok(()),
        _ => Err(CaseError::InvalidImageSource(format!(
            "not an image: {}",
            if mime.is_empty() { "unknown type" } else { mime.as_str() }
        ))),
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_image_data_urls_and_remote() {
        let src = ImageSource::parse("data:image/png;base64,iVBORw0K").unwrap();
        assert!(matches!(src, ImageSource::DataUrl { ref mime, .. } if mime == "image/png"));
        let remote = ImageSource::parse("https://example.com/cat.jpg").unwrap();
        assert_eq!(remote.as_str(), "https://example.com/cat.jpg");
    }

    #[test]
    fn rejects_non_images() {
        for raw in [
            "data:text/plain;base64,aGVsbG8=",
            "data:image/png;base64,",
            "data:image/png",
            "ftp://example.com/x.png",
            "",
        ] {
            let err = ImageSource::parse(raw).unwrap_err();
            assert!(err.is_retryable(), "{raw}");
        }
        assert!(validate_mime("image/").is_err());
        assert!(validate_mime("IMAGE/WEBP").is_ok());
    }
}
