use crate::errors::{Result, UrlFormatError};
use percent_encoding::percent_decode_str;
use url::Url;

/// Trait for parsing artifact references into a display name
pub trait Parser {
    type Output;

    fn parse(&self, input: &str) -> Result<Self::Output>;
}

/// Extracts the component directory from a download URL
pub struct ComponentUrlParser;

impl Parser for ComponentUrlParser {
    type Output = String;

    /// Parse `scheme://host/<component>/<version>/<rest>` and return `<component>`
    fn parse(&self, download_url: &str) -> Result<Self::Output> {
        let invalid = || UrlFormatError::DownloadFile(download_url.to_string());

        let parsed = Url::parse(download_url).map_err(|e| {
            log::debug!("cannot parse download URL {:?}: {}", download_url, e);
            invalid()
        })?;

        let segment = parsed
            .path_segments()
            .and_then(|mut segments| segments.next())
            .filter(|segment| !segment.is_empty())
            .ok_or_else(invalid)?;

        // Path segments come back percent-encoded
        let component = percent_decode_str(segment).decode_utf8().map_err(|e| {
            log::debug!("component segment {:?} is not UTF-8: {}", segment, e);
            invalid()
        })?;

        Ok(component.into_owned())
    }
}

/// Extracts the image name from a container registry reference
pub struct ContainerImageParser;

impl Parser for ContainerImageParser {
    type Output = String;

    /// Parse `registry/namespace/.../<image>:<tag>` and return `<image>`
    fn parse(&self, image_url: &str) -> Result<Self::Output> {
        let invalid = || UrlFormatError::ContainerImage(image_url.to_string());

        // The tag separator must come after the last path separator, so a
        // registry port such as `host:5000/image` is not mistaken for a tag.
        let (_, reference) = image_url.rsplit_once('/').ok_or_else(invalid)?;

        // `image[:tag][@sha256:<hex>]`, the digest colon is not a tag separator
        let (reference, digest) = match reference.split_once('@') {
            Some((reference, digest)) => (reference, Some(digest)),
            None => (reference, None),
        };
        let (name, tag) = match reference.rsplit_once(':') {
            Some((name, tag)) => (name, Some(tag)),
            None => (reference, None),
        };

        let well_formed = !name.is_empty()
            && (tag.is_some() || digest.is_some())
            && tag.map_or(true, |t| !t.is_empty())
            && digest.map_or(true, |d| !d.is_empty());

        if !well_formed {
            log::debug!("container image URL {:?} has no image name, tag or digest", image_url);
            return Err(invalid().into());
        }

        Ok(name.to_string())
    }
}

pub fn component_name_from_url(download_url: &str) -> Result<String> {
    ComponentUrlParser.parse(download_url)
}

pub fn container_image_name_from_url(image_url: &str) -> Result<String> {
    ContainerImageParser.parse(image_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_name_from_url() {
        let err = component_name_from_url("").unwrap_err();
        assert_eq!(
            err.to_string(),
            "download file image URL is not in the expected format: "
        );

        assert_eq!(
            component_name_from_url("https://acs-mirror.azureedge.net/cni-plugins/v*/binaries")
                .unwrap(),
            "cni-plugins"
        );
    }

    #[test]
    fn test_component_name_rejects_missing_component() {
        let parser = ComponentUrlParser;

        for url in [
            "https://acs-mirror.azureedge.net",
            "https://acs-mirror.azureedge.net/",
            "not a url",
        ] {
            let err = parser.parse(url).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("download file image URL is not in the expected format: {}", url)
            );
        }
    }

    #[test]
    fn test_component_name_is_decoded() {
        let parser = ComponentUrlParser;

        assert_eq!(
            parser.parse("https://host.example/cni plugins/v1/bin").unwrap(),
            "cni plugins"
        );
        assert_eq!(parser.parse("https://host.example/kübe/v1/bin").unwrap(), "kübe");
        assert_eq!(
            parser.parse("https://host.example/cni%2Dplugins/v1").unwrap(),
            "cni-plugins"
        );

        // decodes to invalid UTF-8
        assert!(parser.parse("https://host.example/%FF/v1").is_err());
    }

    #[test]
    fn test_component_name_single_segment() {
        assert_eq!(
            ComponentUrlParser
                .parse("https://packages.example.com/containerd")
                .unwrap(),
            "containerd"
        );
    }

    #[test]
    fn test_container_image_name_from_url() {
        let err = container_image_name_from_url("").unwrap_err();
        assert_eq!(
            err.to_string(),
            "container image component URL is not in the expected format: "
        );

        assert_eq!(
            container_image_name_from_url(
                "mcr.microsoft.com/oss/kubernetes/autoscaler/addon-resizer:*"
            )
            .unwrap(),
            "addon-resizer"
        );
    }

    #[test]
    fn test_container_image_shapes() {
        let parser = ContainerImageParser;

        assert_eq!(parser.parse("localhost:5000/pause:3.9").unwrap(), "pause");
        assert_eq!(
            parser
                .parse("mcr.microsoft.com/oss/kubernetes/pause@sha256:abc123")
                .unwrap(),
            "pause"
        );

        // tag and digest together
        assert_eq!(
            parser
                .parse("mcr.microsoft.com/oss/kubernetes/pause:3.9@sha256:abc123")
                .unwrap(),
            "pause"
        );
        assert_eq!(
            parser
                .parse("localhost:5000/ns/pause:3.9@sha256:abc123")
                .unwrap(),
            "pause"
        );
        assert!(parser.parse("mcr.microsoft.com/oss/pause@").is_err());
        assert!(parser.parse("mcr.microsoft.com/oss/@sha256:abc123").is_err());

        // no tag after the final segment
        assert!(parser.parse("localhost:5000/pause").is_err());
        // no path separator at all
        assert!(parser.parse("pause:3.9").is_err());
        // empty image name or tag
        assert!(parser.parse("mcr.microsoft.com/oss/:1.0").is_err());
        assert!(parser.parse("mcr.microsoft.com/oss/pause:").is_err());
    }
}
