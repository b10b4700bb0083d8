/// Path prefix after which the media host accepts transformation segments.
const UPLOAD_SEGMENT: &str = "/upload/";
/// Seek to the 1 second mark.
const SEEK_SEGMENT: &str = "/upload/so_1/";
const VIDEO_EXTENSIONS: [&str; 4] = [".mp4", ".mov", ".m4v", ".webm"];
const IMAGE_EXTENSION: &str = ".jpg";

/// Derive a still-frame image URL from a hosted video URL.
///
/// Total and side-effect free; the result is not checked for existence.
pub fn derive_thumbnail_url(hosted_url: &str) -> String {
    let mut result = hosted_url.replace(UPLOAD_SEGMENT, SEEK_SEGMENT);
    let lowered = result.to_ascii_lowercase();

    match VIDEO_EXTENSIONS.iter().find(|ext| lowered.ends_with(*ext)) {
        Some(ext) => {
            result.truncate(result.len() - ext.len());
            result.push_str(IMAGE_EXTENSION);
        }
        None => result.push_str(IMAGE_EXTENSION),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_segment_and_extension_swap() {
        assert_eq!(
            derive_thumbnail_url("https://res.cloudinary.com/demo/video/upload/v123/clip.mp4"),
            "https://res.cloudinary.com/demo/video/upload/so_1/v123/clip.jpg"
        );
    }

    #[test]
    fn test_unrecognized_extension_is_appended() {
        assert_eq!(
            derive_thumbnail_url("https://res.cloudinary.com/demo/video/upload/v123/clip.xyz"),
            "https://res.cloudinary.com/demo/video/upload/so_1/v123/clip.xyz.jpg"
        );
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert_eq!(
            derive_thumbnail_url("https://host/video/upload/v9/CLIP.MOV"),
            "https://host/video/upload/so_1/v9/CLIP.jpg"
        );
        assert_eq!(
            derive_thumbnail_url("https://host/video/upload/v9/a.webm"),
            "https://host/video/upload/so_1/v9/a.jpg"
        );
    }

    #[test]
    fn test_url_without_upload_segment() {
        assert_eq!(derive_thumbnail_url("https://cdn/x/clip.m4v"), "https://cdn/x/clip.jpg");
        assert_eq!(derive_thumbnail_url(""), ".jpg");
    }

    #[test]
    fn test_deterministic() {
        let url = "https://res.cloudinary.com/demo/video/upload/v1/abc.mov";
        assert_eq!(derive_thumbnail_url(url), derive_thumbnail_url(url));
    }
}
