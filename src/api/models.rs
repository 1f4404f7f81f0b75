/// Response shapes for the Pixabay search API
///
/// These structs are deserialized verbatim from the JSON response and flow
/// from the client layer to the UI layer. The provider uses its own field
/// casing, so the URL fields carry explicit renames.

use serde::Deserialize;

/// One image record returned by the search API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hit {
    /// Provider-assigned image id
    pub id: u64,
    /// Display-size image shown on the gallery card
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    /// Full-size image opened in the lightbox
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
    /// Comma-separated tag string
    pub tags: String,
    pub likes: u32,
    pub views: u32,
    pub comments: u32,
    pub downloads: u32,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    /// Records accessible through the API for this query
    #[serde(rename = "totalHits")]
    pub total_hits: u32,
    /// Matched records for the requested page, in ranking order
    pub hits: Vec<Hit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed-down capture of a real API response; unknown fields must be
    // tolerated because the provider returns many more than we consume.
    const FIXTURE: &str = r#"{
        "total": 4692,
        "totalHits": 500,
        "hits": [
            {
                "id": 195893,
                "pageURL": "https://pixabay.com/en/blossom-bloom-flower-195893/",
                "type": "photo",
                "tags": "blossom, bloom, flower",
                "previewURL": "https://cdn.pixabay.com/photo/2013/10/15/09/12/flower-195893_150.jpg",
                "webformatURL": "https://pixabay.com/get/35bbf209e13e39d2_640.jpg",
                "largeImageURL": "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg",
                "imageWidth": 4000,
                "imageHeight": 2250,
                "views": 7671,
                "downloads": 6439,
                "likes": 5,
                "comments": 2,
                "user": "Josch13"
            },
            {
                "id": 73424,
                "tags": "sunflower, field, yellow",
                "webformatURL": "https://pixabay.com/get/9a87c1a8f1c2_640.jpg",
                "largeImageURL": "https://pixabay.com/get/9a87c1a8f1c2_1280.jpg",
                "views": 103,
                "downloads": 30,
                "likes": 12,
                "comments": 7
            }
        ]
    }"#;

    #[test]
    fn test_parse_response() {
        let response: SearchResponse = serde_json::from_str(FIXTURE).unwrap();

        assert_eq!(response.total_hits, 500);
        assert_eq!(response.hits.len(), 2);

        // Records keep their response order and carry every display field.
        let first = &response.hits[0];
        assert_eq!(first.id, 195893);
        assert_eq!(
            first.webformat_url,
            "https://pixabay.com/get/35bbf209e13e39d2_640.jpg"
        );
        assert_eq!(
            first.large_image_url,
            "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg"
        );
        assert_eq!(first.tags, "blossom, bloom, flower");
        assert_eq!(first.likes, 5);
        assert_eq!(first.views, 7671);
        assert_eq!(first.comments, 2);
        assert_eq!(first.downloads, 6439);

        assert_eq!(response.hits[1].id, 73424);
    }

    #[test]
    fn test_parse_empty_result() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"total": 0, "totalHits": 0, "hits": []}"#).unwrap();

        assert_eq!(response.total_hits, 0);
        assert!(response.hits.is_empty());
    }
}
