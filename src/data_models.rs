use serde::Deserialize;

// Wire types for `action=query&prop=revisions&formatversion=2`. Unknown fields
// such as `batchcomplete` are ignored.

#[derive(Deserialize, Debug, Clone)]
pub struct WikipediaResponse {
    pub query: QueryBlock,
}

#[derive(Deserialize, Debug, Clone)]
pub struct QueryBlock {
    #[serde(default)]
    pub pages: Vec<UpstreamPage>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct UpstreamPage {
    #[serde(rename = "pageid")]
    pub page_id: Option<u64>,

    #[serde(rename = "ns", default)]
    pub namespace: i64,
    #[serde(default)]
    pub title: String,

    /// Only sent (as `true`) when the article does not exist.
    #[serde(default)]
    pub missing: bool,
    /// Set for titles MediaWiki refuses outright, e.g. ones containing `[`.
    #[serde(default)]
    pub invalid: bool,
    #[serde(rename = "invalidreason")]
    pub invalid_reason: Option<String>,

    #[serde(default)]
    pub revisions: Vec<UpstreamRevision>,
}

impl UpstreamPage {
    pub fn exists(&self) -> bool {
        !self.missing && !self.invalid
    }

    /// `rvlimit=1` means at most one revision comes back.
    pub fn latest_revision(&self) -> Option<&UpstreamRevision> {
        self.revisions.first()
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct UpstreamRevision {
    #[serde(default)]
    pub content: String,
}

#[test]
fn test_decode_formatversion_2_page() {
    let body = r#"{
        "batchcomplete": true,
        "query": {
            "pages": [
                {
                    "pageid": 47749536,
                    "ns": 0,
                    "title": "Yoshua Bengio",
                    "revisions": [
                        {
                            "contentformat": "text/x-wiki",
                            "contentmodel": "wikitext",
                            "content": "{{Short description|Canadian computer scientist}}"
                        }
                    ]
                }
            ]
        }
    }"#;

    let response: WikipediaResponse = serde_json::from_str(body).unwrap();
    let page = &response.query.pages[0];
    assert_eq!(page.page_id, Some(47749536));
    assert_eq!(page.namespace, 0);
    assert_eq!(page.title, "Yoshua Bengio");
    assert!(page.exists());
    assert_eq!(
        page.latest_revision().map(|r| r.content.as_str()),
        Some("{{Short description|Canadian computer scientist}}")
    );
}

#[test]
fn test_decode_missing_page() {
    let body = r#"{"query":{"pages":[{"ns":0,"title":"Yoshua_Bengio~","missing":true}]}}"#;

    let response: WikipediaResponse = serde_json::from_str(body).unwrap();
    let page = &response.query.pages[0];
    assert_eq!(page.page_id, None);
    assert!(page.missing);
    assert!(!page.exists());
    assert!(page.latest_revision().is_none());
}
