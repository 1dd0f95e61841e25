use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rom {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub download: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Rom {
    /// Tags in catalog order, empty when the entry carries none.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_default() {
        let rom: Rom = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
        assert_eq!(rom.name, "A");
        assert!(rom.description.is_empty());
        assert!(rom.download.is_empty());
        assert_eq!(rom.tags, None);
        assert!(rom.tags().is_empty());
    }

    #[test]
    fn name_is_required() {
        assert!(serde_json::from_str::<Rom>(r#"{"description":"x"}"#).is_err());
    }

    #[test]
    fn tag_membership_is_exact() {
        let rom: Rom =
            serde_json::from_str(r#"{"name":"A","tags":["HyperOS","Beta"]}"#).unwrap();
        assert!(rom.has_tag("HyperOS"));
        assert!(rom.has_tag("Beta"));
        assert!(!rom.has_tag("Hyper"));
        assert!(!rom.has_tag("hyperos"));
    }
}
