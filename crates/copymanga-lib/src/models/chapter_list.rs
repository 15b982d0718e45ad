use serde::{Deserialize, Serialize};

/// Name the source gives to the unlabeled scanlation group
pub const DEFAULT_GROUP_NAME: &str = "默認";

/// Release kind as reported by the source's `type` field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "u8", into = "u8")]
pub enum ChapterKind {
    #[default]
    Normal,
    OneShot,
    Special,
}

impl From<u8> for ChapterKind {
    fn from(value: u8) -> Self {
        match value {
            2 => Self::OneShot,
            3 => Self::Special,
            _ => Self::Normal,
        }
    }
}

impl From<ChapterKind> for u8 {
    fn from(kind: ChapterKind) -> Self {
        match kind {
            ChapterKind::Normal => 1,
            ChapterKind::OneShot => 2,
            ChapterKind::Special => 3,
        }
    }
}

/// A chapter as it appears in the decrypted chapter list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawChapter {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ChapterKind,
}

/// Chapters released by one scanlation group, in source order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChapterGroup {
    pub name: String,
    #[serde(default)]
    pub chapters: Vec<RawChapter>,
}

impl ChapterGroup {
    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_GROUP_NAME
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deserialize_raw_chapter() {
        let chapter: RawChapter = serde_json::from_str(
            r#"{"id":"43acc6f8-5d5d-11ee-9412-d3d228a76de6","name":"第01話","type":1,"size":24}"#,
        )
        .unwrap();

        assert_eq!(chapter.name, "第01話");
        assert_eq!(chapter.kind, ChapterKind::Normal);
    }

    #[test]
    fn test_chapter_kind_from_source_type() {
        assert_eq!(ChapterKind::from(1), ChapterKind::Normal);
        assert_eq!(ChapterKind::from(2), ChapterKind::OneShot);
        assert_eq!(ChapterKind::from(3), ChapterKind::Special);
        assert_eq!(ChapterKind::from(9), ChapterKind::Normal);
    }

    #[test]
    fn test_missing_type_is_normal() {
        let chapter: RawChapter = serde_json::from_str(r#"{"id":"a","name":"b"}"#).unwrap();

        assert_eq!(chapter.kind, ChapterKind::Normal);
    }

    #[test]
    fn test_default_group() {
        let group = ChapterGroup {
            name: DEFAULT_GROUP_NAME.to_string(),
            chapters: vec![],
        };
        assert!(group.is_default());

        let group = ChapterGroup {
            name: "單行本".to_string(),
            chapters: vec![],
        };
        assert!(!group.is_default());
    }
}
