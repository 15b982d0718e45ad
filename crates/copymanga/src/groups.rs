use std::fmt;

use copymanga_lib::models::ChapterGroup;
use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
};

use crate::Error;

/// Chapter groups keyed by their path word, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Groups(pub Vec<(String, ChapterGroup)>);

impl Groups {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChapterGroup)> {
        self.0.iter().map(|(id, group)| (id.as_str(), group))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ChapterGroup> {
        self.iter().find(|(key, _)| *key == id).map(|(_, group)| group)
    }
}

// a map would lose the order of the groups, which decides ties when sorting
impl<'de> Deserialize<'de> for Groups {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GroupsVisitor;

        impl<'de> Visitor<'de> for GroupsVisitor {
            type Value = Groups;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of chapter groups")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Groups, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((id, group)) = map.next_entry::<String, ChapterGroup>()? {
                    groups.push((id, group));
                }
                Ok(Groups(groups))
            }
        }

        deserializer.deserialize_map(GroupsVisitor)
    }
}

#[derive(Debug, Deserialize)]
struct ChapterListResponse {
    groups: Option<Groups>,
}

/// Parses the decrypted chapter list.
///
/// Fails with `JsonParseFailure` on invalid json and with `SchemaFailure`
/// when there is no `groups` field.
pub fn parse_groups(plaintext: &str) -> Result<Groups, Error> {
    let response: ChapterListResponse = serde_json::from_str(plaintext)?;

    response.groups.ok_or(Error::SchemaFailure)
}
