use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A bingo objective: one monster and every quest that counts for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BingoMonster {
    pub name: String,
    pub quest_ids: BTreeSet<u32>,
}

impl BingoMonster {
    pub fn new(name: impl Into<String>, quest_ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            name: name.into(),
            quest_ids: quest_ids.into_iter().collect(),
        }
    }

    /// Whether completing `quest_id` satisfies this objective
    pub fn is_satisfied_by(&self, quest_id: u32) -> bool {
        self.quest_ids.contains(&quest_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_quests_satisfy_same_objective() {
        let monster = BingoMonster::new("Rathalos", [23010, 23011, 55920]);
        assert!(monster.is_satisfied_by(23010));
        assert!(monster.is_satisfied_by(55920));
        assert!(!monster.is_satisfied_by(1));
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{"name":"Gypceros","quest_ids":[101,100,101]}"#;
        let monster: BingoMonster = serde_json::from_str(json).unwrap();
        assert_eq!(monster.name, "Gypceros");
        assert_eq!(monster.quest_ids.len(), 2);
    }
}
