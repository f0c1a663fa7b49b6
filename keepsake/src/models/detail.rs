use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Metadata;

/// Category a detail is filed under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DetailCategory {
    ClothingSize,
    GiftIdea,
    MedicalCondition,
    #[default]
    Hobby,
    Activity,
}

impl std::fmt::Display for DetailCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClothingSize => write!(f, "clothing_size"),
            Self::GiftIdea => write!(f, "gift_idea"),
            Self::MedicalCondition => write!(f, "medical_condition"),
            Self::Hobby => write!(f, "hobby"),
            Self::Activity => write!(f, "activity"),
        }
    }
}

impl std::str::FromStr for DetailCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clothing_size" => Ok(Self::ClothingSize),
            "gift_idea" => Ok(Self::GiftIdea),
            "medical_condition" => Ok(Self::MedicalCondition),
            "hobby" => Ok(Self::Hobby),
            "activity" => Ok(Self::Activity),
            _ => Err(format!("Unknown detail category: {s}")),
        }
    }
}

/// A categorized fact recorded about a profile (shirt size, gift idea, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detail {
    pub id: String,
    pub profile_id: String,
    pub category: DetailCategory,
    pub label: String,
    pub value: String,
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Detail {
    pub fn new(
        id: String,
        profile_id: String,
        category: DetailCategory,
        label: String,
        value: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            profile_id,
            category,
            label,
            value,
            metadata: Metadata::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(DetailCategory::ClothingSize.to_string(), "clothing_size");
        assert_eq!(DetailCategory::GiftIdea.to_string(), "gift_idea");
        assert_eq!(
            DetailCategory::MedicalCondition.to_string(),
            "medical_condition"
        );
        assert_eq!(DetailCategory::Hobby.to_string(), "hobby");
        assert_eq!(DetailCategory::Activity.to_string(), "activity");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(
            "clothing_size".parse::<DetailCategory>().unwrap(),
            DetailCategory::ClothingSize
        );
        assert_eq!(
            "Gift_Idea".parse::<DetailCategory>().unwrap(),
            DetailCategory::GiftIdea
        );
        assert!("sock_size".parse::<DetailCategory>().is_err());
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&DetailCategory::MedicalCondition).unwrap();
        assert_eq!(json, "\"medical_condition\"");
    }

    #[test]
    fn test_new_detail_defaults() {
        let detail = Detail::new(
            "dtl_1".to_string(),
            "prf_1".to_string(),
            DetailCategory::GiftIdea,
            "Wool socks".to_string(),
            "Mentioned cold feet on the last visit".to_string(),
        );
        assert_eq!(detail.profile_id, "prf_1");
        assert_eq!(detail.category, DetailCategory::GiftIdea);
        assert!(detail.metadata.is_empty());
    }
}
