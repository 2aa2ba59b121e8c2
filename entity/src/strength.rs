use sea_orm::entity::prelude::StringLen;
use sea_orm::{DeriveActiveEnum, EnumIter};

/// How strongly a hero wields a power. Stored as its display string.
#[derive(
    Debug,
    Copy,
    Clone,
    Hash,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    strum::Display,
    strum::EnumString,
    serde::Serialize,
    serde::Deserialize,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Strength {
    #[sea_orm(string_value = "Strong")]
    Strong,
    #[sea_orm(string_value = "Weak")]
    Weak,
    #[sea_orm(string_value = "Average")]
    Average,
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn names() {
        assert_eq!(Strength::Strong.to_string(), "Strong");
        assert_eq!(Strength::from_str("Average").unwrap(), Strength::Average);
        assert!(Strength::from_str("Mighty").is_err());
        assert!(Strength::from_str("strong").is_err());
    }
}
